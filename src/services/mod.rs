pub mod review_service;
pub mod loader;

pub use review_service::ReviewService;
pub use loader::ReviewLoader;
