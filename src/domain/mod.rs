pub mod review;
pub mod outcome;
pub mod settings;

pub use review::{Review, NO_AUTHOR, PUBLICATION_DATE_FORMAT};
pub use outcome::{FetchOutcome, NoDataReason};
pub use settings::{MinRating, OrderBy, ReviewSettings};
