pub mod query;
pub mod http;
pub mod decoder;

pub use query::{build_query_url, QueryParam, QueryParams, ReviewQuery};
pub use http::{BlockingHttpFetcher, HttpFetcher};
pub use decoder::{decode, decode_reviews, decode_reviews_lenient, DecodeMode};
