use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Request errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {code}")]
    HttpStatus { code: u16 },

    // Parsing errors
    #[error("Review JSON parsing failed: {0}")]
    JsonParse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not open browser: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for ReviewsError {
    fn from(err: serde_json::Error) -> Self {
        ReviewsError::JsonParse(err.to_string())
    }
}

impl From<url::ParseError> for ReviewsError {
    fn from(err: url::ParseError) -> Self {
        ReviewsError::InvalidUrl(err.to_string())
    }
}

pub type ReviewsResult<T> = Result<T, ReviewsError>;
