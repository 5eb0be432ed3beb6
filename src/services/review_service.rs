use tracing::{debug, error};

use crate::domain::{FetchOutcome, NoDataReason};
use crate::errors::ReviewsError;
use crate::sources::{decode, DecodeMode, HttpFetcher};

/// Runs one fetch-and-decode pass and folds every failure into `FetchOutcome::NoData`
pub struct ReviewService<H: HttpFetcher> {
    fetcher: H,
    mode: DecodeMode,
}

impl<H: HttpFetcher> ReviewService<H> {
    pub fn new(fetcher: H) -> Self {
        Self {
            fetcher,
            mode: DecodeMode::Strict,
        }
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Fetch reviews from a fully built query URL. Never fails.
    pub fn fetch_reviews(&self, url: &str) -> FetchOutcome {
        let body = match self.fetcher.fetch_body(url) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Problem retrieving the review JSON results");
                return FetchOutcome::NoData(no_data_reason(&e));
            }
        };

        match decode(Some(&body), self.mode) {
            Ok(outcome) => {
                if let FetchOutcome::Fetched(reviews) = &outcome {
                    debug!(count = reviews.len(), "Fetched reviews");
                }
                outcome
            }
            Err(e) => {
                error!(error = %e, "Problem parsing the review JSON results");
                FetchOutcome::NoData(no_data_reason(&e))
            }
        }
    }
}

fn no_data_reason(err: &ReviewsError) -> NoDataReason {
    match err {
        ReviewsError::HttpStatus { code } => NoDataReason::HttpStatus(*code),
        ReviewsError::JsonParse(_) => NoDataReason::Malformed,
        ReviewsError::InvalidUrl(_) => NoDataReason::EmptyResponse,
        _ => NoDataReason::Network,
    }
}
