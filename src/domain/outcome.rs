use super::Review;

/// Why a fetch produced no review list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// Nothing was fetched: empty body, or the request URL was unusable
    EmptyResponse,
    /// Transport failure (DNS, refused connection, timeout, broken stream)
    Network,
    /// Server answered with something other than 200
    HttpStatus(u16),
    /// Body was not the expected review JSON
    Malformed,
}

/// Result of one pass through the review pipeline.
///
/// `NoData` is the "nothing to show" signal. `Fetched` with an empty list means
/// the request succeeded and the search simply matched no reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    NoData(NoDataReason),
    Fetched(Vec<Review>),
}

impl FetchOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    pub fn reviews(&self) -> &[Review] {
        match self {
            FetchOutcome::Fetched(reviews) => reviews,
            FetchOutcome::NoData(_) => &[],
        }
    }

    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            FetchOutcome::Fetched(reviews) => reviews,
            FetchOutcome::NoData(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_has_no_reviews() {
        let outcome = FetchOutcome::NoData(NoDataReason::Network);
        assert!(!outcome.is_fetched());
        assert!(outcome.reviews().is_empty());
    }

    #[test]
    fn test_empty_fetch_is_distinct_from_no_data() {
        let empty = FetchOutcome::Fetched(Vec::new());
        assert!(empty.is_fetched());
        assert_ne!(empty, FetchOutcome::NoData(NoDataReason::EmptyResponse));
    }

    #[test]
    fn test_into_reviews_keeps_order() {
        let outcome = FetchOutcome::Fetched(vec![
            Review::new("A".to_string(), "https://a".to_string()),
            Review::new("B".to_string(), "https://b".to_string()),
        ]);
        let titles: Vec<String> = outcome.into_reviews().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
