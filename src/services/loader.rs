use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::domain::{FetchOutcome, NoDataReason};
use crate::errors::ReviewsResult;
use crate::services::ReviewService;
use crate::sources::HttpFetcher;

/// Runs a `ReviewService` fetch on a worker thread and hands the outcome back
/// to the thread that spawned it.
pub struct ReviewLoader {
    receiver: Receiver<FetchOutcome>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl ReviewLoader {
    pub fn spawn<H>(service: Arc<ReviewService<H>>, url: String) -> ReviewsResult<Self>
    where
        H: HttpFetcher + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let mode = service.mode();

        let handle = thread::Builder::new()
            .name("review-loader".to_string())
            .spawn(move || {
                let outcome = service.fetch_reviews(&url);
                // The loader may already be gone; nobody is left to tell
                let _ = sender.send(outcome);
            })?;

        debug!(?mode, "Review loader started");

        Ok(Self {
            receiver,
            handle: Some(handle),
            delivered: false,
        })
    }

    /// Non-blocking check. Yields the outcome once, then `None`.
    pub fn try_result(&mut self) -> Option<FetchOutcome> {
        if self.delivered {
            return None;
        }

        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                warn!("Review loader stopped without a result");
                FetchOutcome::NoData(NoDataReason::EmptyResponse)
            }
        };

        self.finish();
        Some(outcome)
    }

    /// Block until the worker delivers its outcome.
    ///
    /// Returns `None` when `try_result` already handed the outcome out.
    pub fn wait(mut self) -> Option<FetchOutcome> {
        if self.delivered {
            return None;
        }

        let outcome = self.receiver.recv().unwrap_or_else(|_| {
            warn!("Review loader stopped without a result");
            FetchOutcome::NoData(NoDataReason::EmptyResponse)
        });

        self.finish();
        Some(outcome)
    }

    fn finish(&mut self) {
        self.delivered = true;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReviewsError;
    use crate::sources::http::MockHttpFetcher;
    use std::time::Duration;

    const BODY: &str = r#"{"response":{"results":[
        {"webTitle":"Celeste review","webPublicationDate":"2018-01-25T12:00:00Z",
         "webUrl":"https://www.theguardian.com/games/celeste","tags":[],"fields":{"starRating":"5"}}
    ]}}"#;

    fn service_with(body: ReviewsResult<String>) -> Arc<ReviewService<MockHttpFetcher>> {
        let mut fetcher = MockHttpFetcher::new();
        let body = std::sync::Mutex::new(Some(body));
        fetcher.expect_fetch_body().times(1).returning(move |_| {
            body.lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(String::new()))
        });
        Arc::new(ReviewService::new(fetcher))
    }

    #[test]
    fn test_wait_delivers_outcome() {
        let service = service_with(Ok(BODY.to_string()));
        let loader = ReviewLoader::spawn(service, "https://example.com/search".to_string()).unwrap();

        let outcome = loader.wait().unwrap();
        assert_eq!(outcome.reviews().len(), 1);
        assert_eq!(outcome.reviews()[0].title, "Celeste review");
    }

    #[test]
    fn test_wait_delivers_no_data() {
        let service = service_with(Err(ReviewsError::HttpStatus { code: 503 }));
        let loader = ReviewLoader::spawn(service, "https://example.com/search".to_string()).unwrap();

        assert_eq!(
            loader.wait(),
            Some(FetchOutcome::NoData(NoDataReason::HttpStatus(503)))
        );
    }

    #[test]
    fn test_try_result_yields_once() {
        let service = service_with(Ok(BODY.to_string()));
        let mut loader =
            ReviewLoader::spawn(service, "https://example.com/search".to_string()).unwrap();

        let mut outcome = None;
        for _ in 0..500 {
            outcome = loader.try_result();
            if outcome.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        assert!(outcome.unwrap().is_fetched());
        assert!(loader.try_result().is_none());
    }

    #[test]
    fn test_wait_after_try_result_has_nothing_left() {
        let service = service_with(Ok(BODY.to_string()));
        let mut loader =
            ReviewLoader::spawn(service, "https://example.com/search".to_string()).unwrap();

        while loader.try_result().is_none() {
            thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(loader.wait(), None);
    }

    #[test]
    fn test_loaders_run_independently() {
        let first = ReviewLoader::spawn(
            service_with(Ok(BODY.to_string())),
            "https://example.com/a".to_string(),
        )
        .unwrap();
        let second = ReviewLoader::spawn(
            service_with(Ok(r#"{"response":{"results":[]}}"#.to_string())),
            "https://example.com/b".to_string(),
        )
        .unwrap();

        assert_eq!(second.wait(), Some(FetchOutcome::Fetched(Vec::new())));
        assert_eq!(first.wait().unwrap().reviews().len(), 1);
    }
}
