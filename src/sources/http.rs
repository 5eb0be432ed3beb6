use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, error};
use url::Url;

use crate::errors::{ReviewsError, ReviewsResult};

pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const READ_TIMEOUT: Duration = Duration::from_millis(10_000);

#[cfg_attr(test, mockall::automock)]
pub trait HttpFetcher: Send + Sync {
    /// Issue one GET and return the body of a 200 response.
    ///
    /// An unparseable URL yields an empty body rather than an error.
    fn fetch_body(&self, url: &str) -> ReviewsResult<String>;
}

pub struct BlockingHttpFetcher {
    client: Client,
}

impl BlockingHttpFetcher {
    pub fn new() -> Self {
        // The blocking client has no per-read timeout, so the read budget is
        // folded into the overall request timeout.
        Self {
            client: Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(CONNECT_TIMEOUT + READ_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Use a preconfigured client, e.g. one with proxy settings
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for BlockingHttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher for BlockingHttpFetcher {
    fn fetch_body(&self, url: &str) -> ReviewsResult<String> {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(e) => {
                error!(url, error = %e, "Problem building the request URL");
                return Ok(String::new());
            }
        };

        debug!(%url, "Requesting reviews");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(code = status.as_u16(), "Error response code");
            return Err(ReviewsError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
