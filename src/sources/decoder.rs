use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{FetchOutcome, NoDataReason, Review, NO_AUTHOR};
use crate::errors::{ReviewsError, ReviewsResult};

/// How a malformed element in `results` is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Any bad element fails the whole response
    #[default]
    Strict,
    /// Bad elements are logged and skipped
    Lenient,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    #[serde(rename = "webTitle")]
    web_title: String,
    #[serde(rename = "webPublicationDate")]
    web_publication_date: String,
    #[serde(rename = "webUrl")]
    web_url: String,
    tags: Vec<Value>,
    fields: RawFields,
}

#[derive(Debug, Deserialize)]
struct RawFields {
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(rename = "starRating")]
    star_rating: String,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    #[serde(rename = "webTitle")]
    web_title: String,
}

impl RawResult {
    fn into_review(self) -> ReviewsResult<Review> {
        // Only the first contributor tag is read
        let author = match self.tags.first() {
            Some(tag) => RawTag::deserialize(tag)?.web_title,
            None => NO_AUTHOR.to_string(),
        };

        Ok(Review::new(self.web_title, self.web_url)
            .with_thumbnail(self.fields.thumbnail.unwrap_or_default())
            .with_author(author)
            .with_published_date(self.web_publication_date)
            .with_rating(self.fields.star_rating))
    }
}

fn decode_element(element: Value) -> ReviewsResult<Review> {
    serde_json::from_value::<RawResult>(element)?.into_review()
}

fn results_of(body: &str) -> ReviewsResult<Vec<Value>> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    Ok(envelope.response.results)
}

/// Decode a search response, failing on the first malformed element.
///
/// An empty body is the no-data signal, not an empty list.
pub fn decode_reviews(body: &str) -> ReviewsResult<FetchOutcome> {
    if body.is_empty() {
        return Ok(FetchOutcome::NoData(NoDataReason::EmptyResponse));
    }

    let reviews = results_of(body)?
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            decode_element(element).map_err(|e| match e {
                ReviewsError::JsonParse(msg) => {
                    ReviewsError::JsonParse(format!("result {}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect::<ReviewsResult<Vec<Review>>>()?;

    debug!(count = reviews.len(), "Decoded reviews");
    Ok(FetchOutcome::Fetched(reviews))
}

/// Decode a search response, dropping malformed elements instead of failing.
///
/// A body without a `response.results` array still fails.
pub fn decode_reviews_lenient(body: &str) -> ReviewsResult<FetchOutcome> {
    if body.is_empty() {
        return Ok(FetchOutcome::NoData(NoDataReason::EmptyResponse));
    }

    let mut reviews = Vec::new();
    for (index, element) in results_of(body)?.into_iter().enumerate() {
        match decode_element(element) {
            Ok(review) => reviews.push(review),
            Err(e) => warn!(index, error = %e, "Skipping malformed review"),
        }
    }

    debug!(count = reviews.len(), "Decoded reviews");
    Ok(FetchOutcome::Fetched(reviews))
}

/// Decode a possibly absent body with the given mode
pub fn decode(body: Option<&str>, mode: DecodeMode) -> ReviewsResult<FetchOutcome> {
    let body = body.unwrap_or_default();
    match mode {
        DecodeMode::Strict => decode_reviews(body),
        DecodeMode::Lenient => decode_reviews_lenient(body),
    }
}
