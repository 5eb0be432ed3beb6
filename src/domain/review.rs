use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author shown when the API returns no contributor tags for a review
pub const NO_AUTHOR: &str = "No author cited.";

/// Timestamp layout used by `webPublicationDate`
pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub thumbnail: String,
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub rating_raw: String,
    pub url: String,
}

impl Review {
    pub fn new(title: String, url: String) -> Self {
        Self {
            thumbnail: String::new(),
            title,
            author: NO_AUTHOR.to_string(),
            published_date: String::new(),
            rating_raw: String::new(),
            url,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: String) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }

    pub fn with_published_date(mut self, published_date: String) -> Self {
        self.published_date = published_date;
        self
    }

    pub fn with_rating(mut self, rating_raw: String) -> Self {
        self.rating_raw = rating_raw;
        self
    }

    /// Star rating, if `rating_raw` is an integer in 0..=5
    pub fn stars(&self) -> Option<u8> {
        self.rating_raw
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|stars| *stars <= 5)
    }

    /// Publication time, if `published_date` matches the API's UTC layout
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.published_date, PUBLICATION_DATE_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
