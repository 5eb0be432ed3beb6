use std::collections::BTreeMap;

use url::Url;

use crate::domain::ReviewSettings;
use crate::errors::ReviewsResult;

/// Query parameters understood by the content search endpoint.
///
/// Declaration order is the order parameters are appended to the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryParam {
    Q,
    Section,
    Tag,
    StarRating,
    ShowTags,
    ShowFields,
    Page,
    PageSize,
    ApiKey,
    OrderBy,
}

impl QueryParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryParam::Q => "q",
            QueryParam::Section => "section",
            QueryParam::Tag => "tag",
            QueryParam::StarRating => "star-rating",
            QueryParam::ShowTags => "show-tags",
            QueryParam::ShowFields => "show-fields",
            QueryParam::Page => "page",
            QueryParam::PageSize => "page-size",
            QueryParam::ApiKey => "api-key",
            QueryParam::OrderBy => "order-by",
        }
    }
}

pub type QueryParams = BTreeMap<QueryParam, String>;

/// Append `params` to `base`, percent-encoded, in `QueryParam` order.
///
/// Any query string already on `base` is kept in front.
pub fn build_query_url(base: &str, params: &QueryParams) -> ReviewsResult<String> {
    let mut url = Url::parse(base)?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (param, value) in params {
            pairs.append_pair(param.as_str(), value);
        }
    }

    Ok(url.into())
}

/// The game-review search this app issues
#[derive(Debug, Clone)]
pub struct ReviewQuery {
    api_key: String,
    settings: ReviewSettings,
}

impl ReviewQuery {
    pub const SEARCH_TERM: &'static str = "games";
    pub const SECTION: &'static str = "games";
    pub const TAG: &'static str = "tone/reviews";
    pub const SHOW_TAGS: &'static str = "contributor";
    pub const SHOW_FIELDS: &'static str = "thumbnail,starRating";
    pub const PAGE: u32 = 1;
    pub const PAGE_SIZE: u32 = 20;

    pub fn new(api_key: impl Into<String>, settings: ReviewSettings) -> Self {
        Self {
            api_key: api_key.into(),
            settings,
        }
    }

    pub fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert(QueryParam::Q, Self::SEARCH_TERM.to_string());
        params.insert(QueryParam::Section, Self::SECTION.to_string());
        params.insert(QueryParam::Tag, Self::TAG.to_string());
        params.insert(QueryParam::StarRating, self.settings.min_rating.to_string());
        params.insert(QueryParam::ShowTags, Self::SHOW_TAGS.to_string());
        params.insert(QueryParam::ShowFields, Self::SHOW_FIELDS.to_string());
        params.insert(QueryParam::Page, Self::PAGE.to_string());
        params.insert(QueryParam::PageSize, Self::PAGE_SIZE.to_string());
        params.insert(QueryParam::ApiKey, self.api_key.clone());
        params.insert(QueryParam::OrderBy, self.settings.order_by.to_string());
        params
    }

    pub fn build_url(&self, base: &str) -> ReviewsResult<String> {
        build_query_url(base, &self.params())
    }
}
