use crate::domain::{MinRating, OrderBy, ReviewSettings};
use crate::errors::{ReviewsError, ReviewsResult};

pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub settings: ReviewSettings,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> ReviewsResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable lookup
    pub fn from_vars<F>(lookup: F) -> ReviewsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GUARDIAN_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ReviewsError::MissingEnvVar("GUARDIAN_API_KEY".to_string()))?;

        let endpoint = lookup("GUARDIAN_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let min_rating = match lookup("REVIEWS_MIN_RATING") {
            Some(value) => value.parse::<MinRating>().map_err(ReviewsError::Config)?,
            None => MinRating::default(),
        };

        let order_by = match lookup("REVIEWS_ORDER_BY") {
            Some(value) => value.parse::<OrderBy>().map_err(ReviewsError::Config)?,
            None => OrderBy::default(),
        };

        Ok(Self {
            api_key,
            endpoint,
            settings: ReviewSettings {
                min_rating,
                order_by,
            },
        })
    }
}
