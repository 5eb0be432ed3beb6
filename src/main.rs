use std::sync::Arc;

use clap::Parser;
use tracing::error;

use reviews::cli::{Cli, Commands, QueryArgs};
use reviews::config::Config;
use reviews::domain::{FetchOutcome, NoDataReason, ReviewSettings};
use reviews::errors::{ReviewsError, ReviewsResult};
use reviews::logging::init_logging;
use reviews::presentation;
use reviews::services::{ReviewLoader, ReviewService};
use reviews::sources::{BlockingHttpFetcher, DecodeMode, ReviewQuery};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ReviewsResult<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::List {
            query,
            json,
            lenient,
        } => cmd_list(&config, &query, json, lenient),
        Commands::Open {
            position,
            query,
            print_url,
        } => cmd_open(&config, &query, position, print_url),
        Commands::Url { query } => cmd_url(&config, &query),
    }
}

/// Flags win over the configured settings
fn settings_for(config: &Config, query: &QueryArgs) -> ReviewSettings {
    ReviewSettings {
        min_rating: query.min_rating.unwrap_or(config.settings.min_rating),
        order_by: query.order_by.unwrap_or(config.settings.order_by),
    }
}

fn load_reviews(config: &Config, query: &QueryArgs, mode: DecodeMode) -> ReviewsResult<FetchOutcome> {
    let review_query = ReviewQuery::new(config.api_key.clone(), settings_for(config, query));

    let url = match review_query.build_url(&config.endpoint) {
        Ok(url) => url,
        Err(e) => {
            error!(endpoint = %config.endpoint, error = %e, "Problem building the URL");
            return Ok(FetchOutcome::NoData(NoDataReason::EmptyResponse));
        }
    };

    let service = Arc::new(ReviewService::new(BlockingHttpFetcher::new()).with_mode(mode));
    let loader = ReviewLoader::spawn(service, url)?;

    // Nothing polled the loader, so `wait` still holds the outcome
    Ok(loader
        .wait()
        .unwrap_or(FetchOutcome::NoData(NoDataReason::EmptyResponse)))
}

fn cmd_list(config: &Config, query: &QueryArgs, json: bool, lenient: bool) -> ReviewsResult<()> {
    let mode = if lenient {
        DecodeMode::Lenient
    } else {
        DecodeMode::Strict
    };

    let outcome = load_reviews(config, query, mode)?;

    if json {
        // `null` for no data, an array (possibly empty) for a successful fetch
        let output = if outcome.is_fetched() {
            serde_json::to_string_pretty(&outcome.into_reviews())?
        } else {
            "null".to_string()
        };
        println!("{}", output);
    } else {
        println!("{}", presentation::render_list(&outcome));
    }

    Ok(())
}

fn cmd_open(
    config: &Config,
    query: &QueryArgs,
    position: usize,
    print_url: bool,
) -> ReviewsResult<()> {
    let outcome = load_reviews(config, query, DecodeMode::Strict)?;

    if let Some(message) = presentation::empty_state(&outcome) {
        println!("{}", message);
        return Ok(());
    }

    let reviews = outcome.into_reviews();
    if position == 0 || position > reviews.len() {
        return Err(ReviewsError::InvalidInput(format!(
            "No review at position {} (list has {})",
            position,
            reviews.len()
        )));
    }

    let review = &reviews[position - 1];

    if print_url {
        println!("{}", review.url);
        return Ok(());
    }

    webbrowser::open(&review.url).map_err(|e| ReviewsError::Browser(e.to_string()))?;
    println!("Opened: {}", review.title);

    Ok(())
}

fn cmd_url(config: &Config, query: &QueryArgs) -> ReviewsResult<()> {
    let url = ReviewQuery::new(config.api_key.clone(), settings_for(config, query))
        .build_url(&config.endpoint)?;

    println!("{}", url);

    Ok(())
}
