use clap::{Args, Parser, Subcommand};

use crate::domain::{MinRating, OrderBy};

#[derive(Parser)]
#[command(name = "reviews")]
#[command(about = "Game reviews from The Guardian, in your terminal")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Minimum star rating, 1 to 5 (overrides REVIEWS_MIN_RATING)
    #[arg(long)]
    pub min_rating: Option<MinRating>,

    /// Sort order: newest, oldest or relevance (overrides REVIEWS_ORDER_BY)
    #[arg(long)]
    pub order_by: Option<OrderBy>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and list reviews
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Print reviews as JSON instead of a list
        #[arg(long)]
        json: bool,

        /// Skip malformed results instead of discarding the whole response
        #[arg(long)]
        lenient: bool,
    },

    /// Open a review from the list in the browser
    Open {
        /// Position of the review in the list (starting at 1)
        position: usize,

        #[command(flatten)]
        query: QueryArgs,

        /// Print the review URL instead of opening a browser
        #[arg(long)]
        print_url: bool,
    },

    /// Print the search URL without fetching it
    Url {
        #[command(flatten)]
        query: QueryArgs,
    },
}
