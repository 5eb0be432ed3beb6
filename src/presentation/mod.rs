//! Text rendering for the review list: what the list view, the date
//! formatter and the empty-state label show to the user.

use crate::domain::{FetchOutcome, NoDataReason, Review};

pub const NO_INTERNET_CONNECTION: &str = "No internet connection.";
pub const NO_REVIEWS_FOUND: &str = "No reviews found.";

const FULL_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Display form of a publication date, e.g. "Mar 03, 1984".
///
/// Dates that don't match the API layout are shown as received.
pub fn format_date(review: &Review) -> String {
    review
        .published_at()
        .map(|at| at.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| review.published_date.clone())
}

/// Five-slot star bar. Unreadable ratings show as zero stars.
pub fn star_bar(review: &Review) -> String {
    let filled = review.stars().unwrap_or(0) as usize;
    std::iter::repeat(FULL_STAR)
        .take(filled)
        .chain(std::iter::repeat(EMPTY_STAR).take(5 - filled))
        .collect()
}

/// Label shown in place of an empty list, or `None` when there is a list to show
pub fn empty_state(outcome: &FetchOutcome) -> Option<&'static str> {
    match outcome {
        FetchOutcome::NoData(NoDataReason::Network) => Some(NO_INTERNET_CONNECTION),
        FetchOutcome::NoData(_) => Some(NO_REVIEWS_FOUND),
        FetchOutcome::Fetched(reviews) if reviews.is_empty() => Some(NO_REVIEWS_FOUND),
        FetchOutcome::Fetched(_) => None,
    }
}

/// One list entry, numbered from 1
pub fn render_review(position: usize, review: &Review) -> String {
    let mut entry = format!(
        "{:>2}. {}\n    {}  {}  {}",
        position,
        review.title,
        star_bar(review),
        review.author,
        format_date(review)
    );

    if !review.thumbnail.is_empty() {
        entry.push_str("\n    Thumbnail: ");
        entry.push_str(&review.thumbnail);
    }

    entry.push_str("\n    ");
    entry.push_str(&review.url);
    entry
}

pub fn render_list(outcome: &FetchOutcome) -> String {
    if let Some(message) = empty_state(outcome) {
        return message.to_string();
    }

    outcome
        .reviews()
        .iter()
        .enumerate()
        .map(|(i, review)| render_review(i + 1, review))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> Review {
        Review::new(
            "Tetris Effect review".to_string(),
            "https://www.theguardian.com/games/tetris-effect".to_string(),
        )
        .with_author("Keza MacDonald".to_string())
        .with_published_date("2018-11-09T08:00:00Z".to_string())
        .with_rating("4".to_string())
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&review()), "Nov 09, 2018");
    }

    #[test]
    fn test_format_date_falls_back_to_raw() {
        let review = review().with_published_date("yesterday".to_string());
        assert_eq!(format_date(&review), "yesterday");
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(&review()), "★★★★☆");
        assert_eq!(star_bar(&review().with_rating("0".to_string())), "☆☆☆☆☆");
        assert_eq!(star_bar(&review().with_rating("5".to_string())), "★★★★★");
    }

    #[test]
    fn test_star_bar_unreadable_rating_is_zero() {
        assert_eq!(star_bar(&review().with_rating("7".to_string())), "☆☆☆☆☆");
        assert_eq!(star_bar(&review().with_rating("n/a".to_string())), "☆☆☆☆☆");
    }

    #[test]
    fn test_empty_state_messages() {
        assert_eq!(
            empty_state(&FetchOutcome::NoData(NoDataReason::Network)),
            Some(NO_INTERNET_CONNECTION)
        );
        assert_eq!(
            empty_state(&FetchOutcome::NoData(NoDataReason::HttpStatus(401))),
            Some(NO_REVIEWS_FOUND)
        );
        assert_eq!(
            empty_state(&FetchOutcome::Fetched(Vec::new())),
            Some(NO_REVIEWS_FOUND)
        );
        assert_eq!(empty_state(&FetchOutcome::Fetched(vec![review()])), None);
    }

    #[test]
    fn test_render_review_without_thumbnail() {
        let rendered = render_review(1, &review());
        assert_eq!(
            rendered,
            " 1. Tetris Effect review\n    ★★★★☆  Keza MacDonald  Nov 09, 2018\n    https://www.theguardian.com/games/tetris-effect"
        );
    }

    #[test]
    fn test_render_review_with_thumbnail() {
        let review = review().with_thumbnail("https://media.guim.co.uk/t.jpg".to_string());
        assert!(render_review(3, &review).contains("Thumbnail: https://media.guim.co.uk/t.jpg"));
    }

    #[test]
    fn test_render_list_numbers_in_order() {
        let second = Review::new("Second".to_string(), "https://b".to_string());
        let rendered = render_list(&FetchOutcome::Fetched(vec![review(), second]));

        let first_pos = rendered.find(" 1. Tetris Effect review").unwrap();
        let second_pos = rendered.find(" 2. Second").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_render_list_empty_state() {
        assert_eq!(
            render_list(&FetchOutcome::NoData(NoDataReason::Malformed)),
            NO_REVIEWS_FOUND
        );
    }
}
