use crate::error::EdaError;
use crate::storage::repository::report_repo::{CategoryPerformanceRow, RatingDistRow};

/// Percentage share of one rating value, read from the distribution.
/// Errors when the rating value is absent — the insight text assumes both
/// 5★ and 1★ buckets exist.
pub fn rating_percentage(dist: &[RatingDistRow], rating: i64) -> Result<f64, EdaError> {
    dist.iter()
        .find(|r| r.rating == rating)
        .map(|r| r.percentage)
        .ok_or(EdaError::MissingRating(rating))
}

/// Percentage of reviewers with exactly one review.
///
/// Known approximation carried over from the source analysis: it treats
/// the `top_shown` reviewers on the top list as the only multi-review
/// reviewers, so with more than `top_shown` distinct reviewers it
/// systematically undercounts single-review reviewers by up to
/// `top_shown`. It is exact only when every reviewer fits on the list.
/// Kept as-is deliberately so the printed insight matches the historical
/// report; correcting it would change published numbers.
pub fn single_review_reviewer_pct(total_reviewers: i64, top_shown: usize) -> f64 {
    if total_reviewers == 0 {
        return 0.0;
    }
    let single = total_reviewers - top_shown as i64;
    (single as f64 / total_reviewers as f64) * 100.0
}

/// The category with the most reviews is the first row of the
/// review-count ordering.
pub fn busiest_category(categories: &[CategoryPerformanceRow]) -> Option<&CategoryPerformanceRow> {
    categories.first()
}

pub fn highest_rated_category(
    categories: &[CategoryPerformanceRow],
) -> Option<&CategoryPerformanceRow> {
    categories
        .iter()
        .max_by(|a, b| a.avg_rating.total_cmp(&b.avg_rating))
}

/// Days between a reviewer's first and last review.
pub fn days_active(first_epoch: i64, last_epoch: i64) -> f64 {
    (last_epoch - first_epoch) as f64 / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(rows: &[(i64, f64)]) -> Vec<RatingDistRow> {
        rows.iter()
            .map(|(rating, percentage)| RatingDistRow {
                rating: *rating,
                count: 1,
                percentage: *percentage,
            })
            .collect()
    }

    fn cat(name: &str, reviews: i64, rating: f64) -> CategoryPerformanceRow {
        CategoryPerformanceRow {
            category: name.to_string(),
            review_count: reviews,
            product_count: 1,
            reviewer_count: 1,
            avg_rating: rating,
            avg_review_length: None,
        }
    }

    #[test]
    fn rating_percentage_reads_the_bucket() {
        let d = dist(&[(5, 66.67), (1, 33.33)]);
        assert_eq!(rating_percentage(&d, 5).unwrap(), 66.67);
        assert_eq!(rating_percentage(&d, 1).unwrap(), 33.33);
    }

    #[test]
    fn missing_rating_bucket_is_an_error() {
        let d = dist(&[(5, 100.0)]);
        let err = rating_percentage(&d, 1).unwrap_err();
        assert!(matches!(err, EdaError::MissingRating(1)));
    }

    #[test]
    fn single_review_pct_is_exact_below_the_list_size() {
        // 3 reviewers, all shown: none left over
        assert_eq!(single_review_reviewer_pct(3, 3), 0.0);
    }

    #[test]
    fn single_review_pct_undercounts_above_the_list_size() {
        // 100 reviewers, 10 shown. Even if 95 wrote a single review, the
        // derivation reports 90% — the documented undercount.
        let pct = single_review_reviewer_pct(100, 10);
        assert!((pct - 90.0).abs() < 1e-9);
        assert!(pct < 95.0);
    }

    #[test]
    fn category_insights() {
        let cats = vec![cat("books", 100, 4.1), cat("electronics", 50, 4.6)];
        assert_eq!(busiest_category(&cats).unwrap().category, "books");
        assert_eq!(highest_rated_category(&cats).unwrap().category, "electronics");
    }

    #[test]
    fn days_active_from_epochs() {
        assert_eq!(days_active(0, 86_400 * 3), 3.0);
        assert_eq!(days_active(1_000, 1_000), 0.0);
    }
}
