use crate::error::EdaError;
use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Months with fewer reviews than this are dropped from the monthly trend
/// (sparsity floor; single-review months are noise).
pub const MONTHLY_TREND_FLOOR: i64 = 10;
/// Products need at least this many reviews to rank in the top list.
pub const TOP_PRODUCT_MIN_REVIEWS: i64 = 5;
/// Length of the top-products and top-reviewers lists.
pub const TOP_LIMIT: i64 = 10;

#[derive(Debug, Clone, FromQueryResult)]
pub struct OverviewRow {
    pub total_reviews: i64,
    pub unique_products: i64,
    pub unique_reviewers: i64,
    pub avg_rating: f64,
    pub first_review: i64,
    pub last_review: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct RatingDistRow {
    pub rating: i64,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct MonthlyTrendRow {
    pub month: String,
    pub avg_rating: f64,
    pub review_count: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct TopProductRow {
    pub asin: String,
    pub review_count: i64,
    pub avg_rating: f64,
    pub unique_reviewers: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductStatsRow {
    pub product_count: i64,
    pub avg_reviews_per_product: f64,
    pub max_reviews: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct TopReviewerRow {
    pub reviewer_id: String,
    pub review_count: i64,
    pub avg_rating: f64,
    pub first_review: i64,
    pub last_review: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ReviewerStatsRow {
    pub reviewer_count: i64,
    pub avg_reviews: f64,
    pub max_reviews: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CategoryPerformanceRow {
    pub category: String,
    pub review_count: i64,
    pub product_count: i64,
    pub reviewer_count: i64,
    pub avg_rating: f64,
    pub avg_review_length: Option<f64>,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct HelpfulnessRow {
    pub helpfulness: String,
    pub review_count: i64,
    pub avg_rating: f64,
    pub avg_length: Option<f64>,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct HelpfulByRatingRow {
    pub rating: i64,
    pub avg_helpful_votes: f64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct RatingCountRow {
    pub rating: i64,
    pub count: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct MonthCountRow {
    pub month: String,
    pub review_count: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CategoryShareRow {
    pub category: String,
    pub review_count: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct LengthBucketRow {
    pub length_group: String,
    pub count: i64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ActivityBucketRow {
    pub activity_level: String,
    pub reviewer_count: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct SentimentSampleRow {
    pub review_text: String,
    pub overall: i64,
    pub category: String,
}

fn stmt(sql: &str) -> Statement {
    Statement::from_string(DatabaseBackend::Sqlite, sql.to_string())
}

/// The fixed battery of read-only aggregate queries over `reviews`.
///
/// Each function is independent; none mutates anything. A query that
/// cannot execute (missing table, malformed store) propagates as an error
/// and is fatal for the reporting run.
pub struct ReportRepository;

impl ReportRepository {
    pub async fn overview(db: &DatabaseConnection) -> Result<OverviewRow> {
        let row = OverviewRow::find_by_statement(stmt(
            "SELECT \
                 COUNT(*) as total_reviews, \
                 COUNT(DISTINCT asin) as unique_products, \
                 COUNT(DISTINCT reviewerID) as unique_reviewers, \
                 AVG(overall) as avg_rating, \
                 MIN(unixReviewTime) as first_review, \
                 MAX(unixReviewTime) as last_review \
             FROM reviews",
        ))
        .one(db)
        .await?
        .ok_or(EdaError::EmptyOverview)?;
        Ok(row)
    }

    /// Per-rating count and share of total, descending by rating value.
    /// Rating 0 ("unset") shows up as its own bucket when present.
    pub async fn rating_distribution(db: &DatabaseConnection) -> Result<Vec<RatingDistRow>> {
        Ok(RatingDistRow::find_by_statement(stmt(
            "SELECT \
                 overall as rating, \
                 COUNT(*) as count, \
                 ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM reviews), 2) as percentage \
             FROM reviews \
             GROUP BY overall \
             ORDER BY overall DESC",
        ))
        .all(db)
        .await?)
    }

    pub async fn monthly_trend(db: &DatabaseConnection) -> Result<Vec<MonthlyTrendRow>> {
        Ok(MonthlyTrendRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT \
                 strftime('%Y-%m', datetime(unixReviewTime, 'unixepoch')) as month, \
                 AVG(overall) as avg_rating, \
                 COUNT(*) as review_count \
             FROM reviews \
             GROUP BY month \
             HAVING review_count >= ? \
             ORDER BY month",
            [MONTHLY_TREND_FLOOR.into()],
        ))
        .all(db)
        .await?)
    }

    pub async fn top_products(db: &DatabaseConnection) -> Result<Vec<TopProductRow>> {
        Ok(TopProductRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT \
                 asin, \
                 COUNT(*) as review_count, \
                 AVG(overall) as avg_rating, \
                 COUNT(DISTINCT reviewerID) as unique_reviewers \
             FROM reviews \
             GROUP BY asin \
             HAVING review_count >= ? \
             ORDER BY review_count DESC \
             LIMIT ?",
            [TOP_PRODUCT_MIN_REVIEWS.into(), TOP_LIMIT.into()],
        ))
        .all(db)
        .await?)
    }

    pub async fn product_stats(db: &DatabaseConnection) -> Result<ProductStatsRow> {
        let row = ProductStatsRow::find_by_statement(stmt(
            "SELECT \
                 COUNT(*) as product_count, \
                 AVG(review_count) as avg_reviews_per_product, \
                 MAX(review_count) as max_reviews \
             FROM ( \
                 SELECT asin, COUNT(*) as review_count \
                 FROM reviews \
                 GROUP BY asin \
             )",
        ))
        .one(db)
        .await?
        .ok_or(EdaError::EmptyOverview)?;
        Ok(row)
    }

    pub async fn top_reviewers(db: &DatabaseConnection) -> Result<Vec<TopReviewerRow>> {
        Ok(TopReviewerRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT \
                 reviewerID as reviewer_id, \
                 COUNT(*) as review_count, \
                 AVG(overall) as avg_rating, \
                 MIN(unixReviewTime) as first_review, \
                 MAX(unixReviewTime) as last_review \
             FROM reviews \
             GROUP BY reviewerID \
             ORDER BY review_count DESC \
             LIMIT ?",
            [TOP_LIMIT.into()],
        ))
        .all(db)
        .await?)
    }

    pub async fn reviewer_stats(db: &DatabaseConnection) -> Result<ReviewerStatsRow> {
        let row = ReviewerStatsRow::find_by_statement(stmt(
            "SELECT \
                 COUNT(*) as reviewer_count, \
                 AVG(review_count) as avg_reviews, \
                 MAX(review_count) as max_reviews \
             FROM ( \
                 SELECT reviewerID, COUNT(*) as review_count \
                 FROM reviews \
                 GROUP BY reviewerID \
             )",
        ))
        .one(db)
        .await?
        .ok_or(EdaError::EmptyOverview)?;
        Ok(row)
    }

    /// NULL review text contributes NULL to the length average and is
    /// excluded by SQL aggregate semantics, not filtered explicitly.
    pub async fn category_performance(db: &DatabaseConnection) -> Result<Vec<CategoryPerformanceRow>> {
        Ok(CategoryPerformanceRow::find_by_statement(stmt(
            "SELECT \
                 category, \
                 COUNT(*) as review_count, \
                 COUNT(DISTINCT asin) as product_count, \
                 COUNT(DISTINCT reviewerID) as reviewer_count, \
                 AVG(overall) as avg_rating, \
                 AVG(LENGTH(reviewText)) as avg_review_length \
             FROM reviews \
             GROUP BY category \
             ORDER BY review_count DESC",
        ))
        .all(db)
        .await?)
    }

    pub async fn helpfulness_split(db: &DatabaseConnection) -> Result<Vec<HelpfulnessRow>> {
        Ok(HelpfulnessRow::find_by_statement(stmt(
            "SELECT \
                 CASE WHEN helpful > 0 THEN 'Helpful' ELSE 'Not Helpful' END as helpfulness, \
                 COUNT(*) as review_count, \
                 AVG(overall) as avg_rating, \
                 AVG(LENGTH(reviewText)) as avg_length \
             FROM reviews \
             GROUP BY helpfulness",
        ))
        .all(db)
        .await?)
    }

    pub async fn helpful_votes_by_rating(db: &DatabaseConnection) -> Result<Vec<HelpfulByRatingRow>> {
        Ok(HelpfulByRatingRow::find_by_statement(stmt(
            "SELECT \
                 overall as rating, \
                 AVG(helpful) as avg_helpful_votes \
             FROM reviews \
             GROUP BY overall \
             ORDER BY overall",
        ))
        .all(db)
        .await?)
    }

    // --- dashboard feeds -------------------------------------------------

    pub async fn rating_counts(db: &DatabaseConnection) -> Result<Vec<RatingCountRow>> {
        Ok(RatingCountRow::find_by_statement(stmt(
            "SELECT overall as rating, COUNT(*) as count \
             FROM reviews GROUP BY overall ORDER BY overall",
        ))
        .all(db)
        .await?)
    }

    /// Reviews per month with no sparsity floor; the trend chart shows
    /// every month.
    pub async fn reviews_over_time(db: &DatabaseConnection) -> Result<Vec<MonthCountRow>> {
        Ok(MonthCountRow::find_by_statement(stmt(
            "SELECT \
                 strftime('%Y-%m', datetime(unixReviewTime, 'unixepoch')) as month, \
                 COUNT(*) as review_count \
             FROM reviews \
             GROUP BY month \
             ORDER BY month",
        ))
        .all(db)
        .await?)
    }

    pub async fn category_share(db: &DatabaseConnection) -> Result<Vec<CategoryShareRow>> {
        Ok(CategoryShareRow::find_by_statement(stmt(
            "SELECT category, COUNT(*) as review_count \
             FROM reviews GROUP BY category ORDER BY review_count DESC",
        ))
        .all(db)
        .await?)
    }

    pub async fn length_buckets(db: &DatabaseConnection) -> Result<Vec<LengthBucketRow>> {
        Ok(LengthBucketRow::find_by_statement(stmt(
            "SELECT \
                 CASE \
                     WHEN LENGTH(reviewText) < 50 THEN '0-50' \
                     WHEN LENGTH(reviewText) < 200 THEN '50-200' \
                     WHEN LENGTH(reviewText) < 500 THEN '200-500' \
                     ELSE '500+' \
                 END as length_group, \
                 COUNT(*) as count, \
                 AVG(overall) as avg_rating \
             FROM reviews \
             WHERE reviewText IS NOT NULL \
             GROUP BY length_group",
        ))
        .all(db)
        .await?)
    }

    pub async fn reviewer_activity_buckets(db: &DatabaseConnection) -> Result<Vec<ActivityBucketRow>> {
        Ok(ActivityBucketRow::find_by_statement(stmt(
            "SELECT \
                 CASE \
                     WHEN review_count = 1 THEN '1' \
                     WHEN review_count <= 5 THEN '2-5' \
                     WHEN review_count <= 10 THEN '6-10' \
                     ELSE '10+' \
                 END as activity_level, \
                 COUNT(*) as reviewer_count \
             FROM ( \
                 SELECT reviewerID, COUNT(*) as review_count \
                 FROM reviews \
                 GROUP BY reviewerID \
             ) \
             GROUP BY activity_level",
        ))
        .all(db)
        .await?)
    }

    /// Random sample of reviews with usable text (non-null, more than 10
    /// characters) for the sentiment stage.
    pub async fn sample_reviews_with_text(
        db: &DatabaseConnection,
        sample_size: u32,
    ) -> Result<Vec<SentimentSampleRow>> {
        Ok(SentimentSampleRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT reviewText as review_text, overall, category \
             FROM reviews \
             WHERE reviewText IS NOT NULL AND LENGTH(reviewText) > 10 \
             ORDER BY RANDOM() \
             LIMIT ?",
            [i64::from(sample_size).into()],
        ))
        .all(db)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::entity::{review, Review};
    use crate::storage::testutil::open_temp;
    use sea_orm::{EntityTrait, NotSet, Set};

    struct Fixture {
        reviewer: &'static str,
        asin: &'static str,
        rating: i64,
        helpful: i64,
        text: Option<&'static str>,
        epoch: i64,
        category: &'static str,
    }

    impl Default for Fixture {
        fn default() -> Self {
            Self {
                reviewer: "A1",
                asin: "B1",
                rating: 5,
                helpful: 0,
                text: Some("decent product"),
                epoch: 1_388_534_400, // 2014-01-01
                category: "electronics",
            }
        }
    }

    async fn seed(db: &sea_orm::DatabaseConnection, rows: Vec<Fixture>) {
        let models: Vec<review::ActiveModel> = rows
            .into_iter()
            .map(|f| review::ActiveModel {
                id: NotSet,
                reviewer_id: Set(f.reviewer.to_string()),
                asin: Set(f.asin.to_string()),
                reviewer_name: Set(None),
                helpful: Set(f.helpful),
                review_text: Set(f.text.map(str::to_string)),
                overall: Set(f.rating),
                summary: Set(None),
                unix_review_time: Set(f.epoch),
                review_time: Set(None),
                category: Set(f.category.to_string()),
            })
            .collect();
        Review::insert_many(models).exec(db).await.unwrap();
    }

    fn fx(reviewer: &'static str, asin: &'static str, rating: i64) -> Fixture {
        Fixture { reviewer, asin, rating, ..Fixture::default() }
    }

    #[tokio::test]
    async fn rating_distribution_percentages_match_known_split() {
        let (_dir, db) = open_temp().await;
        seed(&db, vec![fx("r1", "p1", 5), fx("r2", "p1", 5), fx("r3", "p1", 1)]).await;

        let dist = ReportRepository::rating_distribution(&db).await.unwrap();
        assert_eq!(dist.len(), 2);
        // descending by rating value
        assert_eq!(dist[0].rating, 5);
        assert_eq!(dist[0].count, 2);
        assert!((dist[0].percentage - 66.67).abs() < 1e-9);
        assert_eq!(dist[1].rating, 1);
        assert!((dist[1].percentage - 33.33).abs() < 1e-9);
    }

    #[tokio::test]
    async fn rating_percentages_sum_to_one_hundred() {
        let (_dir, db) = open_temp().await;
        seed(
            &db,
            vec![
                fx("r1", "p1", 5),
                fx("r2", "p1", 4),
                fx("r3", "p2", 3),
                fx("r4", "p2", 3),
                fx("r5", "p3", 1),
                fx("r6", "p3", 0), // "unset" sentinel stays in the distribution
            ],
        )
        .await;

        let dist = ReportRepository::rating_distribution(&db).await.unwrap();
        let total: f64 = dist.iter().map(|r| r.percentage).sum();
        assert!((total - 100.0).abs() < 0.05);
    }

    #[tokio::test]
    async fn top_products_applies_floor_and_aggregates() {
        let (_dir, db) = open_temp().await;
        let mut rows = vec![
            fx("r1", "p1", 5),
            fx("r2", "p1", 5),
            fx("r3", "p1", 1),
            fx("r4", "p1", 4),
            fx("r5", "p1", 4),
        ];
        // p2 sits below the 5-review floor
        rows.push(fx("r1", "p2", 3));
        seed(&db, rows).await;

        let top = ReportRepository::top_products(&db).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].asin, "p1");
        assert_eq!(top[0].review_count, 5);
        assert_eq!(top[0].unique_reviewers, 5);
        assert!((top[0].avg_rating - 3.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn product_stats_for_a_single_thrice_reviewed_product() {
        let (_dir, db) = open_temp().await;
        seed(&db, vec![fx("r1", "p1", 5), fx("r2", "p1", 5), fx("r3", "p1", 1)]).await;

        let stats = ReportRepository::product_stats(&db).await.unwrap();
        assert_eq!(stats.product_count, 1);
        assert_eq!(stats.max_reviews, 3);
        assert!((stats.avg_reviews_per_product - 3.0).abs() < 1e-9);

        // avg rating for p1 is 11/3 = 3.67
        let top = ReportRepository::top_products(&db).await.unwrap();
        assert!(top.is_empty()); // only 3 reviews, below the floor of 5

        let overview = ReportRepository::overview(&db).await.unwrap();
        assert_eq!(overview.total_reviews, 3);
        assert!((overview.avg_rating - 11.0 / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn helpfulness_split_scenario() {
        let (_dir, db) = open_temp().await;
        let specs = [(0_i64, 2_i64), (3, 4), (0, 1), (5, 5)];
        let rows = specs
            .iter()
            .enumerate()
            .map(|(i, (helpful, rating))| Fixture {
                reviewer: Box::leak(format!("r{i}").into_boxed_str()),
                asin: "p1",
                rating: *rating,
                helpful: *helpful,
                ..Fixture::default()
            })
            .collect();
        seed(&db, rows).await;

        let mut split = ReportRepository::helpfulness_split(&db).await.unwrap();
        split.sort_by(|a, b| a.helpfulness.cmp(&b.helpfulness));
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].helpfulness, "Helpful");
        assert_eq!(split[0].review_count, 2);
        assert!((split[0].avg_rating - 4.5).abs() < 1e-9);
        assert_eq!(split[1].helpfulness, "Not Helpful");
        assert_eq!(split[1].review_count, 2);
        assert!((split[1].avg_rating - 1.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn helpful_votes_by_rating_orders_ascending() {
        let (_dir, db) = open_temp().await;
        let mut r1 = fx("r1", "p1", 5);
        r1.helpful = 4;
        let mut r2 = fx("r2", "p1", 1);
        r2.helpful = 1;
        seed(&db, vec![r1, r2]).await;

        let rows = ReportRepository::helpful_votes_by_rating(&db).await.unwrap();
        assert_eq!(rows[0].rating, 1);
        assert!((rows[0].avg_helpful_votes - 1.0).abs() < 1e-9);
        assert_eq!(rows[1].rating, 5);
        assert!((rows[1].avg_helpful_votes - 4.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn monthly_trend_drops_sparse_months() {
        let (_dir, db) = open_temp().await;
        let jan_2014 = 1_388_534_400; // >= 10 reviews
        let mar_2014 = 1_393_632_000; // only 3 reviews
        let mut rows = Vec::new();
        for i in 0..12 {
            rows.push(Fixture {
                reviewer: Box::leak(format!("ja{i}").into_boxed_str()),
                epoch: jan_2014 + i * 3600,
                ..Fixture::default()
            });
        }
        for i in 0..3 {
            rows.push(Fixture {
                reviewer: Box::leak(format!("ma{i}").into_boxed_str()),
                epoch: mar_2014 + i * 3600,
                ..Fixture::default()
            });
        }
        seed(&db, rows).await;

        let trend = ReportRepository::monthly_trend(&db).await.unwrap();
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].month, "2014-01");
        assert_eq!(trend[0].review_count, 12);

        // the unfloored feed still carries every month
        let all = ReportRepository::reviews_over_time(&db).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].month, "2014-03");
    }

    #[tokio::test]
    async fn category_counts_sum_to_overview_total() {
        let (_dir, db) = open_temp().await;
        let mut rows = vec![fx("r1", "p1", 5), fx("r2", "p2", 4)];
        rows.push(Fixture { category: "books", reviewer: "r3", ..Fixture::default() });
        rows.push(Fixture { category: "books", reviewer: "r4", text: None, ..Fixture::default() });
        seed(&db, rows).await;

        let overview = ReportRepository::overview(&db).await.unwrap();
        let cats = ReportRepository::category_performance(&db).await.unwrap();
        let summed: i64 = cats.iter().map(|c| c.review_count).sum();
        assert_eq!(summed, overview.total_reviews);
        // ordered descending by review count
        assert!(cats[0].review_count >= cats[1].review_count);
    }

    #[tokio::test]
    async fn null_text_excluded_from_length_average() {
        let (_dir, db) = open_temp().await;
        let with_text = Fixture { text: Some("abcd"), ..Fixture::default() };
        let without = Fixture { reviewer: "r2", text: None, ..Fixture::default() };
        seed(&db, vec![with_text, without]).await;

        let cats = ReportRepository::category_performance(&db).await.unwrap();
        assert_eq!(cats.len(), 1);
        // NULL row is excluded, so the average is exactly LENGTH("abcd")
        assert_eq!(cats[0].avg_review_length, Some(4.0));

        let buckets = ReportRepository::length_buckets(&db).await.unwrap();
        let total: i64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn top_reviewers_limits_to_ten() {
        let (_dir, db) = open_temp().await;
        let mut rows = Vec::new();
        for i in 0..12 {
            // reviewer i writes i+1 reviews
            for j in 0..=i {
                rows.push(Fixture {
                    reviewer: Box::leak(format!("rev{i}").into_boxed_str()),
                    asin: Box::leak(format!("p{j}").into_boxed_str()),
                    ..Fixture::default()
                });
            }
        }
        seed(&db, rows).await;

        let top = ReportRepository::top_reviewers(&db).await.unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].reviewer_id, "rev11");
        assert_eq!(top[0].review_count, 12);
        // the single-review reviewers rev0 and rev1 fall off the list
        assert!(top.iter().all(|r| r.review_count >= 3));

        let stats = ReportRepository::reviewer_stats(&db).await.unwrap();
        assert_eq!(stats.reviewer_count, 12);
        assert_eq!(stats.max_reviews, 12);
    }

    #[tokio::test]
    async fn activity_buckets_partition_reviewers() {
        let (_dir, db) = open_temp().await;
        let mut rows = Vec::new();
        rows.push(fx("solo", "p1", 5));
        for j in 0..4 {
            rows.push(Fixture {
                reviewer: "busy",
                asin: Box::leak(format!("p{j}").into_boxed_str()),
                ..Fixture::default()
            });
        }
        seed(&db, rows).await;

        let mut buckets = ReportRepository::reviewer_activity_buckets(&db).await.unwrap();
        buckets.sort_by(|a, b| a.activity_level.cmp(&b.activity_level));
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].activity_level, "1");
        assert_eq!(buckets[0].reviewer_count, 1);
        assert_eq!(buckets[1].activity_level, "2-5");
        assert_eq!(buckets[1].reviewer_count, 1);
    }

    #[tokio::test]
    async fn sentiment_sample_filters_short_and_null_text() {
        let (_dir, db) = open_temp().await;
        let long = Fixture { text: Some("long enough review text"), ..Fixture::default() };
        let short = Fixture { reviewer: "r2", text: Some("short"), ..Fixture::default() };
        let null = Fixture { reviewer: "r3", text: None, ..Fixture::default() };
        seed(&db, vec![long, short, null]).await;

        let sample = ReportRepository::sample_reviews_with_text(&db, 100).await.unwrap();
        assert_eq!(sample.len(), 1);
        assert_eq!(sample[0].review_text, "long enough review text");
    }
}
