pub mod insights;

use crate::storage::repository::report_repo::TOP_LIMIT;
use crate::storage::repository::ReportRepository;
use anyhow::Result;
use chrono::DateTime;
use sea_orm::DatabaseConnection;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

fn epoch_date(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Print the full analysis report: overview, rating/product/reviewer/
/// category/helpfulness sections, then the derived insights. Every query
/// failure is fatal — there is no partial report.
pub async fn generate(db: &DatabaseConnection) -> Result<()> {
    heading("📊 AMAZON REVIEWS ANALYSIS REPORT");

    // Overview
    let overview = ReportRepository::overview(db).await?;
    println!("📊 Dataset Overview:");
    println!("   Total Reviews: {}", overview.total_reviews);
    println!("   Unique Products: {}", overview.unique_products);
    println!("   Unique Reviewers: {}", overview.unique_reviewers);
    println!("   Average Rating: {:.2}/5.0", overview.avg_rating);
    println!(
        "   Review Period: {} to {}",
        epoch_date(overview.first_review),
        epoch_date(overview.last_review)
    );

    // Ratings
    heading("⭐ RATING ANALYSIS");
    let rating_dist = ReportRepository::rating_distribution(db).await?;
    println!("Rating Distribution:");
    for row in &rating_dist {
        println!(
            "   {} ({}): {} reviews ({}%)",
            stars(row.rating),
            row.rating,
            row.count,
            row.percentage
        );
    }

    let monthly = ReportRepository::monthly_trend(db).await?;
    println!("\nMonthly Rating Trends ({} months):", monthly.len());
    if !monthly.is_empty() {
        let min = monthly.iter().map(|m| m.avg_rating).fold(f64::INFINITY, f64::min);
        let max = monthly.iter().map(|m| m.avg_rating).fold(f64::NEG_INFINITY, f64::max);
        println!("   Average rating range: {min:.2} - {max:.2}");
    }

    // Products
    heading("📦 PRODUCT ANALYSIS");
    let top_products = ReportRepository::top_products(db).await?;
    println!("Top {} Most Reviewed Products:", TOP_LIMIT);
    for (i, row) in top_products.iter().enumerate() {
        println!(
            "   {}. Product {}: {} reviews, {:.2} avg rating, {} unique reviewers",
            i + 1,
            row.asin,
            row.review_count,
            row.avg_rating,
            row.unique_reviewers
        );
    }

    let product_stats = ReportRepository::product_stats(db).await?;
    println!("\nProduct Review Statistics:");
    println!(
        "   Average reviews per product: {:.1}",
        product_stats.avg_reviews_per_product
    );
    println!(
        "   Maximum reviews for one product: {}",
        product_stats.max_reviews
    );

    // Reviewers
    heading("👥 REVIEWER ANALYSIS");
    let top_reviewers = ReportRepository::top_reviewers(db).await?;
    println!("Top {} Most Active Reviewers:", TOP_LIMIT);
    for (i, row) in top_reviewers.iter().enumerate() {
        let short_id: String = row.reviewer_id.chars().take(8).collect();
        println!(
            "   {}. Reviewer {}...: {} reviews, {:.2} avg, {:.0} days active",
            i + 1,
            short_id,
            row.review_count,
            row.avg_rating,
            insights::days_active(row.first_review, row.last_review)
        );
    }

    let reviewer_stats = ReportRepository::reviewer_stats(db).await?;
    println!("\nReviewer Engagement:");
    println!("   Average reviews per reviewer: {:.1}", reviewer_stats.avg_reviews);
    println!("   Most reviews by one reviewer: {}", reviewer_stats.max_reviews);

    // Categories
    heading("📚 CATEGORY ANALYSIS");
    let categories = ReportRepository::category_performance(db).await?;
    println!("Category Performance:");
    for row in &categories {
        println!(
            "   {:<12}: {:>6} reviews, {:.2} avg, {:.0} chars",
            row.category,
            row.review_count,
            row.avg_rating,
            row.avg_review_length.unwrap_or(0.0)
        );
    }

    // Helpfulness
    heading("👍 HELPFULNESS ANALYSIS");
    let split = ReportRepository::helpfulness_split(db).await?;
    println!("Helpful vs Not Helpful Reviews:");
    for row in &split {
        println!(
            "   {:<12}: {:>6} reviews, {:.2} avg rating, {:.0} chars",
            row.helpfulness,
            row.review_count,
            row.avg_rating,
            row.avg_length.unwrap_or(0.0)
        );
    }
    let by_rating = ReportRepository::helpful_votes_by_rating(db).await?;
    println!("\nHelpfulness by Rating:");
    for row in &by_rating {
        println!(
            "   {} stars: {:.2} helpful votes on average",
            row.rating, row.avg_helpful_votes
        );
    }

    // Insights
    heading("💡 KEY INSIGHTS");
    let five_star = insights::rating_percentage(&rating_dist, 5)?;
    let one_star = insights::rating_percentage(&rating_dist, 1)?;
    println!("• {five_star}% of reviews are 5-star ratings");
    println!("• Only {one_star}% of reviews are 1-star ratings");
    println!(
        "• Average of {:.1} reviews per product",
        product_stats.avg_reviews_per_product
    );
    let single_pct = insights::single_review_reviewer_pct(
        reviewer_stats.reviewer_count,
        top_reviewers.len(),
    );
    println!("• {single_pct:.1}% of reviewers wrote only one review");
    if let Some(busiest) = insights::busiest_category(&categories) {
        println!("• {} has the most reviews", busiest.category);
    }
    if let Some(best) = insights::highest_rated_category(&categories) {
        println!(
            "• {} has the highest average rating ({:.2})",
            best.category, best.avg_rating
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_date_renders_calendar_day() {
        assert_eq!(epoch_date(1_388_534_400), "2014-01-01");
    }

    #[test]
    fn star_glyphs_pad_to_five() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(1), "★☆☆☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
