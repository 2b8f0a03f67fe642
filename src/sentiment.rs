use crate::config::Config;
use anyhow::Result;
use sea_orm::DatabaseConnection;

/// Bucket a polarity score into the three display labels.
pub fn polarity_label(polarity: f64) -> &'static str {
    if polarity > 0.1 {
        "Positive"
    } else if polarity < -0.1 {
        "Negative"
    } else {
        "Neutral"
    }
}

/// Pearson correlation coefficient; NaN-free, 0.0 for degenerate input.
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Score a random sample of review texts, correlate polarity against the
/// star rating, and render the box plot. Never blocks the rest of the
/// pipeline; built without the `sentiment` feature this prints a hint and
/// returns.
#[cfg(feature = "sentiment")]
pub async fn run(db: &DatabaseConnection, cfg: &Config) -> Result<()> {
    use crate::storage::repository::ReportRepository;
    use crate::viz::draw_sentiment_boxplot;
    use std::collections::BTreeMap;

    println!("\n🧠 Performing Sentiment Analysis...");

    let sample =
        ReportRepository::sample_reviews_with_text(db, cfg.sentiment_sample_size).await?;
    println!("Analyzing sentiment for {} reviews...", sample.len());
    if sample.is_empty() {
        println!("⚠ No reviews with usable text; skipping sentiment analysis.");
        return Ok(());
    }

    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    let mut ratings = Vec::with_capacity(sample.len());
    let mut polarities = Vec::with_capacity(sample.len());
    let mut label_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut by_rating: BTreeMap<i64, Vec<f64>> = BTreeMap::new();

    for row in &sample {
        let scores = analyzer.polarity_scores(&row.review_text);
        let polarity = scores.get("compound").copied().unwrap_or(0.0);
        *label_counts.entry(polarity_label(polarity)).or_default() += 1;
        by_rating.entry(row.overall).or_default().push(polarity);
        ratings.push(row.overall as f64);
        polarities.push(polarity);
    }

    println!("\nSentiment Labels:");
    for (label, count) in &label_counts {
        println!("   {label:<8}: {count} reviews");
    }

    let corr = correlation(&ratings, &polarities);
    println!("\n⭐ Sentiment vs Star Ratings:");
    println!("Correlation between rating and sentiment: {corr:.3}");

    let grouped: Vec<(i64, Vec<f64>)> = by_rating.into_iter().collect();
    draw_sentiment_boxplot(&grouped, &cfg.sentiment_chart_path)?;
    println!(
        "📈 Sentiment chart saved to {}",
        cfg.sentiment_chart_path.display()
    );

    Ok(())
}

#[cfg(not(feature = "sentiment"))]
pub async fn run(_db: &DatabaseConnection, _cfg: &Config) -> Result<()> {
    println!("\n❌ Sentiment scoring not available. Skipping sentiment analysis.");
    println!("💡 Rebuild with the `sentiment` feature enabled.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds() {
        assert_eq!(polarity_label(0.05), "Neutral");
        assert_eq!(polarity_label(0.15), "Positive");
        assert_eq!(polarity_label(-0.2), "Negative");
        // boundary values are neutral, the comparisons are strict
        assert_eq!(polarity_label(0.1), "Neutral");
        assert_eq!(polarity_label(-0.1), "Neutral");
    }

    #[test]
    fn correlation_of_linear_data_is_one() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        assert!((correlation(&xs, &ys) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_of_inverse_data_is_negative_one() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        assert!((correlation(&xs, &ys) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_input_yields_zero() {
        assert_eq!(correlation(&[1.0], &[2.0]), 0.0);
        assert_eq!(correlation(&[1.0, 1.0], &[2.0, 3.0]), 0.0);
        assert_eq!(correlation(&[1.0, 2.0], &[5.0]), 0.0);
    }

    #[cfg(feature = "sentiment")]
    #[test]
    fn vader_scores_obvious_texts() {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let good = analyzer.polarity_scores("This product is absolutely wonderful, I love it!");
        let bad = analyzer.polarity_scores("Terrible. Broke immediately, complete waste of money.");
        assert!(good["compound"] > 0.1);
        assert!(bad["compound"] < -0.1);
    }
}
