use std::path::PathBuf;

/// Per-category sampling caps. The upstream archives are huge; we only keep
/// a demo-sized slice of each category.
pub const REVIEW_CAP: usize = 10_000;
pub const PRODUCT_CAP: usize = 5_000;

/// Runtime configuration, resolved once at startup from the environment
/// (`.env` supported) with defaults matching the expected working-directory
/// layout.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub db_url: String,
    pub sentiment_sample_size: u32,
    pub dashboard_path: PathBuf,
    pub sentiment_chart_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("AMAZON_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://amazon_reviews.db?mode=rwc".to_string());
        let sentiment_sample_size = std::env::var("SENTIMENT_SAMPLE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        Self {
            data_dir,
            db_url,
            sentiment_sample_size,
            dashboard_path: PathBuf::from("amazon_analysis_dashboard.png"),
            sentiment_chart_path: PathBuf::from("sentiment_vs_rating.png"),
        }
    }
}
