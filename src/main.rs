mod config;
mod error;
mod ingest;
mod report;
mod sentiment;
mod storage;
mod viz;

use crate::config::Config;
use crate::error::EdaError;
use crate::storage::repository::LoadRepository;
use log::error;

/// One-shot analytical pipeline: download data if absent, load it into
/// SQLite, print the report, render the dashboard, then optionally score
/// sentiment. Single-operator tool; everything runs sequentially.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Error)
        .filter_module("sea_orm", log::LevelFilter::Error)
        .init();

    let cfg = Config::from_env();

    println!("🛍️ AMAZON PRODUCT REVIEWS ANALYSIS");
    println!("{}", "=".repeat(50));

    // The electronics review file doubles as the "has the download ever
    // succeeded" marker, as the smallest always-fetched category.
    let marker = cfg.data_dir.join("amazon_reviews_electronics.csv");
    if !marker.exists() {
        println!("📥 Downloading Amazon dataset...");
        ingest::run_download(&cfg).await?;

        if !marker.exists() {
            println!("❌ Download failed. Please check manual download instructions.");
            ingest::manual_download_instructions();
            return Ok(());
        }
    }

    println!("🗃️ Initializing database...");
    let db = storage::establish_connection(&cfg.db_url).await?;

    if let Err(e) = LoadRepository::initialize(&db, &cfg.data_dir).await {
        if let Some(EdaError::MissingInput(dir)) = e.downcast_ref::<EdaError>() {
            println!("❌ No review data found in {}!", dir.display());
            ingest::manual_download_instructions();
            return Ok(());
        }
        return Err(e);
    }
    LoadRepository::explore_data_quality(&db).await?;

    println!("\n📊 Running EDA analysis...");
    report::generate(&db).await?;
    viz::render_dashboard(&db, &cfg.dashboard_path).await?;

    // Independent of the rest of the pipeline; a failure here is reported
    // but never fails the run.
    if let Err(e) = sentiment::run(&db, &cfg).await {
        error!("sentiment analysis failed: {e:#}");
        println!("⚠ Sentiment analysis failed: {e}");
    }

    println!("\n✅ Analysis complete!");
    println!("📈 Check generated files:");
    println!("   - {}", cfg.dashboard_path.display());
    println!(
        "   - {} (if sentiment analysis ran)",
        cfg.sentiment_chart_path.display()
    );

    Ok(())
}
