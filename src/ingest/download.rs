use crate::config::{Config, PRODUCT_CAP, REVIEW_CAP};
use crate::ingest::extract::{extract_products, extract_reviews};
use anyhow::{Context, Result};
use futures::StreamExt;
use log::{error, info};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

const SNAP_BASE: &str = "http://snap.stanford.edu/data/amazon/productGraph/categoryFiles";

/// Per-category review archives (5-core subsets, demo-sized after capping).
pub const REVIEW_SOURCES: &[(&str, &str)] = &[
    ("electronics", "reviews_Electronics_5.json.gz"),
    ("books", "reviews_Books_5.json.gz"),
    ("movies_tv", "reviews_Movies_and_TV_5.json.gz"),
];

/// Product metadata archives; a smaller set than the review sources.
pub const META_SOURCES: &[(&str, &str)] = &[
    ("electronics", "meta_Electronics.json.gz"),
    ("books", "meta_Books.json.gz"),
];

/// Stream one archive to disk. Blocks until complete or failed; there is
/// no retry and no timeout (single-operator tool).
async fn fetch_archive(client: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    let resp = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("GET {url}"))?;

    let mut file = tokio::fs::File::create(dest)
        .await
        .with_context(|| format!("create {}", dest.display()))?;
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(())
}

async fn fetch_and_extract(
    client: &reqwest::Client,
    category: &str,
    file: &str,
    data_dir: &Path,
    reviews: bool,
) -> Result<()> {
    let url = format!("{SNAP_BASE}/{file}");
    let gz_path: PathBuf = if reviews {
        data_dir.join(format!("reviews_{category}.json.gz"))
    } else {
        data_dir.join(format!("meta_{category}.json.gz"))
    };

    fetch_archive(client, &url, &gz_path).await?;

    if reviews {
        extract_reviews(&gz_path, data_dir, category, REVIEW_CAP)?;
    } else {
        extract_products(&gz_path, data_dir, category, PRODUCT_CAP)?;
    }
    Ok(())
}

/// Download and extract all review and metadata archives.
///
/// One category failing is caught and reported; the loop continues.
/// Partial success is the expected steady state since the upstream
/// archive is large and categories are independent.
pub async fn run_download(cfg: &Config) -> Result<()> {
    std::fs::create_dir_all(&cfg.data_dir)
        .with_context(|| format!("create {}", cfg.data_dir.display()))?;

    let client = reqwest::Client::new();

    println!("📥 Downloading Amazon Review Datasets...");
    for (category, file) in REVIEW_SOURCES {
        println!("Downloading {category} reviews...");
        match fetch_and_extract(&client, category, file, &cfg.data_dir, true).await {
            Ok(()) => println!("✅ {category} data processed"),
            Err(e) => {
                error!("review download failed for {category}: {e:#}");
                println!("❌ Error downloading {category}: {e}");
            }
        }
    }

    println!("\n📋 Downloading product metadata...");
    for (category, file) in META_SOURCES {
        println!("Downloading {category} metadata...");
        match fetch_and_extract(&client, category, file, &cfg.data_dir, false).await {
            Ok(()) => info!("metadata processed for {category}"),
            Err(e) => {
                error!("metadata download failed for {category}: {e:#}");
                println!("❌ Error downloading {category} metadata: {e}");
            }
        }
    }

    Ok(())
}

/// Printed when the automated download produced nothing usable.
pub fn manual_download_instructions() {
    println!("\n{}", "=".repeat(60));
    println!("📚 FULL DATASET DOWNLOAD INSTRUCTIONS");
    println!("{}", "=".repeat(60));
    println!("For the complete Amazon dataset (recommended):");
    println!("1. Visit: https://nijianmo.github.io/amazon/index.html");
    println!("2. Download files for your desired categories:");
    println!("   - reviews_*.json.gz (review data)");
    println!("   - meta_*.json.gz (product metadata)");
    println!("3. Place files in the 'data' folder and re-run");
}
