use crate::ingest::record::{RawProduct, RawReview};
use anyhow::Result;
use flate2::read::GzDecoder;
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Decompress a line-delimited JSON stream and project each parseable line.
///
/// Blank lines and lines that fail to parse are skipped silently; the cap
/// counts accepted records, so a noisy stream still yields up to `cap`
/// rows. Remaining input past the cap is not read.
fn collect_capped<T, R, F>(reader: R, cap: usize, project: F) -> Result<Vec<T>>
where
    R: Read,
    F: Fn(&Value) -> T,
{
    let mut out = Vec::new();
    for line in BufReader::new(GzDecoder::new(reader)).lines() {
        if out.len() >= cap {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(&line) {
            Ok(v) => out.push(project(&v)),
            Err(_) => continue,
        }
    }
    Ok(out)
}

fn write_csv<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    for row in rows {
        w.serialize(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Extract up to `cap` reviews from `gz_path` into
/// `amazon_reviews_<category>.csv` next to it. No file is written when
/// zero records were accepted.
pub fn extract_reviews(gz_path: &Path, data_dir: &Path, category: &str, cap: usize) -> Result<usize> {
    let reviews = collect_capped(File::open(gz_path)?, cap, RawReview::from_json)?;
    if reviews.is_empty() {
        debug!("no reviews accepted for {category}, skipping csv");
        return Ok(0);
    }
    write_csv(&data_dir.join(format!("amazon_reviews_{category}.csv")), &reviews)?;
    println!("   Saved {} {} reviews", reviews.len(), category);
    Ok(reviews.len())
}

/// Extract up to `cap` product-metadata records from `gz_path` into
/// `amazon_products_<category>.csv`.
pub fn extract_products(gz_path: &Path, data_dir: &Path, category: &str, cap: usize) -> Result<usize> {
    let products = collect_capped(File::open(gz_path)?, cap, RawProduct::from_json)?;
    if products.is_empty() {
        debug!("no products accepted for {category}, skipping csv");
        return Ok(0);
    }
    write_csv(&data_dir.join(format!("amazon_products_{category}.csv")), &products)?;
    println!("   Saved {} {} products", products.len(), category);
    Ok(products.len())
}
