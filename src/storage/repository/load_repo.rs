use crate::error::EdaError;
use crate::ingest::record::{RawProduct, RawReview};
use crate::storage::connection::create_tables;
use crate::storage::entity::{product, review, Product, Review};
use anyhow::{Context, Result};
use log::{info, warn};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, NotSet,
    Set, Statement,
};
use std::path::{Path, PathBuf};

const INSERT_CHUNK: usize = 500;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_reviews_asin ON reviews(asin);",
    "CREATE INDEX IF NOT EXISTS idx_reviews_overall ON reviews(overall);",
    "CREATE INDEX IF NOT EXISTS idx_reviews_category ON reviews(category);",
    "CREATE INDEX IF NOT EXISTS idx_products_asin ON products(asin);",
];

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct SampleRow {
    asin: String,
    overall: i64,
    category: String,
    review_text: Option<String>,
}

#[derive(Debug, FromQueryResult)]
pub struct ReviewQualityRow {
    pub total_reviews: i64,
    pub unique_products: i64,
    pub unique_reviewers: i64,
    pub avg_rating: f64,
    pub min_rating: i64,
    pub max_rating: i64,
}

#[derive(Debug, FromQueryResult)]
pub struct RatingShareRow {
    pub rating: i64,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, FromQueryResult)]
pub struct CategoryDistRow {
    pub category: String,
    pub review_count: i64,
    pub product_count: i64,
    pub avg_rating: f64,
}

pub struct LoadRepository;

impl LoadRepository {
    /// Load every discovered per-category CSV into the store, replacing
    /// both tables wholesale. Re-running with unchanged inputs yields
    /// identical tables (the only write is a full replace).
    ///
    /// Aborts with [`EdaError::MissingInput`] when no review files exist;
    /// reporting depends on the reviews table. Missing product files are
    /// fine — the products table is simply left empty.
    pub async fn initialize(db: &DatabaseConnection, data_dir: &Path) -> Result<()> {
        let review_files = discover(data_dir, "amazon_reviews_")?;
        let product_files = discover(data_dir, "amazon_products_")?;

        if review_files.is_empty() {
            return Err(EdaError::MissingInput(data_dir.to_path_buf()).into());
        }

        println!("📊 Initializing Amazon Database...");

        replace_tables(db).await?;

        let mut reviews = Vec::new();
        for (category, path) in &review_files {
            println!("Loading {category} reviews...");
            reviews.extend(read_reviews(path, category)?);
        }
        let total_reviews = reviews.len();
        for chunk in reviews.chunks(INSERT_CHUNK) {
            Review::insert_many(chunk.to_vec()).exec(db).await?;
        }
        println!("✅ Loaded {total_reviews} total reviews");

        if !product_files.is_empty() {
            let mut products = Vec::new();
            for (category, path) in &product_files {
                println!("Loading {category} products...");
                products.extend(read_products(path, category)?);
            }
            let total_products = products.len();
            for chunk in products.chunks(INSERT_CHUNK) {
                Product::insert_many(chunk.to_vec()).exec(db).await?;
            }
            println!("✅ Loaded {total_products} products");
        }

        create_indexes(db).await;

        print_table_counts(db).await;
        print_sample_rows(db).await?;

        Ok(())
    }

    /// Basic post-load quality report: overall review statistics plus the
    /// rating and category distributions, ascending by rating.
    pub async fn explore_data_quality(db: &DatabaseConnection) -> Result<()> {
        println!("\n📈 Data Quality Report:");
        println!("{}", "=".repeat(50));

        let stats = ReviewQualityRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT \
                 COUNT(*) as total_reviews, \
                 COUNT(DISTINCT asin) as unique_products, \
                 COUNT(DISTINCT reviewerID) as unique_reviewers, \
                 AVG(overall) as avg_rating, \
                 MIN(overall) as min_rating, \
                 MAX(overall) as max_rating \
             FROM reviews",
        ))
        .one(db)
        .await?
        .ok_or(EdaError::EmptyOverview)?;

        println!("Review Statistics:");
        println!("   total_reviews: {}", stats.total_reviews);
        println!("   unique_products: {}", stats.unique_products);
        println!("   unique_reviewers: {}", stats.unique_reviewers);
        println!("   avg_rating: {:.2}", stats.avg_rating);
        println!("   min_rating: {}", stats.min_rating);
        println!("   max_rating: {}", stats.max_rating);

        let dist = RatingShareRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT \
                 overall as rating, \
                 COUNT(*) as count, \
                 ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM reviews), 2) as percentage \
             FROM reviews \
             GROUP BY overall \
             ORDER BY overall",
        ))
        .all(db)
        .await?;

        println!("\nRating Distribution:");
        for row in &dist {
            println!("   {}: {} ({}%)", row.rating, row.count, row.percentage);
        }

        let categories = CategoryDistRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT \
                 category, \
                 COUNT(*) as review_count, \
                 COUNT(DISTINCT asin) as product_count, \
                 AVG(overall) as avg_rating \
             FROM reviews \
             GROUP BY category \
             ORDER BY review_count DESC",
        ))
        .all(db)
        .await?;

        println!("\nCategory Distribution:");
        for row in &categories {
            println!(
                "   {}: {} reviews, {} products, {:.2} avg rating",
                row.category, row.review_count, row.product_count, row.avg_rating
            );
        }

        Ok(())
    }
}

/// Find `<prefix><category>.csv` files, returning (category, path) pairs
/// sorted by filename for deterministic load order.
fn discover(dir: &Path, prefix: &str) -> Result<Vec<(String, PathBuf)>> {
    let mut out = Vec::new();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        // a missing data dir is the same as an empty one
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(out),
        Err(e) => return Err(e).with_context(|| format!("read {}", dir.display())),
    };
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(stem) = name.strip_prefix(prefix).and_then(|s| s.strip_suffix(".csv")) {
            out.push((stem.to_string(), entry.path()));
        }
    }
    out.sort();
    Ok(out)
}

fn read_reviews(path: &Path, category: &str) -> Result<Vec<review::ActiveModel>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut models = Vec::new();
    for row in rdr.deserialize::<RawReview>() {
        let r = row.with_context(|| format!("parse {}", path.display()))?;
        models.push(review::ActiveModel {
            id: NotSet,
            reviewer_id: Set(r.reviewer_id),
            asin: Set(r.asin),
            reviewer_name: Set(opt(r.reviewer_name)),
            helpful: Set(r.helpful),
            review_text: Set(opt(r.review_text)),
            overall: Set(r.overall),
            summary: Set(opt(r.summary)),
            unix_review_time: Set(r.unix_review_time),
            review_time: Set(opt(r.review_time)),
            category: Set(category.to_string()),
        });
    }
    Ok(models)
}

fn read_products(path: &Path, category: &str) -> Result<Vec<product::ActiveModel>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut models = Vec::new();
    for row in rdr.deserialize::<RawProduct>() {
        let p = row.with_context(|| format!("parse {}", path.display()))?;
        models.push(product::ActiveModel {
            id: NotSet,
            asin: Set(p.asin),
            title: Set(opt(p.title)),
            price: Set(p.price),
            brand: Set(opt(p.brand)),
            categories: Set(opt(p.categories)),
            description: Set(opt(p.description)),
            also_bought: Set(opt(p.also_bought)),
            sales_rank: Set(opt(p.sales_rank)),
            category: Set(category.to_string()),
        });
    }
    Ok(models)
}

/// Empty CSV cells become NULL so length/text aggregates exclude them,
/// matching the source semantics where absent text is null, not "".
fn opt(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

async fn replace_tables(db: &DatabaseConnection) -> Result<()> {
    for table in ["reviews", "products"] {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("DROP TABLE IF EXISTS {table};"),
        ))
        .await?;
    }
    create_tables(db).await?;
    Ok(())
}

/// Secondary indexes are an optimization, not a correctness requirement;
/// a failed statement is logged and skipped.
async fn create_indexes(db: &DatabaseConnection) {
    for sql in INDEXES {
        if let Err(e) = db
            .execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                sql.to_string(),
            ))
            .await
        {
            warn!("index creation failed ({sql}): {e}");
            println!("Index error: {e}");
        }
    }
    info!("secondary indexes ensured");
}

async fn print_table_counts(db: &DatabaseConnection) {
    println!("\n📋 Database Summary:");
    for table in ["reviews", "products"] {
        let stmt = Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("SELECT COUNT(*) as count FROM {table}"),
        );
        match CountRow::find_by_statement(stmt).one(db).await {
            Ok(Some(row)) => println!("   {table}: {} records", row.count),
            _ => println!("   {table}: not found"),
        }
    }
}

async fn print_sample_rows(db: &DatabaseConnection) -> Result<()> {
    let rows = SampleRow::find_by_statement(Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT asin, overall, category, reviewText as review_text FROM reviews LIMIT 3",
    ))
    .all(db)
    .await?;

    println!("\n🔍 Sample Review Data:");
    for row in rows {
        let text = row.review_text.as_deref().unwrap_or("");
        let preview: String = text.chars().take(60).collect();
        println!("   {} | {}★ | {} | {}", row.asin, row.overall, row.category, preview);
    }
    Ok(())
}
