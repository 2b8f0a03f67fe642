use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One customer review of one product. The (reviewerID, asin) pair is not
/// unique in the source data and is not deduplicated here; `id` is a
/// surrogate key. Column names mirror the upstream JSON field names so the
/// aggregate SQL reads the same as the source dataset's documentation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "reviewerID")]
    pub reviewer_id: String,
    pub asin: String,
    #[sea_orm(column_name = "reviewerName", nullable)]
    pub reviewer_name: Option<String>,
    pub helpful: i64,
    #[sea_orm(column_name = "reviewText", nullable)]
    pub review_text: Option<String>,
    /// Star rating 1-5; 0 means "rating absent in source" and is kept in
    /// downstream aggregates as-is.
    pub overall: i64,
    #[sea_orm(nullable)]
    pub summary: Option<String>,
    #[sea_orm(column_name = "unixReviewTime")]
    pub unix_review_time: i64,
    #[sea_orm(column_name = "reviewTime", nullable)]
    pub review_time: Option<String>,
    /// Partition label assigned at load time from the source filename.
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
