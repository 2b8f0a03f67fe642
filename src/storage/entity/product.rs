use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One catalog item. `asin` is unique within a category file but not
/// deduplicated across categories.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asin: String,
    #[sea_orm(nullable)]
    pub title: Option<String>,
    pub price: f64,
    #[sea_orm(nullable)]
    pub brand: Option<String>,
    // structured in the source, kept as opaque serialized text
    #[sea_orm(nullable)]
    pub categories: Option<String>,
    #[sea_orm(nullable)]
    pub description: Option<String>,
    #[sea_orm(nullable)]
    pub also_bought: Option<String>,
    #[sea_orm(column_name = "salesRank", nullable)]
    pub sales_rank: Option<String>,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
