use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One review line projected to the fixed column set.
///
/// Every default is explicit so the CSV schema never depends on which
/// fields a given source line happened to carry:
/// - string fields default to `""`
/// - `helpful` is the first element of the source `[votes, total]` pair,
///   defaulting to 0
/// - `overall` defaults to 0, a sentinel meaning "rating absent in
///   source"; downstream aggregates deliberately do not filter it out
/// - `unixReviewTime` defaults to 0 and is not reconciled against the
///   human-readable `reviewTime` string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    #[serde(rename = "reviewerID")]
    pub reviewer_id: String,
    pub asin: String,
    #[serde(rename = "reviewerName")]
    pub reviewer_name: String,
    pub helpful: i64,
    #[serde(rename = "reviewText")]
    pub review_text: String,
    pub overall: i64,
    pub summary: String,
    #[serde(rename = "unixReviewTime")]
    pub unix_review_time: i64,
    #[serde(rename = "reviewTime")]
    pub review_time: String,
}

impl RawReview {
    pub fn from_json(v: &Value) -> Self {
        Self {
            reviewer_id: str_field(v, "reviewerID"),
            asin: str_field(v, "asin"),
            reviewer_name: str_field(v, "reviewerName"),
            helpful: v
                .get("helpful")
                .and_then(|h| h.get(0))
                .and_then(Value::as_i64)
                .unwrap_or(0),
            review_text: str_field(v, "reviewText"),
            // source carries ratings as floats (5.0)
            overall: v.get("overall").and_then(Value::as_f64).unwrap_or(0.0) as i64,
            summary: str_field(v, "summary"),
            unix_review_time: v
                .get("unixReviewTime")
                .and_then(Value::as_i64)
                .unwrap_or(0),
            review_time: str_field(v, "reviewTime"),
        }
    }
}

/// One product-metadata line projected to the fixed column set.
///
/// `categories`, `also_bought` and `salesRank` are structured in the
/// source but kept as opaque serialized text here; nothing downstream
/// queries into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub asin: String,
    pub title: String,
    pub price: f64,
    pub brand: String,
    pub categories: String,
    pub description: String,
    pub also_bought: String,
    #[serde(rename = "salesRank")]
    pub sales_rank: String,
}

impl RawProduct {
    pub fn from_json(v: &Value) -> Self {
        Self {
            asin: str_field(v, "asin"),
            title: str_field(v, "title"),
            price: v.get("price").and_then(Value::as_f64).unwrap_or(0.0),
            brand: str_field(v, "brand"),
            categories: raw_field(v, "categories", "[]"),
            description: str_field(v, "description"),
            also_bought: raw_field(v, "also_bought", "[]"),
            sales_rank: raw_field(v, "salesRank", "{}"),
        }
    }
}

fn str_field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn raw_field(v: &Value, key: &str, default: &str) -> String {
    match v.get(key) {
        Some(val) => val.to_string(),
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn review_defaults_fill_missing_fields() {
        let r = RawReview::from_json(&json!({}));
        assert_eq!(r.reviewer_id, "");
        assert_eq!(r.asin, "");
        assert_eq!(r.helpful, 0);
        assert_eq!(r.overall, 0);
        assert_eq!(r.unix_review_time, 0);
        assert_eq!(r.review_text, "");
    }

    #[test]
    fn review_projects_full_record() {
        let r = RawReview::from_json(&json!({
            "reviewerID": "A1",
            "asin": "B001",
            "reviewerName": "alice",
            "helpful": [3, 5],
            "reviewText": "great",
            "overall": 5.0,
            "summary": "five stars",
            "unixReviewTime": 1388534400,
            "reviewTime": "01 1, 2014"
        }));
        assert_eq!(r.reviewer_id, "A1");
        assert_eq!(r.helpful, 3);
        assert_eq!(r.overall, 5);
        assert_eq!(r.unix_review_time, 1388534400);
    }

    #[test]
    fn float_rating_truncates_to_integer() {
        let r = RawReview::from_json(&json!({ "overall": 4.0 }));
        assert_eq!(r.overall, 4);
    }

    #[test]
    fn product_serializes_structured_fields_as_text() {
        let p = RawProduct::from_json(&json!({
            "asin": "B001",
            "price": 12.99,
            "categories": [["Electronics", "Audio"]],
            "salesRank": {"Electronics": 42}
        }));
        assert_eq!(p.price, 12.99);
        assert!(p.categories.contains("Electronics"));
        assert!(p.sales_rank.contains("42"));
        assert_eq!(p.also_bought, "[]");
        assert_eq!(p.description, "");
    }

    #[test]
    fn product_defaults() {
        let p = RawProduct::from_json(&json!({}));
        assert_eq!(p.price, 0.0);
        assert_eq!(p.categories, "[]");
        assert_eq!(p.sales_rank, "{}");
    }
}
