use chrono::{DateTime, Utc};
use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines category data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Defines product data structure. The category reference is embedded by
/// value, exactly as the API returns it; it is never reconciled against the
/// category list.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
    #[serde(rename = "creationAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Defines user data structure. Only the count of users is surfaced in the
/// dashboard, but the records decode fully so schema violations are caught
/// at the gateway boundary.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Request body for creating a product. The server assigns the id.
///
#[derive(Clone, Debug, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub images: Vec<String>,
}

/// Partial request body for updating a product. Fields left as `None` are
/// omitted from the JSON body and keep their server-side value.
///
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_with_unknown_fields() {
        let payload = serde_json::json!({
            "id": 4,
            "title": "Handmade Fresh Table",
            "price": 687,
            "description": "Andy shoes are designed to keeping in mind durability",
            "images": ["https://placeimg.com/640/480/any"],
            "creationAt": "2023-01-03T01:12:40.000Z",
            "updatedAt": "2023-01-03T01:12:40.000Z",
            "category": {
                "id": 5,
                "name": "Others",
                "image": "https://placeimg.com/640/480/any",
            }
        });
        let product: Product = serde_json::from_value(payload).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.category.id, 5);
        assert_eq!(product.price, 687.0);
        assert!(product.created_at.is_some());
    }

    #[test]
    fn product_decodes_without_optional_fields() {
        let payload = serde_json::json!({
            "id": 1,
            "title": "Test Product",
            "price": 9.99,
            "category": { "id": 1, "name": "Test Category" }
        });
        let product: Product = serde_json::from_value(payload).unwrap();
        assert!(product.description.is_empty());
        assert!(product.images.is_empty());
    }

    #[test]
    fn patch_skips_unset_fields() {
        let patch = ProductPatch {
            title: Some("New Title".to_string()),
            ..ProductPatch::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "New Title" }));
    }

    #[test]
    fn draft_serializes_category_id_in_api_casing() {
        let draft = ProductDraft {
            title: "New Product".to_string(),
            price: 10.0,
            description: String::new(),
            category_id: 2,
            images: vec![],
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["categoryId"], 2);
        assert!(body.get("category_id").is_none());
    }
}
