//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::ProductFields;
use crate::domain::entity::product::Product;
use crate::domain::value_object::price::Price;

/// Keeps an explicit `null` as `Some(Value::Null)`; absence stays `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Create and update request. Field types are checked during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub stock: Option<Value>,
}

impl From<ProductRequest> for ProductFields {
    fn from(req: ProductRequest) -> Self {
        ProductFields {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Decimal string, scale preserved
    pub price: Price,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.product_id.to_string(),
            name: product.name.to_string(),
            description: product.description.to_string(),
            price: product.price,
            stock: product.stock.units(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_present() {
        let req: ProductRequest =
            serde_json::from_value(json!({ "name": null, "stock": 5 })).unwrap();
        assert_eq!(req.name, Some(Value::Null));
        assert_eq!(req.stock, Some(json!(5)));
        assert_eq!(req.description, None);
        assert_eq!(req.price, None);
    }

    #[test]
    fn test_response_shape() {
        use crate::domain::value_object::{
            description::Description, product_name::ProductName, stock::Stock,
        };

        let product = Product::new(
            ProductName::new("Widget").unwrap(),
            Description::new("A widget").unwrap(),
            Price::parse("10.50").unwrap(),
            Stock::new(3).unwrap(),
        );
        let body = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(body["price"], json!("10.50"));
        assert_eq!(body["stock"], json!(3));
        assert!(body["id"].is_string());
    }
}
