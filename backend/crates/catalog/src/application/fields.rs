//! Product field input
//!
//! `None` means the field was absent from the request; `Some(Value::Null)`
//! means it was sent as an explicit `null` and is validated like any other
//! value (and rejected as missing).

use kernel::error::validation::ValidationErrors;
use serde_json::Value;

use crate::domain::entity::product::ProductChanges;
use crate::domain::value_object::{
    description::Description, price::Price, product_name::ProductName, stock::Stock,
};

#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

/// A complete, valid set of product fields
#[derive(Debug, Clone)]
pub struct ValidProduct {
    pub name: ProductName,
    pub description: Description,
    pub price: Price,
    pub stock: Stock,
}

impl ProductFields {
    /// Every field is required
    pub fn validate_all(self) -> Result<ValidProduct, ValidationErrors> {
        let absent = Value::Null;
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", ProductName::from_json(self.name.as_ref().unwrap_or(&absent)));
        let description = errors.check(
            "description",
            Description::from_json(self.description.as_ref().unwrap_or(&absent)),
        );
        let price = errors.check("price", Price::from_json(self.price.as_ref().unwrap_or(&absent)));
        let stock = errors.check("stock", Stock::from_json(self.stock.as_ref().unwrap_or(&absent)));

        match (name, description, price, stock) {
            (Some(name), Some(description), Some(price), Some(stock)) => Ok(ValidProduct {
                name,
                description,
                price,
                stock,
            }),
            _ => Err(errors),
        }
    }

    /// Only present fields are validated; all must pass or nothing applies
    pub fn validate_changes(self) -> Result<ProductChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self
            .name
            .and_then(|v| errors.check("name", ProductName::from_json(&v)));
        let description = self
            .description
            .and_then(|v| errors.check("description", Description::from_json(&v)));
        let price = self
            .price
            .and_then(|v| errors.check("price", Price::from_json(&v)));
        let stock = self
            .stock
            .and_then(|v| errors.check("stock", Stock::from_json(&v)));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductChanges {
            name,
            description,
            price,
            stock,
        })
    }
}
