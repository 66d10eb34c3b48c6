//! Product Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    description::Description, price::Price, product_id::ProductId, product_name::ProductName,
    stock::Stock,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: ProductName,
    pub description: Description,
    pub price: Price,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field changes for a partial update. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<ProductName>,
    pub description: Option<Description>,
    pub price: Option<Price>,
    pub stock: Option<Stock>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }
}

impl Product {
    pub fn new(name: ProductName, description: Description, price: Price, stock: Stock) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            name,
            description,
            price,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Touches `updated_at` only if something changed.
    pub fn apply(&mut self, changes: ProductChanges) {
        if changes.is_empty() {
            return;
        }

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(
            ProductName::new("Widget").unwrap(),
            Description::new("A widget").unwrap(),
            Price::parse("9.99").unwrap(),
            Stock::new(10).unwrap(),
        )
    }

    #[test]
    fn test_apply_stock_only() {
        let mut product = widget();
        let before = product.clone();

        product.apply(ProductChanges {
            stock: Some(Stock::new(3).unwrap()),
            ..Default::default()
        });

        assert_eq!(product.stock.units(), 3);
        assert_eq!(product.name, before.name);
        assert_eq!(product.description, before.description);
        assert_eq!(product.price, before.price);
        assert_eq!(product.created_at, before.created_at);
    }

    #[test]
    fn test_apply_nothing() {
        let mut product = widget();
        let before = product.clone();
        product.apply(ProductChanges::default());
        assert_eq!(product, before);
    }
}
