//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{
    description::Description, price::Price, product_id::ProductId, product_name::ProductName,
    stock::Stock,
};
use crate::error::CatalogResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                name,
                description,
                price,
                stock,
                created_at,
                updated_at
            FROM products
            ORDER BY created_at, product_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn create(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                description,
                price,
                stock,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price.amount())
        .bind(product.stock.units())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                name,
                description,
                price,
                stock,
                created_at,
                updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                stock = $5,
                updated_at = $6
            WHERE product_id = $1
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price.amount())
        .bind(product.stock.units())
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count(&self) -> CatalogResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: ProductName::from_db(self.name),
            description: Description::from_db(self.description),
            price: Price::from_db(self.price),
            stock: Stock::from_db(self.stock),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
