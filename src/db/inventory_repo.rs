// src/db/inventory_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::inventory::StockItem};

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Saldo atual de todos os insumos. O valor em estoque é saldo * custo unitário.
    pub async fn get_stock_items(&self) -> Result<Vec<StockItem>, AppError> {
        let items = sqlx::query_as::<_, StockItem>(
            r#"
            SELECT
                i.id,
                i.name,
                i.sku,
                i.category,
                s.name AS supplier,
                i.unit,
                i.current_stock::float8 AS current_stock,
                i.min_stock::float8 AS min_stock,
                (i.current_stock * i.unit_cost)::float8 AS value
            FROM inventory_items i
            LEFT JOIN suppliers s ON i.supplier_id = s.id
            ORDER BY i.name ASC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }
}
