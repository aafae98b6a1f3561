// src/db/orders_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{orders::OrderSummary, query::DateRange},
};

#[derive(Clone)]
pub struct OrdersRepository {
    pool: PgPool,
}

impl OrdersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_orders(&self, range: &DateRange) -> Result<Vec<OrderSummary>, AppError> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT
                o.id,
                o.order_number,
                COALESCE(c.name, '') AS customer_name,
                COALESCE(t.label, '') AS table_label,
                o.status,
                o.total::float8 AS total,
                o.notes,
                o.created_at
            FROM orders o
            LEFT JOIN customers c ON o.customer_id = c.id
            LEFT JOIN restaurant_tables t ON o.table_id = t.id
            WHERE o.created_at::date BETWEEN $1 AND $2
            ORDER BY o.created_at DESC
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }
}
