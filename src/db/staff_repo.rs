// src/db/staff_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{query::DateRange, staff::StaffRecord},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Funcionários ativos sem venda no período aparecem com zero
    pub async fn get_performance(&self, range: &DateRange) -> Result<Vec<StaffRecord>, AppError> {
        let records = sqlx::query_as::<_, StaffRecord>(
            r#"
            SELECT
                st.id,
                st.name,
                st.email,
                st.role,
                COUNT(o.id) AS total_orders,
                COALESCE(SUM(o.total), 0)::float8 AS total_revenue,
                COALESCE(AVG(o.total), 0)::float8 AS average_order_value
            FROM staff st
            LEFT JOIN orders o
                   ON o.staff_id = st.id
                  AND o.status = 'completed'
                  AND o.created_at::date BETWEEN $1 AND $2
            WHERE st.is_active = true
            GROUP BY st.id, st.name, st.email, st.role
            ORDER BY total_revenue DESC
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}
