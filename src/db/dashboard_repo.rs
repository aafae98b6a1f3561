// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{
        dashboard::{CustomerSegments, MetricPoint, RevenueSummary, TopSellingItem},
        query::DateRange,
    },
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Cards do topo (período atual + período anterior para o crescimento)
    pub async fn get_revenue_summary(&self, range: &DateRange) -> Result<RevenueSummary, AppError> {
        let previous = range.previous();

        let summary = sqlx::query_as::<_, RevenueSummary>(
            r#"
            SELECT
                COALESCE(SUM(total) FILTER (WHERE created_at::date BETWEEN $1 AND $2), 0)::float8 AS total_revenue,
                COUNT(*) FILTER (WHERE created_at::date BETWEEN $1 AND $2) AS total_orders,
                COALESCE(AVG(total) FILTER (WHERE created_at::date BETWEEN $1 AND $2), 0)::float8 AS average_order_value,
                COALESCE(SUM(total) FILTER (WHERE created_at::date BETWEEN $3 AND $4), 0)::float8 AS previous_revenue
            FROM orders
            WHERE status = 'completed'
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .bind(previous.from)
            .bind(previous.to)
            .fetch_one(&self.pool)
            .await?;

        Ok(summary)
    }

    // 2. Gráfico de barras: um bucket por dia, inclusive dias sem venda
    pub async fn get_revenue_trend(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        let points = sqlx::query_as::<_, MetricPoint>(
            r#"
            SELECT
                to_char(d::date, 'YYYY-MM-DD') AS label,
                COALESCE(SUM(o.total), 0)::float8 AS value
            FROM generate_series($1::date, $2::date, INTERVAL '1 day') AS d
            LEFT JOIN orders o
                   ON o.created_at::date = d::date
                  AND o.status = 'completed'
            GROUP BY d
            ORDER BY d ASC
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(points)
    }

    // 3. Pizza por forma de pagamento
    pub async fn get_payment_methods(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        let points = sqlx::query_as::<_, MetricPoint>(
            r#"
            SELECT payment_method AS label, SUM(total)::float8 AS value
            FROM orders
            WHERE status = 'completed'
              AND created_at::date BETWEEN $1 AND $2
            GROUP BY payment_method
            ORDER BY value DESC
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(points)
    }

    // 4. Novos = primeiro pedido dentro do período; recorrentes = já compraram antes
    pub async fn get_customer_segments(&self, range: &DateRange) -> Result<CustomerSegments, AppError> {
        let segments = sqlx::query_as::<_, CustomerSegments>(
            r#"
            WITH period AS (
                SELECT DISTINCT customer_id
                FROM orders
                WHERE customer_id IS NOT NULL
                  AND status <> 'cancelled'
                  AND created_at::date BETWEEN $1 AND $2
            ),
            first_orders AS (
                SELECT customer_id, MIN(created_at)::date AS first_order
                FROM orders
                WHERE customer_id IS NOT NULL
                  AND status <> 'cancelled'
                GROUP BY customer_id
            )
            SELECT
                COUNT(*) FILTER (WHERE f.first_order >= $1) AS new_count,
                COUNT(*) FILTER (WHERE f.first_order < $1) AS returning_count
            FROM period p
            JOIN first_orders f USING (customer_id)
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .fetch_one(&self.pool)
            .await?;

        Ok(segments)
    }

    // 5. Ranking do cardápio por receita
    pub async fn get_top_items(&self, range: &DateRange, limit: u32) -> Result<Vec<TopSellingItem>, AppError> {
        let items = sqlx::query_as::<_, TopSellingItem>(
            r#"
            SELECT
                m.name,
                m.category,
                SUM(oi.quantity)::float8 AS quantity,
                SUM(oi.quantity * oi.unit_price)::float8 AS revenue
            FROM order_items oi
            JOIN orders o ON oi.order_id = o.id
            JOIN menu_items m ON oi.menu_item_id = m.id
            WHERE o.status = 'completed'
              AND o.created_at::date BETWEEN $1 AND $2
            GROUP BY m.id, m.name, m.category
            ORDER BY revenue DESC
            LIMIT $3
            "#,
        )
            .bind(range.from)
            .bind(range.to)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }
}
