// src/analytics/ratio.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::dashboard::CustomerSegments;

/// `part / whole * 100`, ou 0 quando `whole` não é positivo.
/// Não limita o resultado a 100.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

// Cada parte em relação à soma de todas (barra segmentada)
pub fn segment_percentages(parts: &[f64]) -> Vec<f64> {
    let whole: f64 = parts.iter().sum();
    parts.iter().map(|part| percentage(*part, whole)).collect()
}

// Crescimento entre períodos. Sem período anterior não há base de comparação.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSplit {
    pub total_customers: i64,
    pub new_percentage: f64,
    pub returning_percentage: f64,
}

pub fn customer_split(segments: &CustomerSegments) -> CustomerSplit {
    let total = segments.new_count + segments.returning_count;

    CustomerSplit {
        total_customers: total,
        new_percentage: percentage(segments.new_count as f64, total as f64),
        returning_percentage: percentage(segments.returning_count as f64, total as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(25.0, 200.0), 12.5);
        assert_eq!(percentage(3.0, 4.0), 3.0 / 4.0 * 100.0);
        assert_eq!(percentage(7.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_is_not_clamped() {
        assert_eq!(percentage(30.0, 20.0), 150.0);
    }

    #[test]
    fn test_segment_percentages() {
        assert_eq!(segment_percentages(&[1.0, 3.0]), vec![25.0, 75.0]);
        assert_eq!(segment_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(segment_percentages(&[]).is_empty());
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, 100.0), 50.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
        assert_eq!(percent_change(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_customer_split() {
        let split = customer_split(&CustomerSegments { new_count: 30, returning_count: 90 });
        assert_eq!(split.total_customers, 120);
        assert_eq!(split.new_percentage, 25.0);
        assert_eq!(split.returning_percentage, 75.0);

        let empty = customer_split(&CustomerSegments { new_count: 0, returning_count: 0 });
        assert_eq!(empty.new_percentage, 0.0);
        assert_eq!(empty.returning_percentage, 0.0);
    }
}
