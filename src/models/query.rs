// src/models/query.rs

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::analytics::listing::StaffSortField;

// Janela padrão dos dashboards: últimos 30 dias
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Intervalo já resolvido (inclusive nas duas pontas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// `days` dias terminando em `today` (inclusive). Satura em `NaiveDate::MIN`.
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self::checked_last_days(today, days).unwrap_or(Self { from: NaiveDate::MIN, to: today })
    }

    pub fn checked_last_days(today: NaiveDate, days: i64) -> Option<Self> {
        let from = today.checked_sub_signed(Duration::days(days.max(1) - 1))?;
        Some(Self { from, to: today })
    }

    // Mesmo tamanho, imediatamente antes (base do crescimento de receita)
    pub fn previous(&self) -> Self {
        self.checked_previous()
            .unwrap_or(Self { from: NaiveDate::MIN, to: NaiveDate::MIN })
    }

    pub fn checked_previous(&self) -> Option<Self> {
        let length = self.to - self.from;
        let to = self.from.checked_sub_signed(Duration::days(1))?;
        let from = to.checked_sub_signed(length)?;
        Some(Self { from, to })
    }
}

fn validate_range_order(query: &RangeQuery) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            let mut err = ValidationError::new("range");
            err.message = Some("A data inicial não pode ser maior que a data final.".into());
            return Err(err);
        }
    }

    // A janela e o período anterior precisam caber no calendário
    if query.checked_resolve_at(Utc::now().date_naive()).is_none() {
        let mut err = ValidationError::new("range");
        err.message = Some("Data fora do intervalo suportado.".into());
        return Err(err);
    }
    Ok(())
}

// ?from=2026-10-01&to=2026-10-19
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[validate(schema(function = "validate_range_order", skip_on_field_errors = false))]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    pub fn resolve(&self) -> DateRange {
        self.resolve_at(Utc::now().date_naive())
    }

    pub fn resolve_at(&self, today: NaiveDate) -> DateRange {
        match (self.from, self.to) {
            (Some(from), Some(to)) => DateRange { from, to },
            (Some(from), None) => DateRange { from, to: today.max(from) },
            (None, Some(to)) => DateRange::last_days(to, DEFAULT_WINDOW_DAYS),
            (None, None) => DateRange::last_days(today, DEFAULT_WINDOW_DAYS),
        }
    }

    // None quando a janela ou o período anterior sairiam do calendário
    pub fn checked_resolve_at(&self, today: NaiveDate) -> Option<DateRange> {
        let range = match (self.from, self.to) {
            (None, Some(to)) => DateRange::checked_last_days(to, DEFAULT_WINDOW_DAYS)?,
            (None, None) => DateRange::checked_last_days(today, DEFAULT_WINDOW_DAYS)?,
            _ => self.resolve_at(today),
        };
        range.checked_previous().map(|_| range)
    }
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    #[validate(length(max = 100, message = "Termo de busca muito longo."))]
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StaffQuery {
    #[validate(length(max = 100, message = "Termo de busca muito longo."))]
    pub search: Option<String>,
    pub role: Option<String>,
    pub sort_by: Option<StaffSortField>,
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrdersQuery {
    #[validate(length(max = 100, message = "Termo de busca muito longo."))]
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TopItemsQuery {
    #[validate(range(min = 1, max = 50, message = "O limite deve estar entre 1 e 50."))]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_window_is_last_30_days() {
        let range = RangeQuery::default().resolve_at(date(2026, 10, 19));
        assert_eq!(range, DateRange { from: date(2026, 9, 20), to: date(2026, 10, 19) });
        assert_eq!((range.to - range.from).num_days() + 1, DEFAULT_WINDOW_DAYS);

        // O período anterior também tem 30 dias
        assert_eq!(range.previous(), DateRange { from: date(2026, 8, 21), to: date(2026, 9, 19) });
    }

    #[test]
    fn test_dates_at_calendar_edge_fail_validation() {
        let query = RangeQuery { from: None, to: Some(NaiveDate::MIN) };
        assert!(query.validate().is_err());
        assert!(query.checked_resolve_at(date(2026, 10, 19)).is_none());

        let query = RangeQuery { from: Some(NaiveDate::MIN), to: Some(date(2026, 1, 1)) };
        assert!(query.validate().is_err());

        // Mesmo sem validação, resolver não entra em pânico
        let range = RangeQuery { from: None, to: Some(NaiveDate::MIN) }.resolve_at(date(2026, 10, 19));
        assert_eq!(range.from, NaiveDate::MIN);
        assert_eq!(range.previous().to, NaiveDate::MIN);
    }

    #[test]
    fn test_explicit_range_is_kept() {
        let query = RangeQuery { from: Some(date(2026, 1, 1)), to: Some(date(2026, 1, 31)) };
        assert_eq!(query.resolve_at(date(2026, 10, 19)), DateRange { from: date(2026, 1, 1), to: date(2026, 1, 31) });
    }

    #[test]
    fn test_inverted_range_fails_validation() {
        let query = RangeQuery { from: Some(date(2026, 2, 1)), to: Some(date(2026, 1, 1)) };
        assert!(query.validate().is_err());
        assert!(RangeQuery::default().validate().is_ok());
    }

    #[test]
    fn test_previous_period_has_same_length() {
        let range = DateRange { from: date(2026, 10, 11), to: date(2026, 10, 20) };
        assert_eq!(range.previous(), DateRange { from: date(2026, 10, 1), to: date(2026, 10, 10) });
    }

    #[test]
    fn test_limit_bounds() {
        assert!(TopItemsQuery { limit: Some(0) }.validate().is_err());
        assert!(TopItemsQuery { limit: Some(5) }.validate().is_ok());
    }
}
