// src/analytics/listing.rs

use std::cmp::Ordering;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::staff::StaffRecord;

// Valor de categoria/status que desliga o filtro de igualdade
pub const ALL: &str = "all";

/// Registros que podem ser filtrados por busca textual + categoria.
pub trait Searchable {
    /// Campos comparados com o termo de busca (nome, SKU, fornecedor, e-mail, notas...)
    fn search_fields(&self) -> Vec<&str>;

    /// Campo usado no filtro de igualdade (categoria, status, cargo)
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ListFilter {
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self { search, category }
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        self.matches_search(item) && self.matches_category(item)
    }

    fn matches_search<T: Searchable>(&self, item: &T) -> bool {
        let term = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_category<T: Searchable>(&self, item: &T) -> bool {
        match self.category.as_deref() {
            None | Some("") | Some(ALL) => true,
            Some(wanted) => item.category().eq_ignore_ascii_case(wanted),
        }
    }
}

pub fn filter_items<T: Searchable + Clone>(items: &[T], filter: &ListFilter) -> Vec<T> {
    items.iter().filter(|item| filter.matches(*item)).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum StaffSortField {
    #[default]
    TotalRevenue,
    TotalOrders,
    AverageOrderValue,
    Name,
}

/// Ordena a equipe: campos numéricos do maior para o menor, nome em ordem alfabética.
/// `sort_by` é estável, então empates mantêm a ordem recebida.
pub fn sort_staff(records: &mut [StaffRecord], field: StaffSortField) {
    match field {
        StaffSortField::TotalRevenue => {
            records.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue))
        }
        StaffSortField::TotalOrders => records.sort_by(|a, b| b.total_orders.cmp(&a.total_orders)),
        StaffSortField::AverageOrderValue => {
            records.sort_by(|a, b| b.average_order_value.total_cmp(&a.average_order_value))
        }
        StaffSortField::Name => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

// Ignora caixa; empate decidido pela string original
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
