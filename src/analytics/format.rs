// src/analytics/format.rs

use chrono::NaiveDate;
use num_format::{Locale as NumLocale, ToFormattedString};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::settings::RestaurantSettings;

/// Formatador de métricas para exibição direta no frontend.
///
/// Não guarda estado além do locale e do símbolo da moeda; o mesmo valor
/// sempre gera a mesma string.
#[derive(Debug, Clone)]
pub struct MetricFormatter {
    locale_tag: String,
    num_locale: NumLocale,
    currency_symbol: String,
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self::new("en", "$")
    }
}

impl MetricFormatter {
    pub fn new(locale_tag: &str, currency_symbol: &str) -> Self {
        // "pt-BR" -> "pt". Locale desconhecido cai no inglês.
        let primary = locale_tag.split('-').next().unwrap_or(locale_tag).to_lowercase();
        let num_locale = NumLocale::from_name(primary.as_str()).unwrap_or(NumLocale::en);

        Self {
            locale_tag: primary,
            num_locale,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Usa o símbolo de moeda das configurações do restaurante.
    pub fn for_settings(locale_tag: &str, settings: &RestaurantSettings) -> Self {
        Self::new(locale_tag, &settings.currency_symbol)
    }

    pub fn locale_tag(&self) -> &str {
        &self.locale_tag
    }

    // 1234.5 -> "$1,234.50"
    pub fn format_currency(&self, value: f64) -> String {
        let amount = Amount::from_f64(value);

        format!(
            "{}{}{}{}{:02}",
            amount.sign(),
            self.currency_symbol,
            amount.integer.to_formatted_string(&self.num_locale),
            self.num_locale.decimal(),
            amount.cents
        )
    }

    // 1000000 -> "1,000,000" (no máximo 2 casas, sem zeros à direita)
    pub fn format_number(&self, value: f64) -> String {
        let amount = Amount::from_f64(value);
        let sign = amount.sign();
        let integer = amount.integer.to_formatted_string(&self.num_locale);

        match amount.cents {
            0 => format!("{}{}", sign, integer),
            frac if frac % 10 == 0 => {
                format!("{}{}{}{}", sign, integer, self.num_locale.decimal(), frac / 10)
            }
            frac => format!("{}{}{}{:02}", sign, integer, self.num_locale.decimal(), frac),
        }
    }

    pub fn format_count(&self, value: i64) -> String {
        value.to_formatted_string(&self.num_locale)
    }

    pub fn format_percent(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let formatted = format!("{:.1}", value);
        if self.num_locale.decimal() == "." {
            format!("{}%", formatted)
        } else {
            format!("{}%", formatted.replace('.', self.num_locale.decimal()))
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.locale_tag.as_str() {
            "en" => date.format("%b %-d, %Y").to_string(),
            _ => date.format("%d/%m/%Y").to_string(),
        }
    }
}

// Valor arredondado para centavos (meio para longe do zero), separado em parte inteira e centavos.
struct Amount {
    negative: bool,
    integer: u128,
    cents: u32,
}

impl Amount {
    // NaN, infinito e valores fora do alcance do Decimal viram 0
    fn from_f64(value: f64) -> Self {
        Decimal::from_f64(value)
            .and_then(Self::from_decimal)
            .unwrap_or(Self { negative: false, integer: 0, cents: 0 })
    }

    fn from_decimal(value: Decimal) -> Option<Self> {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let integer = rounded.trunc();
        let cents = (rounded - integer).abs().checked_mul(Decimal::ONE_HUNDRED)?;

        Some(Self {
            negative: rounded.is_sign_negative() && !rounded.is_zero(),
            integer: integer.abs().to_u128()?,
            cents: cents.to_u32()?,
        })
    }

    fn sign(&self) -> &'static str {
        if self.negative { "-" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        let fmt = MetricFormatter::default();
        assert_eq!(fmt.format_currency(1234.5), "$1,234.50");
        assert_eq!(fmt.format_currency(0.0), "$0.00");
        assert_eq!(fmt.format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(fmt.format_currency(-12.0), "-$12.00");
        assert_eq!(fmt.format_currency(0.005), "$0.01");
    }

    #[test]
    fn test_non_finite_values_format_as_zero() {
        let fmt = MetricFormatter::default();
        assert_eq!(fmt.format_currency(f64::NAN), "$0.00");
        assert_eq!(fmt.format_number(f64::INFINITY), "0");
        assert_eq!(fmt.format_percent(f64::NAN), "0.0%");
    }

    #[test]
    fn test_large_amounts_keep_every_digit() {
        let fmt = MetricFormatter::default();
        assert_eq!(fmt.format_currency(1e17), "$100,000,000,000,000,000.00");
        assert_eq!(fmt.format_currency(-1e17), "-$100,000,000,000,000,000.00");
        assert_eq!(fmt.format_number(1e17), "100,000,000,000,000,000");

        // Perto do limite do Decimal: sem pânico e sem virar zero
        let huge = fmt.format_currency(1e27);
        assert!(huge.starts_with("$1,000,000,000,000,"));
        assert_eq!(huge.matches(',').count(), 9);
        assert!(huge.ends_with(".00"));
        assert_eq!(fmt.format_currency(1e30), "$0.00");
    }

    #[test]
    fn test_format_number() {
        let fmt = MetricFormatter::default();
        assert_eq!(fmt.format_number(1000000.0), "1,000,000");
        assert_eq!(fmt.format_number(1234.5), "1,234.5");
        assert_eq!(fmt.format_number(12.25), "12.25");
        assert_eq!(fmt.format_number(999.0), "999");
        assert_eq!(fmt.format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        let fmt = MetricFormatter::default();
        assert_eq!(fmt.format_percent(45.46), "45.5%");
        assert_eq!(fmt.format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(MetricFormatter::default().format_date(date), "Oct 9, 2026");
        assert_eq!(MetricFormatter::new("pt-BR", "R$").format_date(date), "09/10/2026");
    }

    #[test]
    fn test_locale_separators() {
        let fmt = MetricFormatter::new("de", "€");
        assert_eq!(fmt.format_count(1000000), "1.000.000");
        assert_eq!(fmt.format_currency(1234.5), "€1.234,50");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let fmt = MetricFormatter::new("xx-YY", "$");
        assert_eq!(fmt.format_number(1000000.0), "1,000,000");
    }
}
