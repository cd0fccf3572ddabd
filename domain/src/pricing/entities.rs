//! Price quotes and the raw upstream records they are derived from

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tier key for the registration price in the requested currency
pub const REQUESTED_CURRENCY: &str = "REQUESTED_CURRENCY";
/// Tier key for the renewal price in the requested currency
pub const RENEWAL_REQUESTED_CURRENCY: &str = "RENEWAL_REQUESTED_CURRENCY";

/// A monetary amount as sent by the price service.
///
/// `value` is a decimal string; when it is absent or unparsable the amount
/// is `units + nanos / 1e9`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl Money {
    pub fn amount(&self) -> Decimal {
        if let Some(value) = self.value.as_deref().map(str::trim)
            && !value.is_empty()
            && let Ok(parsed) = value.parse::<Decimal>()
        {
            return parsed;
        }
        Decimal::from(self.units) + Decimal::new(i64::from(self.nanos), 9)
    }
}

/// One named price entry of a raw record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    #[serde(default)]
    pub price: Option<Money>,
    /// Promotion window; only its presence matters here
    #[serde(default)]
    pub promotion: Option<serde_json::Value>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A raw price record: tier name to entry. Null entries are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPriceData {
    #[serde(default)]
    pub prices: BTreeMap<String, Option<ProductPrice>>,
}

impl RawPriceData {
    /// Entry for `tier`, or the first non-null entry in key order.
    pub fn pick(&self, tier: &str) -> Option<&ProductPrice> {
        self.prices
            .get(tier)
            .and_then(Option::as_ref)
            .or_else(|| self.prices.values().flatten().next())
    }
}

/// An explicit error record from the price stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

/// Normalized price for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub domain: String,
    pub currency: String,
    pub cost: Decimal,
    pub renewal_cost: Option<Decimal>,
    pub promotion: bool,
    /// Display order is significant
    pub labels: Vec<String>,
    pub available: bool,
}

impl PriceQuote {
    /// Normalize a raw record.
    ///
    /// Returns `None` when the record has no entries or the registration
    /// entry carries no amount.
    pub fn from_raw(domain: impl Into<String>, raw: &RawPriceData) -> Option<Self> {
        let registration = raw.pick(REQUESTED_CURRENCY)?;
        let money = registration.price.as_ref()?;
        let renewal_cost = raw
            .pick(RENEWAL_REQUESTED_CURRENCY)
            .and_then(|p| p.price.as_ref())
            .map(Money::amount);

        Some(Self {
            domain: domain.into(),
            currency: money.currency_code.clone(),
            cost: money.amount(),
            renewal_cost,
            promotion: registration.promotion.is_some(),
            labels: registration.labels.clone(),
            available: true,
        })
    }

    /// Registration cost with exactly two fraction digits
    pub fn format_cost(&self) -> String {
        format_amount(self.cost)
    }
}

pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// One message of a price search stream
#[derive(Debug, Clone, PartialEq)]
pub enum PriceSearchMessage {
    Price(PriceQuote),
    Error(UpstreamError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: Option<&str>, units: i64, nanos: i32) -> Money {
        Money {
            currency_code: "USD".to_string(),
            value: value.map(str::to_string),
            units,
            nanos,
        }
    }

    fn entry(m: Money) -> Option<ProductPrice> {
        Some(ProductPrice {
            price: Some(m),
            promotion: None,
            labels: vec![],
        })
    }

    #[test]
    fn test_value_string_wins() {
        assert_eq!(money(Some("12.99"), 1, 0).amount().to_string(), "12.99");
        assert_eq!(money(Some("n/a"), 7, 250_000_000).amount(), Decimal::new(725, 2));
        assert_eq!(money(None, 45, 500_000_000).amount(), Decimal::new(455, 1));
    }

    #[test]
    fn test_format_amount_two_digits() {
        assert_eq!(format_amount(Decimal::new(1299, 2)), "12.99");
        assert_eq!(format_amount(Decimal::from(45)), "45.00");
        assert_eq!(format_amount(Decimal::new(12_995, 3)), "13.00");
        assert_eq!(format_amount(Decimal::new(45_500_000_000, 9)), "45.50");
    }

    #[test]
    fn test_from_raw_named_tiers() {
        let mut raw = RawPriceData::default();
        raw.prices.insert(
            REQUESTED_CURRENCY.to_string(),
            Some(ProductPrice {
                price: Some(money(Some("12.99"), 0, 0)),
                promotion: Some(serde_json::json!({"ends": "2026-12-31"})),
                labels: vec!["sale".to_string(), "popular".to_string()],
            }),
        );
        raw.prices.insert(
            RENEWAL_REQUESTED_CURRENCY.to_string(),
            entry(money(Some("45.00"), 0, 0)),
        );

        let quote = PriceQuote::from_raw("beanhaus.com", &raw).unwrap();
        assert_eq!(quote.domain, "beanhaus.com");
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.format_cost(), "12.99");
        assert_eq!(quote.renewal_cost.map(format_amount).as_deref(), Some("45.00"));
        assert!(quote.promotion);
        assert_eq!(quote.labels, vec!["sale", "popular"]);
        assert!(quote.available);
    }

    #[test]
    fn test_missing_tier_falls_back_to_first_key() {
        let mut raw = RawPriceData::default();
        raw.prices.insert("A_NULL".to_string(), None);
        raw.prices.insert("B_TIER".to_string(), entry(money(Some("9.50"), 0, 0)));
        raw.prices.insert("C_TIER".to_string(), entry(money(Some("99.00"), 0, 0)));

        let quote = PriceQuote::from_raw("x.io", &raw).unwrap();
        assert_eq!(quote.format_cost(), "9.50");
        assert_eq!(quote.renewal_cost, Some(Decimal::new(950, 2)));
        assert!(!quote.promotion);
    }

    #[test]
    fn test_empty_record_is_skipped() {
        assert!(PriceQuote::from_raw("x.io", &RawPriceData::default()).is_none());

        let mut raw = RawPriceData::default();
        raw.prices.insert(REQUESTED_CURRENCY.to_string(), Some(ProductPrice::default()));
        assert!(PriceQuote::from_raw("x.io", &raw).is_none());
    }

    #[test]
    fn test_raw_record_deserializes() {
        let raw: RawPriceData = serde_json::from_str(
            r#"{"prices": {"REQUESTED_CURRENCY": {"price": {"currency_code": "EUR", "units": 8, "nanos": 990000000}}, "OTHER": null}}"#,
        )
        .unwrap();
        let quote = PriceQuote::from_raw("b.eu", &raw).unwrap();
        assert_eq!(quote.currency, "EUR");
        assert_eq!(quote.format_cost(), "8.99");
        assert_eq!(quote.renewal_cost, Some(Decimal::new(8_990_000_000, 9)));
    }

    #[test]
    fn test_upstream_error_display() {
        let err = UpstreamError {
            code: "NOT_FOUND".to_string(),
            message: "tld not supported".to_string(),
        };
        assert_eq!(err.to_string(), "[NOT_FOUND] tld not supported");
    }
}
