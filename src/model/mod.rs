//! Pure data structures managed by the actors, with their DTOs and filters.
//!
//! Every entity follows the same shape: the entity itself, an `XCreate` payload, an `XUpdate`
//! patch (all fields optional), an `XQuery` filter (all fields optional, `Default` matches
//! everything) and a typed `XId`. The [`ActorEntity`](actor_framework::ActorEntity) impls live
//! next to the actors that own them.
//!
//! Entities serialize with camelCase keys, which is also what the HTTP layer speaks.

pub mod comment;
pub mod customer;
pub mod driver;
pub mod order;
pub mod payment;
pub mod reaction;
pub mod restaurant;

pub use comment::*;
pub use customer::*;
pub use driver::*;
pub use order::*;
pub use payment::*;
pub use reaction::*;
pub use restaurant::*;

use rust_decimal::Decimal;

/// Action type for entities without custom actions.
#[derive(Debug, Clone)]
pub enum NoAction {}

/// Currency used when neither the caller nor the referenced data names one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Validates a 3-letter currency code and upper-cases it.
pub fn normalize_currency(code: &str) -> Result<String, String> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("invalid currency code '{}'", code))
    }
}

/// Significant digits of a dish price. Two of them are after the point.
pub const PRICE_DIGITS: u32 = 10;

/// Significant digits of an item or order total. Two of them are after the point.
pub const TOTAL_DIGITS: u32 = 12;

/// Checks that `amount` fits a money column of `max_digits` digits with cents.
pub fn check_money(field: &str, amount: Decimal, max_digits: u32) -> Result<Decimal, String> {
    if amount.normalize().scale() > 2 {
        return Err(format!("{} {} has more than 2 decimal places", field, amount));
    }
    let limit = Decimal::from(10u64.pow(max_digits - 2));
    if amount.abs() >= limit {
        return Err(format!("{} {} must be below {}", field, amount, limit));
    }
    Ok(amount)
}

/// Rejects blank required text and returns it trimmed.
pub fn required(field: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{} must not be blank", field))
    } else {
        Ok(value.to_string())
    }
}

/// Deserializes a field that is present (possibly `null`) as `Some`, for patch payloads
/// that must tell "clear" from "leave alone". Pair with `#[serde(default)]`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// Case-insensitive substring match; `needle` must already be lower-case.
pub(crate) fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_codes_are_normalized() {
        assert_eq!(normalize_currency(" eur ").unwrap(), "EUR");
        assert!(normalize_currency("EURO").is_err());
        assert!(normalize_currency("U5D").is_err());
    }

    #[test]
    fn money_is_bounded_to_its_column() {
        assert_eq!(
            check_money("price", Decimal::new(99_999_999_99, 2), PRICE_DIGITS).unwrap(),
            Decimal::new(99_999_999_99, 2)
        );
        assert!(check_money("price", Decimal::from(100_000_000), PRICE_DIGITS).is_err());
        assert!(check_money("price", Decimal::new(1_005, 3), PRICE_DIGITS).is_err());
        assert!(check_money("price", Decimal::new(1_500, 3), PRICE_DIGITS).is_ok());
        assert!(check_money("total", Decimal::from(100_000_000), TOTAL_DIGITS).is_ok());
    }

    #[test]
    fn required_text_is_trimmed() {
        assert_eq!(required("name", "  Pho 24 ").unwrap(), "Pho 24");
        assert_eq!(
            required("name", "   ").unwrap_err(),
            "name must not be blank"
        );
    }
}
