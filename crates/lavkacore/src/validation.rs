//! Input validation for cart operations
//!
//! Every cart operation runs these checks before it touches a basket:
//! - user ids must be positive
//! - product names must contain a non-whitespace character
//! - prices must be non-negative
//!
//! Chat input arrives as text (callback payloads, typed messages), so the
//! parse helpers turn raw strings into the typed values the cart accepts and
//! reject anything that is not an integer.

use crate::error::{CartError, CartResult};

const USER_ID_MESSAGE: &str = "Идентификатор пользователя должен быть положительным целым числом.";
const PRODUCT_NAME_MESSAGE: &str = "Название товара должно быть непустой строкой.";
const PRICE_MESSAGE: &str = "Цена товара должна быть неотрицательным целым числом.";
const CHANGE_MESSAGE: &str = "Изменение количества должно быть целым числом.";

/// Validates that a user id is a positive integer.
///
/// # Examples
/// ```
/// use lavkacore::validation::validate_user_id;
///
/// assert!(validate_user_id(42).is_ok());
/// assert!(validate_user_id(0).is_err());
/// assert!(validate_user_id(-7).is_err());
/// ```
pub fn validate_user_id(user_id: i64) -> CartResult<()> {
    if user_id <= 0 {
        return Err(CartError::invalid(USER_ID_MESSAGE));
    }
    Ok(())
}

/// Validates a product name and, when supplied, its price.
///
/// # Examples
/// ```
/// use lavkacore::validation::validate_product;
///
/// assert!(validate_product("Кофе", Some(150)).is_ok());
/// assert!(validate_product("Кофе", None).is_ok());
/// assert!(validate_product("   ", None).is_err());
/// assert!(validate_product("Кофе", Some(-1)).is_err());
/// ```
pub fn validate_product(product_name: &str, product_price: Option<i64>) -> CartResult<()> {
    if product_name.trim().is_empty() {
        return Err(CartError::invalid(PRODUCT_NAME_MESSAGE));
    }
    if let Some(price) = product_price {
        if price < 0 {
            return Err(CartError::invalid(PRICE_MESSAGE));
        }
    }
    Ok(())
}

/// Parses a user id received as text and validates it.
///
/// # Examples
/// ```
/// use lavkacore::validation::parse_user_id;
///
/// assert_eq!(parse_user_id("123").unwrap(), 123);
/// assert!(parse_user_id("12.5").is_err());
/// assert!(parse_user_id("0").is_err());
/// ```
pub fn parse_user_id(raw: &str) -> CartResult<i64> {
    let user_id = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| CartError::invalid(USER_ID_MESSAGE))?;
    validate_user_id(user_id)?;
    Ok(user_id)
}

/// Converts an unsigned platform id (Telegram user ids are `u64`) into a
/// cart user id.
///
/// # Examples
/// ```
/// use lavkacore::validation::user_id_from_u64;
///
/// assert_eq!(user_id_from_u64(12345).unwrap(), 12345);
/// assert!(user_id_from_u64(0).is_err());
/// assert!(user_id_from_u64(u64::MAX).is_err());
/// ```
pub fn user_id_from_u64(raw: u64) -> CartResult<i64> {
    let user_id = i64::try_from(raw).map_err(|_| CartError::invalid(USER_ID_MESSAGE))?;
    validate_user_id(user_id)?;
    Ok(user_id)
}

/// Parses a quantity change (`+1`, `-2`, `0`) received as text.
///
/// Zero and negative values are accepted; only non-integers are rejected.
///
/// # Examples
/// ```
/// use lavkacore::validation::parse_quantity_change;
///
/// assert_eq!(parse_quantity_change("+1").unwrap(), 1);
/// assert_eq!(parse_quantity_change("-3").unwrap(), -3);
/// assert!(parse_quantity_change("one").is_err());
/// ```
pub fn parse_quantity_change(raw: &str) -> CartResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CartError::invalid(CHANGE_MESSAGE))
}
