//! Field checks for product payloads and normalization of paging parameters.
//!
//! The rules live on `ProductPayload` as `validator` attributes. Every field
//! is checked on each call, so a single response lists every defective field.

use std::collections::BTreeMap;

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{NewProduct, ProductPayload};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

const MIN_NAME_LEN: usize = 3;
const MIN_SKU_LEN: usize = 5;

/// Field name → human readable message
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// Validate a product payload without normalizing it.
pub fn validate_product(payload: &ProductPayload) -> ValidationOutcome {
    match payload.validate() {
        Ok(()) => ValidationOutcome {
            valid: true,
            errors: FieldErrors::new(),
        },
        Err(e) => ValidationOutcome {
            valid: false,
            errors: field_errors(&e),
        },
    }
}

/// Validate a payload and, if every field passes, return it normalized:
/// strings trimmed, `price` parsed as a float, `stock` truncated to an integer.
pub fn parse_product(payload: &ProductPayload) -> Result<NewProduct, FieldErrors> {
    payload.validate().map_err(|e| field_errors(&e))?;

    let text = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    };

    Ok(NewProduct {
        name: text(&payload.name),
        sku: text(&payload.sku),
        price: payload.price.as_ref().and_then(parse_number).unwrap_or_default(),
        stock: payload.stock.as_ref().and_then(parse_integer).unwrap_or_default(),
        category: text(&payload.category),
        description: text(&payload.description),
    })
}

/// First message per field
fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errors)| {
            let error = errors.first()?;
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            Some((field.to_string(), message))
        })
        .collect()
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn text_rule(value: &str, label: &str, min: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("required", format!("{} is required", label)));
    }
    if trimmed.chars().count() < min {
        return Err(invalid(
            "length",
            format!("{} must be at least {} characters long", label, min),
        ));
    }
    Ok(())
}

pub(crate) fn check_name(value: &str) -> Result<(), ValidationError> {
    text_rule(value, "Name", MIN_NAME_LEN)
}

pub(crate) fn check_sku(value: &str) -> Result<(), ValidationError> {
    text_rule(value, "SKU", MIN_SKU_LEN)
}

pub(crate) fn check_category(value: &str) -> Result<(), ValidationError> {
    text_rule(value, "Category", 1)
}

pub(crate) fn check_price(value: &Value) -> Result<(), ValidationError> {
    match parse_number(value) {
        None => Err(invalid("number", "Price must be a valid number".to_string())),
        Some(price) if price <= 0.0 => {
            Err(invalid("range", "Price must be greater than 0".to_string()))
        }
        Some(_) => Ok(()),
    }
}

pub(crate) fn check_stock(value: &Value) -> Result<(), ValidationError> {
    match parse_integer(value) {
        None => Err(invalid("number", "Stock must be a valid number".to_string())),
        Some(stock) if stock < 0 => Err(invalid(
            "range",
            "Stock must be greater than or equal to 0".to_string(),
        )),
        Some(_) => Ok(()),
    }
}

/// A finite number from a JSON number, or the longest numeric prefix of a
/// string (`"10abc"` → 10, `" 2.5e1x"` → 25).
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_float(s),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// An integer from a JSON number or the leading decimal digits of a string
/// (`"1e3"` → 1, `"4.5"` → 4). Fractional numbers truncate toward zero.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // Out-of-range values saturate.
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

/// Normalized paging parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_sub(1).saturating_mul(self.limit as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Parse raw `page` / `limit` query values.
///
/// Missing, unparsable or zero values fall back to the defaults; `page` is at
/// least 1 and `limit` is clamped to `1..=100`.
pub fn validate_pagination(page: Option<&str>, limit: Option<&str>) -> Pagination {
    let positive = |raw: &str| leading_integer(raw).filter(|n| *n != 0);
    let page = page.and_then(positive).unwrap_or(i64::from(DEFAULT_PAGE));
    let limit = limit.and_then(positive).unwrap_or(i64::from(DEFAULT_LIMIT));

    Pagination {
        page: page.clamp(1, i64::from(u32::MAX)) as u32,
        limit: limit.clamp(1, i64::from(MAX_LIMIT)) as u32,
    }
}

fn digit_count(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading decimal integer of `raw` (`"12abc"` → 12), ignoring leading
/// whitespace. Overflow saturates.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digit_count(digits.as_bytes());

    let magnitude = match digits[..end].parse::<i64>() {
        Ok(n) => n,
        Err(e) if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) => i64::MAX,
        Err(_) => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Longest prefix of `raw` that reads as a decimal float, with optional sign,
/// fraction and exponent. Leading whitespace is skipped.
fn leading_float(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_count(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_count(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digit_count(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    raw[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProductPayload {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "name": "Standing Desk",
            "sku": "DESK-001",
            "price": 499.9,
            "stock": 12,
            "category": "Furniture"
        })
    }

    #[test]
    fn test_valid_product() {
        let outcome = validate_product(&payload(valid()));
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_short_name_is_the_only_error() {
        let outcome = validate_product(&payload(json!({
            "name": "ab",
            "sku": "12345",
            "price": 10,
            "stock": 0,
            "category": "x"
        })));

        assert!(!outcome.valid);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.errors["name"],
            "Name must be at least 3 characters long"
        );
    }

    #[test]
    fn test_empty_payload_reports_every_field() {
        let outcome = validate_product(&ProductPayload::default());

        assert_eq!(outcome.errors["name"], "Name is required");
        assert_eq!(outcome.errors["sku"], "SKU is required");
        assert_eq!(outcome.errors["price"], "Price is required");
        assert_eq!(outcome.errors["stock"], "Stock is required");
        assert_eq!(outcome.errors["category"], "Category is required");
    }

    #[test]
    fn test_blank_strings_are_missing() {
        let outcome = validate_product(&payload(json!({
            "name": "   ",
            "sku": " ",
            "price": 1,
            "stock": 1,
            "category": "\t"
        })));

        assert_eq!(outcome.errors["name"], "Name is required");
        assert_eq!(outcome.errors["sku"], "SKU is required");
        assert_eq!(outcome.errors["category"], "Category is required");
    }

    #[test]
    fn test_length_is_measured_after_trimming() {
        let outcome = validate_product(&payload(json!({
            "name": "  ab  ",
            "sku": "  abcd  ",
            "price": 1,
            "stock": 1,
            "category": "x"
        })));

        assert_eq!(
            outcome.errors["sku"],
            "SKU must be at least 5 characters long"
        );
        assert!(outcome.errors.contains_key("name"));
    }

    #[test]
    fn test_price_rules() {
        let mut body = valid();
        body["price"] = json!("abc");
        assert_eq!(
            validate_product(&payload(body.clone())).errors["price"],
            "Price must be a valid number"
        );

        body["price"] = json!(0);
        assert_eq!(
            validate_product(&payload(body.clone())).errors["price"],
            "Price must be greater than 0"
        );

        body["price"] = json!(true);
        assert_eq!(
            validate_product(&payload(body.clone())).errors["price"],
            "Price must be a valid number"
        );

        body["price"] = json!(" 10.5 ");
        assert!(validate_product(&payload(body)).valid);
    }

    #[test]
    fn test_stock_rules() {
        let mut body = valid();
        body["stock"] = json!(-1);
        assert_eq!(
            validate_product(&payload(body.clone())).errors["stock"],
            "Stock must be greater than or equal to 0"
        );

        body["stock"] = json!("many");
        assert_eq!(
            validate_product(&payload(body.clone())).errors["stock"],
            "Stock must be a valid number"
        );

        body["stock"] = json!(" 7 ");
        assert!(validate_product(&payload(body)).valid);
    }

    #[test]
    fn test_parse_product_normalizes() {
        let product = parse_product(&payload(json!({
            "name": "  Standing Desk ",
            "sku": " DESK-001 ",
            "price": "499.90",
            "stock": 5.9,
            "category": " Furniture ",
            "description": "  Oak top  "
        })))
        .unwrap();

        assert_eq!(product.name, "Standing Desk");
        assert_eq!(product.sku, "DESK-001");
        assert_eq!(product.price, 499.9);
        assert_eq!(product.stock, 5);
        assert_eq!(product.category, "Furniture");
        assert_eq!(product.description, "Oak top");
    }

    #[test]
    fn test_parse_product_defaults_description() {
        let product = parse_product(&payload(valid())).unwrap();
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(&json!(3)), Some(3));
        assert_eq!(parse_integer(&json!(-2.7)), Some(-2));
        assert_eq!(parse_integer(&json!("42")), Some(42));
        assert_eq!(parse_integer(&json!("4.5")), Some(4));
        assert_eq!(parse_integer(&json!("NaN")), None);
        assert_eq!(parse_integer(&json!(null)), None);
    }

    #[test]
    fn test_numeric_strings_read_leading_prefix() {
        assert_eq!(parse_number(&json!("10abc")), Some(10.0));
        assert_eq!(parse_number(&json!(" 2.5e1x")), Some(25.0));
        assert_eq!(parse_number(&json!("1e")), Some(1.0));
        assert_eq!(parse_number(&json!(".5")), Some(0.5));
        assert_eq!(parse_number(&json!("-3.")), Some(-3.0));
        assert_eq!(parse_number(&json!("e5")), None);
        assert_eq!(parse_number(&json!("-")), None);
        assert_eq!(parse_number(&json!("")), None);

        assert_eq!(parse_integer(&json!("1e3")), Some(1));
        assert_eq!(parse_integer(&json!("10abc")), Some(10));
        assert_eq!(parse_integer(&json!("  -4.9")), Some(-4));
        assert_eq!(parse_integer(&json!("0")), Some(0));
        assert_eq!(parse_integer(&json!("abc")), None);
    }

    #[test]
    fn test_prefixed_numbers_pass_and_normalize() {
        let mut body = valid();
        body["price"] = json!("10abc");
        body["stock"] = json!("1e3");

        assert!(validate_product(&payload(body.clone())).valid);
        let product = parse_product(&payload(body)).unwrap();
        assert_eq!(product.price, 10.0);
        assert_eq!(product.stock, 1);
    }

    #[test]
    fn test_null_numbers_are_missing() {
        let mut body = valid();
        body["price"] = Value::Null;
        body["stock"] = Value::Null;

        let errors = validate_product(&payload(body)).errors;
        assert_eq!(errors["price"], "Price is required");
        assert_eq!(errors["stock"], "Stock is required");
    }

    #[test]
    fn test_pagination_defaults_and_clamps() {
        assert_eq!(validate_pagination(None, None), Pagination { page: 1, limit: 10 });
        assert_eq!(
            validate_pagination(Some("0"), Some("500")),
            Pagination { page: 1, limit: 100 }
        );
        assert_eq!(
            validate_pagination(Some("abc"), Some("-5")),
            Pagination { page: 1, limit: 1 }
        );
        assert_eq!(
            validate_pagination(Some("-3"), Some("0")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(
            validate_pagination(Some(" 3"), Some("25items")),
            Pagination { page: 3, limit: 25 }
        );
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination { page: 3, limit: 10 }.offset(), 20);
        assert_eq!(Pagination::default().offset(), 0);
    }
}
