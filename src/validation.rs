//! Form input validation.
//!
//! Every form DTO exposes a `validate()` that returns either a value whose
//! declared constraints all hold, or the full list of field errors for
//! redisplaying the form. Nothing is persisted unless validation passed.

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Push an error when a required text field is blank.
pub fn required(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// Parse a decimal amount field, enforcing at most 10 digits before the
/// decimal point and 2 after, and optionally that it is strictly positive.
pub fn parse_amount(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    raw: &str,
    positive: bool,
) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
        return None;
    }
    let value = match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            errors.push(FieldError::new(field, format!("{label} must be a number")));
            return None;
        }
    };
    if positive && value <= 0.0 {
        errors.push(FieldError::new(
            field,
            format!("{label} must be a positive number"),
        ));
        return None;
    }
    let cents = value * 100.0;
    if value.abs() >= 1e10 || (cents - cents.round()).abs() > 1e-6 {
        errors.push(FieldError::new(
            field,
            format!(
                "{label} must be a number with a maximum of 10 digits \
                 before the decimal point and 2 after"
            ),
        ));
        return None;
    }
    Some(value)
}

/// Parse a strictly positive integer field.
pub fn parse_count(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    raw: &str,
) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
        return None;
    }
    match raw.parse::<i32>() {
        Ok(v) if v > 0 => Some(v),
        Ok(_) => {
            errors.push(FieldError::new(
                field,
                format!("{label} must be positive"),
            ));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("{label} must be a whole number"),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_flags_blank_and_whitespace() {
        let mut errors = Vec::new();
        required(&mut errors, "account", "  ", "Account cannot be empty");
        required(&mut errors, "type", "swap", "Type cannot be empty");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "account");
    }

    #[test]
    fn parse_amount_accepts_two_decimal_places() {
        let mut errors = Vec::new();
        assert_eq!(
            parse_amount(&mut errors, "q", "Quantity", "1234.56", false),
            Some(1234.56)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn parse_amount_rejects_non_numbers_and_bounds() {
        let mut errors = Vec::new();
        assert_eq!(parse_amount(&mut errors, "q", "Quantity", "abc", false), None);
        assert_eq!(
            parse_amount(&mut errors, "q", "Quantity", "1.234", false),
            None
        );
        assert_eq!(
            parse_amount(&mut errors, "q", "Quantity", "10000000000", false),
            None
        );
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn parse_amount_enforces_positive_when_asked() {
        let mut errors = Vec::new();
        assert_eq!(parse_amount(&mut errors, "q", "Quantity", "-5", true), None);
        assert_eq!(parse_amount(&mut errors, "q", "Quantity", "0", true), None);
        assert_eq!(
            parse_amount(&mut errors, "q", "Quantity", "-5", false),
            Some(-5.0)
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn parse_count_requires_positive_integer() {
        let mut errors = Vec::new();
        assert_eq!(parse_count(&mut errors, "n", "Order number", "7"), Some(7));
        assert_eq!(parse_count(&mut errors, "n", "Order number", "0"), None);
        assert_eq!(parse_count(&mut errors, "n", "Order number", "2.5"), None);
        assert_eq!(errors.len(), 2);
    }
}
