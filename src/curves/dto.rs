use serde::Deserialize;

use crate::validation::{parse_amount, FieldError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurvePointForm {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ValidCurvePoint {
    pub term: f64,
    pub value: f64,
}

impl CurvePointForm {
    pub fn validate(&self) -> Result<ValidCurvePoint, Vec<FieldError>> {
        let mut errors = Vec::new();
        let term = parse_amount(&mut errors, "term", "Term", &self.term, true);
        let value = parse_amount(&mut errors, "value", "Value", &self.value, true);
        match (term, value) {
            (Some(term), Some(value)) => Ok(ValidCurvePoint { term, value }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_must_be_positive_numbers() {
        let form = CurvePointForm {
            term: "1.5".into(),
            value: "0.75".into(),
        };
        let point = form.validate().expect("should validate");
        assert_eq!(point.term, 1.5);
        assert_eq!(point.value, 0.75);

        let form = CurvePointForm {
            term: "-1".into(),
            value: "".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
