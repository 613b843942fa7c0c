use serde::Deserialize;

use crate::validation::{parse_count, required, FieldError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default, rename = "moodysRating")]
    pub moodys_rating: String,
    #[serde(default, rename = "sandPRating")]
    pub sandp_rating: String,
    #[serde(default, rename = "fitchRating")]
    pub fitch_rating: String,
    #[serde(default, rename = "orderNumber")]
    pub order_number: String,
}

#[derive(Debug, Clone)]
pub struct ValidRating {
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

impl RatingForm {
    pub fn validate(&self) -> Result<ValidRating, Vec<FieldError>> {
        let mut errors = Vec::new();
        required(
            &mut errors,
            "moodysRating",
            &self.moodys_rating,
            "Moody's rating cannot be empty",
        );
        required(
            &mut errors,
            "sandPRating",
            &self.sandp_rating,
            "S&P rating cannot be empty",
        );
        required(
            &mut errors,
            "fitchRating",
            &self.fitch_rating,
            "Fitch rating cannot be empty",
        );
        let order_number = parse_count(&mut errors, "orderNumber", "Order number", &self.order_number);
        match (errors.is_empty(), order_number) {
            (true, Some(order_number)) => Ok(ValidRating {
                moodys_rating: self.moodys_rating.trim().to_string(),
                sandp_rating: self.sandp_rating.trim().to_string(),
                fitch_rating: self.fitch_rating.trim().to_string(),
                order_number,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_number_must_be_a_positive_integer() {
        let form = RatingForm {
            moodys_rating: "Aa1".into(),
            sandp_rating: "AA+".into(),
            fitch_rating: "AA".into(),
            order_number: "3".into(),
        };
        assert_eq!(form.validate().expect("valid").order_number, 3);

        let form = RatingForm {
            order_number: "-3".into(),
            ..form
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "orderNumber");
    }
}
