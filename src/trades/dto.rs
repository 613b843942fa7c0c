use serde::Deserialize;

use crate::validation::{parse_amount, required, FieldError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeForm {
    #[serde(default)]
    pub account: String,
    #[serde(default, rename = "type")]
    pub trade_type: String,
    #[serde(default, rename = "buyQuantity")]
    pub buy_quantity: String,
}

#[derive(Debug, Clone)]
pub struct ValidTrade {
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: f64,
}

impl TradeForm {
    pub fn validate(&self) -> Result<ValidTrade, Vec<FieldError>> {
        let mut errors = Vec::new();
        required(&mut errors, "account", &self.account, "Account is required");
        required(&mut errors, "type", &self.trade_type, "Type is required");
        let quantity = parse_amount(
            &mut errors,
            "buyQuantity",
            "Buy quantity",
            &self.buy_quantity,
            true,
        );
        match (errors.is_empty(), quantity) {
            (true, Some(buy_quantity)) => Ok(ValidTrade {
                account: self.account.trim().to_string(),
                trade_type: self.trade_type.trim().to_string(),
                buy_quantity,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_quantity_must_be_positive() {
        let form = TradeForm {
            account: "acc-9".into(),
            trade_type: "buy".into(),
            buy_quantity: "100.25".into(),
        };
        assert_eq!(form.validate().expect("valid").buy_quantity, 100.25);

        let form = TradeForm {
            buy_quantity: "-1".into(),
            ..form
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "buyQuantity");
    }
}
