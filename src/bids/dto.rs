use serde::Deserialize;

use crate::validation::{parse_amount, required, FieldError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BidForm {
    #[serde(default)]
    pub account: String,
    #[serde(default, rename = "type")]
    pub bid_type: String,
    #[serde(default, rename = "bidQuantity")]
    pub bid_quantity: String,
}

#[derive(Debug, Clone)]
pub struct ValidBid {
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: f64,
}

impl BidForm {
    pub fn validate(&self) -> Result<ValidBid, Vec<FieldError>> {
        let mut errors = Vec::new();
        required(&mut errors, "account", &self.account, "Account cannot be empty");
        required(&mut errors, "type", &self.bid_type, "Type cannot be empty");
        let quantity = parse_amount(
            &mut errors,
            "bidQuantity",
            "Bid quantity",
            &self.bid_quantity,
            false,
        );
        match (errors.is_empty(), quantity) {
            (true, Some(bid_quantity)) => Ok(ValidBid {
                account: self.account.trim().to_string(),
                bid_type: self.bid_type.trim().to_string(),
                bid_quantity,
            }),
            _ => Err(errors),
        }
    }
}
