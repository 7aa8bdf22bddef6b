//! Orders as they arrive from the outside world.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::address::UnvalidatedAddress;
use crate::customer::UnvalidatedCustomerInfo;

/// One requested line: a raw product code and a raw quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedOrderLine {
    pub product_code: String,
    pub quantity: Decimal,
}

impl UnvalidatedOrderLine {
    pub fn new(product_code: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            product_code: product_code.into(),
            quantity,
        }
    }
}

/// An order form with nothing checked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedOrder {
    pub customer_info: UnvalidatedCustomerInfo,
    pub shipping_address: UnvalidatedAddress,
    pub billing_address: UnvalidatedAddress,
    #[serde(default)]
    pub lines: Vec<UnvalidatedOrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_order_form() {
        let json = r#"{
            "customer_info": {"first_name": "Ada", "last_name": "Lovelace", "email_address": "ada@example.com"},
            "shipping_address": {"address_line1": "1 Main St", "city": "Springfield", "zip_code": "12345"},
            "billing_address": {"address_line1": "1 Main St", "city": "Springfield", "zip_code": "12345"},
            "lines": [{"product_code": "W1234", "quantity": "3"}]
        }"#;

        let order: UnvalidatedOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].product_code, "W1234");
        assert_eq!(order.lines[0].quantity, Decimal::from(3));
    }

    #[test]
    fn test_missing_lines_deserialize_as_empty() {
        let json = r#"{
            "customer_info": {"first_name": "Ada", "last_name": "Lovelace", "email_address": "ada@example.com"},
            "shipping_address": {"address_line1": "1 Main St", "city": "Springfield", "zip_code": "12345"},
            "billing_address": {"address_line1": "1 Main St", "city": "Springfield", "zip_code": "12345"}
        }"#;

        let order: UnvalidatedOrder = serde_json::from_str(json).unwrap();
        assert!(order.lines.is_empty());
    }
}
