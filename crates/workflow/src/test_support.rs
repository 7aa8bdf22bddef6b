//! Fixtures shared by the unit tests of the workflow steps.

use domain::{
    Price, UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
use rust_decimal::Decimal;

use crate::services::InMemoryProductCatalog;

pub fn address(line1: &str) -> UnvalidatedAddress {
    UnvalidatedAddress {
        address_line1: line1.to_string(),
        address_line2: String::new(),
        address_line3: String::new(),
        address_line4: String::new(),
        city: "Springfield".to_string(),
        zip_code: "12345".to_string(),
    }
}

pub fn customer() -> UnvalidatedCustomerInfo {
    UnvalidatedCustomerInfo {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email_address: "ada@example.com".to_string(),
    }
}

pub fn line(product_code: &str, quantity: i64) -> UnvalidatedOrderLine {
    UnvalidatedOrderLine::new(product_code, Decimal::from(quantity))
}

pub fn order(lines: Vec<UnvalidatedOrderLine>) -> UnvalidatedOrder {
    UnvalidatedOrder {
        customer_info: customer(),
        shipping_address: address("1 Main St"),
        billing_address: address("2 Billing Rd"),
        lines,
    }
}

pub fn price(value: i64) -> Price {
    Price::new(Decimal::from(value)).unwrap()
}

/// W1234 at 10, W5678 at 4, G123 at 2.
pub fn catalog() -> InMemoryProductCatalog {
    InMemoryProductCatalog::new()
        .with_product("W1234", price(10))
        .with_product("W5678", price(4))
        .with_product("G123", price(2))
}
