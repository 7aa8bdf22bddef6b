//! Built-in catalog and order used when no order file is given.

use domain::{
    Price, UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
    ValidationError,
};
use rust_decimal::Decimal;
use workflow::services::InMemoryProductCatalog;

/// `(code, price in cents)` for every product the runner knows about.
const PRODUCTS: &[(&str, i64)] = &[
    ("W1234", 1000),
    ("W5678", 450),
    ("W0042", 12_500),
    ("G123", 200),
    ("G-BOLT", 35),
];

/// A small catalog of widgets and gizmos.
///
/// Fails on the first listed price that is out of range.
pub fn catalog() -> Result<InMemoryProductCatalog, ValidationError> {
    PRODUCTS
        .iter()
        .try_fold(InMemoryProductCatalog::new(), |catalog, &(code, cents)| {
            let price = Price::new(Decimal::new(cents, 2))
                .map_err(|error| error.within(code))?;
            Ok(catalog.with_product(code, price))
        })
}

fn address(line1: &str) -> UnvalidatedAddress {
    UnvalidatedAddress {
        address_line1: line1.to_string(),
        address_line2: String::new(),
        address_line3: String::new(),
        address_line4: String::new(),
        city: "Springfield".to_string(),
        zip_code: "12345".to_string(),
    }
}

/// An order for three widgets and half a kilo of gizmos.
pub fn order() -> UnvalidatedOrder {
    UnvalidatedOrder {
        customer_info: UnvalidatedCustomerInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email_address: "ada@example.com".to_string(),
        },
        shipping_address: address("1 Main St"),
        billing_address: address("2 Billing Rd"),
        lines: vec![
            UnvalidatedOrderLine::new("W1234", Decimal::from(3)),
            UnvalidatedOrderLine::new("G123", Decimal::new(5, 1)),
        ],
    }
}
