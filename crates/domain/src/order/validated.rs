//! Orders whose addresses and product codes have been confirmed.

use common::NonEmptyList;
use serde::Serialize;

use crate::address::Address;
use crate::customer::CustomerInfo;
use crate::value_objects::{OrderQuantity, ProductCode};

/// A line whose product code exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedOrderLine {
    pub product_code: ProductCode,
    pub quantity: OrderQuantity,
}

/// An order that passed validation.
///
/// `lines` is a [`NonEmptyList`], so a validated order with no lines cannot be
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedOrder {
    pub customer_info: CustomerInfo,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub lines: NonEmptyList<ValidatedOrderLine>,
}
