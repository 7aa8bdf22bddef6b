//! Orders with a resolved price on every line.

use common::{NonEmptyList, OrderId};
use serde::Serialize;

use crate::address::Address;
use crate::customer::CustomerInfo;
use crate::value_objects::{BillingAmount, OrderQuantity, Price, ProductCode};

/// A validated line plus the unit price the catalog quoted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedOrderLine {
    pub product_code: ProductCode,
    pub quantity: OrderQuantity,
    pub unit_price: Price,
}

impl PricedOrderLine {
    /// Unit price times quantity.
    pub fn line_total(&self) -> BillingAmount {
        self.unit_price.multiply(&self.quantity)
    }
}

/// An order ready to be placed.
///
/// `id` stays `None` until whatever persists the order assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedOrder {
    pub id: Option<OrderId>,
    pub customer_info: CustomerInfo,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub lines: NonEmptyList<PricedOrderLine>,
    pub amount_to_bill: BillingAmount,
}

impl PricedOrder {
    /// Returns a copy of the order carrying `id`.
    pub fn with_id(self, id: OrderId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
