//! Events emitted by a successful place-order run.

use common::OrderId;
use serde::Serialize;

use crate::address::Address;
use crate::order::PricedOrder;
use crate::value_objects::{BillingAmount, EmailAddress};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and named in past tense.
pub trait DomainEvent: Serialize + Send + Sync + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;
}

/// The customer was sent an acknowledgement of their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderAcknowledgmentSent {
    pub order_id: Option<OrderId>,
    pub email_address: EmailAddress,
}

/// The order has a positive amount that billing should collect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillableOrderPlaced {
    pub order_id: Option<OrderId>,
    pub billing_address: Address,
    pub amount_to_bill: BillingAmount,
}

/// Everything a place-order run can emit.
///
/// Emitted in the fixed order `OrderPlaced`, `AcknowledgmentSent`,
/// `BillableOrderPlaced`, the latter two only when their preconditions hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum PlaceOrderEvent {
    /// The priced order itself; always present.
    OrderPlaced(PricedOrder),

    /// Present only when the sender reported `Sent`.
    AcknowledgmentSent(OrderAcknowledgmentSent),

    /// Present only when the amount to bill is strictly positive.
    BillableOrderPlaced(BillableOrderPlaced),
}

impl DomainEvent for PlaceOrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PlaceOrderEvent::OrderPlaced(_) => "OrderPlaced",
            PlaceOrderEvent::AcknowledgmentSent(_) => "AcknowledgmentSent",
            PlaceOrderEvent::BillableOrderPlaced(_) => "BillableOrderPlaced",
        }
    }
}
