//! Event assembly for a placed order.

use domain::{BillableOrderPlaced, OrderAcknowledgmentSent, PlaceOrderEvent, PricedOrder};

/// Billing event for the order, if there is anything to bill.
pub fn create_billing_event(order: &PricedOrder) -> Option<BillableOrderPlaced> {
    order
        .amount_to_bill
        .is_positive()
        .then(|| BillableOrderPlaced {
            order_id: order.id,
            billing_address: order.billing_address.clone(),
            amount_to_bill: order.amount_to_bill,
        })
}

/// Events in emission order: `OrderPlaced`, then the acknowledgement and the
/// billing event when present.
pub fn create_events(
    order: PricedOrder,
    acknowledgment: Option<OrderAcknowledgmentSent>,
) -> Vec<PlaceOrderEvent> {
    let billing = create_billing_event(&order);

    std::iter::once(PlaceOrderEvent::OrderPlaced(order))
        .chain(acknowledgment.map(PlaceOrderEvent::AcknowledgmentSent))
        .chain(billing.map(PlaceOrderEvent::BillableOrderPlaced))
        .collect()
}
