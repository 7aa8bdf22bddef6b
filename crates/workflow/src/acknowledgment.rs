//! Acknowledgement step: render a letter, try to send it.

use domain::{OrderAcknowledgment, OrderAcknowledgmentSent, PricedOrder, SendResult};

use crate::services::{AcknowledgmentLetterRenderer, AcknowledgmentSender};

/// Sends the customer an acknowledgement of a priced order.
///
/// Returns the event to record when the sender reports `Sent`, and `None`
/// otherwise. A failed delivery never fails the order.
#[tracing::instrument(skip_all)]
pub async fn acknowledge_order<L, S>(
    create_letter: &L,
    send_acknowledgment: &S,
    order: &PricedOrder,
) -> Option<OrderAcknowledgmentSent>
where
    L: AcknowledgmentLetterRenderer + ?Sized,
    S: AcknowledgmentSender + ?Sized,
{
    let acknowledgment = OrderAcknowledgment {
        email_address: order.customer_info.email_address.clone(),
        letter: create_letter.create_acknowledgment_letter(order).await,
    };

    match send_acknowledgment.send_acknowledgment(&acknowledgment).await {
        SendResult::Sent => Some(OrderAcknowledgmentSent {
            order_id: order.id,
            email_address: acknowledgment.email_address,
        }),
        SendResult::NotSent => {
            tracing::info!(
                email = %acknowledgment.email_address,
                "acknowledgement not sent"
            );
            None
        }
    }
}
