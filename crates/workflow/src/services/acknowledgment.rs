//! Acknowledgement letter rendering and delivery.

use std::fmt::Write as _;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use domain::{HtmlString, OrderAcknowledgment, OrderQuantity, PricedOrder, SendResult};

/// Renders the acknowledgement letter for a priced order.
#[async_trait]
pub trait AcknowledgmentLetterRenderer: Send + Sync {
    async fn create_acknowledgment_letter(&self, order: &PricedOrder) -> HtmlString;
}

#[async_trait]
impl<F> AcknowledgmentLetterRenderer for F
where
    F: Fn(&PricedOrder) -> HtmlString + Send + Sync,
{
    async fn create_acknowledgment_letter(&self, order: &PricedOrder) -> HtmlString {
        self(order)
    }
}

/// Delivers an acknowledgement to the customer.
///
/// Transport problems are the sender's business; callers only see `Sent` or
/// `NotSent`.
#[async_trait]
pub trait AcknowledgmentSender: Send + Sync {
    async fn send_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult;
}

#[async_trait]
impl<F> AcknowledgmentSender for F
where
    F: Fn(&OrderAcknowledgment) -> SendResult + Send + Sync,
{
    async fn send_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult {
        self(acknowledgment)
    }
}

/// Renders a short HTML letter listing every line and the total.
///
/// Customer-supplied text is escaped before it is placed in the markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateLetterRenderer;

#[async_trait]
impl AcknowledgmentLetterRenderer for TemplateLetterRenderer {
    async fn create_acknowledgment_letter(&self, order: &PricedOrder) -> HtmlString {
        let name = &order.customer_info.name;
        let mut html = format!(
            "<p>Dear {} {},</p><p>Thank you for your order.</p><ul>",
            escape_html(name.first_name.as_str()),
            escape_html(name.last_name.as_str())
        );

        for line in &order.lines {
            let quantity = match line.quantity {
                OrderQuantity::Unit(units) => format!("{} x", units.value()),
                OrderQuantity::Kilogram(kilos) => format!("{} kg", kilos.value()),
            };
            // Writing to a String cannot fail.
            let _ = write!(
                html,
                "<li>{} {} @ {} = {}</li>",
                quantity,
                escape_html(line.product_code.as_str()),
                line.unit_price,
                line.line_total()
            );
        }

        let _ = write!(html, "</ul><p>Total: {}</p>", order.amount_to_bill);
        HtmlString::new(html)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug)]
struct InMemorySenderState {
    sent: Vec<OrderAcknowledgment>,
    deliver: bool,
}

impl Default for InMemorySenderState {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            deliver: true,
        }
    }
}

/// In-memory acknowledgement sender for testing.
///
/// Records every delivered acknowledgement. Delivery can be switched off to
/// simulate an unreachable mailbox.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAcknowledgmentSender {
    state: Arc<RwLock<InMemorySenderState>>,
}

impl InMemoryAcknowledgmentSender {
    /// Creates a sender that delivers everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether subsequent sends succeed.
    pub fn set_deliver(&self, deliver: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .deliver = deliver;
    }

    /// Returns the number of acknowledgements delivered.
    pub fn sent_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sent
            .len()
    }

    /// Returns a copy of every delivered acknowledgement.
    pub fn sent(&self) -> Vec<OrderAcknowledgment> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sent
            .clone()
    }
}

#[async_trait]
impl AcknowledgmentSender for InMemoryAcknowledgmentSender {
    async fn send_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if !state.deliver {
            return SendResult::NotSent;
        }

        state.sent.push(acknowledgment.clone());
        SendResult::Sent
    }
}
