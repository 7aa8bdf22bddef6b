//! The place-order workflow: validate, price, acknowledge, assemble events.

use domain::{PlaceOrderEvent, UnvalidatedOrder};

use crate::acknowledgment::acknowledge_order;
use crate::error::{PlaceOrderError, Result};
use crate::events::create_events;
use crate::pricing::price_order;
use crate::services::{
    AcknowledgmentLetterRenderer, AcknowledgmentSender, AddressChecker,
    InMemoryAcknowledgmentSender, InMemoryAddressService, InMemoryProductCatalog, PriceCatalog,
    ProductCodeChecker, TemplateLetterRenderer,
};
use crate::validation::validate_order;

/// Everything the workflow needs from the outside world.
#[derive(Debug, Clone)]
pub struct PlaceOrderDependencies<C, A, P, L, S> {
    pub check_product_code: C,
    pub check_address: A,
    pub get_product_price: P,
    pub create_letter: L,
    pub send_acknowledgment: S,
}

/// Runs the place-order pipeline against a fixed set of collaborators.
///
/// Steps run strictly in sequence. A validation failure stops the run before
/// pricing or acknowledgement; once an order is valid the run always succeeds.
pub struct PlaceOrderWorkflow<C, A, P, L, S>
where
    C: ProductCodeChecker,
    A: AddressChecker,
    P: PriceCatalog,
    L: AcknowledgmentLetterRenderer,
    S: AcknowledgmentSender,
{
    dependencies: PlaceOrderDependencies<C, A, P, L, S>,
}

/// The workflow wired to the in-memory collaborators.
pub type InMemoryPlaceOrderWorkflow = PlaceOrderWorkflow<
    InMemoryProductCatalog,
    InMemoryAddressService,
    InMemoryProductCatalog,
    TemplateLetterRenderer,
    InMemoryAcknowledgmentSender,
>;

impl<C, A, P, L, S> PlaceOrderWorkflow<C, A, P, L, S>
where
    C: ProductCodeChecker,
    A: AddressChecker,
    P: PriceCatalog,
    L: AcknowledgmentLetterRenderer,
    S: AcknowledgmentSender,
{
    /// Creates a workflow over the given collaborators.
    pub fn new(dependencies: PlaceOrderDependencies<C, A, P, L, S>) -> Self {
        Self { dependencies }
    }

    /// The collaborators this workflow runs against.
    pub fn dependencies(&self) -> &PlaceOrderDependencies<C, A, P, L, S> {
        &self.dependencies
    }

    /// Places an order, returning the events it produced.
    #[tracing::instrument(skip_all, fields(lines = order.lines.len()))]
    pub async fn place_order(&self, order: &UnvalidatedOrder) -> Result<Vec<PlaceOrderEvent>> {
        metrics::counter!("place_order_executions_total").increment(1);
        let started = std::time::Instant::now();
        let deps = &self.dependencies;

        let validated = match validate_order(
            &deps.check_product_code,
            &deps.check_address,
            order,
        )
        .await
        {
            Ok(validated) => validated,
            Err(errors) => {
                metrics::counter!("place_order_validation_failed").increment(1);
                metrics::histogram!("place_order_duration_seconds")
                    .record(started.elapsed().as_secs_f64());
                tracing::warn!(errors = errors.len(), "order rejected");
                return Err(PlaceOrderError::Validation(errors));
            }
        };

        let priced = price_order(&deps.get_product_price, validated).await;
        let amount_to_bill = priced.amount_to_bill;

        let acknowledgment =
            acknowledge_order(&deps.create_letter, &deps.send_acknowledgment, &priced).await;
        if acknowledgment.is_some() {
            metrics::counter!("place_order_acknowledgments_sent").increment(1);
        }
        if amount_to_bill.is_positive() {
            metrics::counter!("place_order_billable_orders").increment(1);
        }

        let events = create_events(priced, acknowledgment);

        let duration = started.elapsed().as_secs_f64();
        metrics::histogram!("place_order_duration_seconds").record(duration);
        tracing::info!(
            events = events.len(),
            %amount_to_bill,
            duration,
            "order placed"
        );

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, line, order};
    use domain::{DomainEvent, ProductCode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn in_memory() -> InMemoryPlaceOrderWorkflow {
        PlaceOrderWorkflow::new(PlaceOrderDependencies {
            check_product_code: catalog(),
            check_address: InMemoryAddressService::new(),
            get_product_price: catalog(),
            create_letter: TemplateLetterRenderer,
            send_acknowledgment: InMemoryAcknowledgmentSender::new(),
        })
    }

    #[tokio::test]
    async fn test_happy_path_emits_three_events() {
        let workflow = in_memory();

        let events = workflow
            .place_order(&order(vec![line("W1234", 3)]))
            .await
            .unwrap();

        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec!["OrderPlaced", "AcknowledgmentSent", "BillableOrderPlaced"]
        );
        assert_eq!(workflow.dependencies().send_acknowledgment.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_later_steps() {
        let priced_lines = AtomicUsize::new(0);
        let workflow = PlaceOrderWorkflow::new(PlaceOrderDependencies {
            check_product_code: catalog(),
            check_address: InMemoryAddressService::new(),
            get_product_price: |_: &ProductCode| {
                priced_lines.fetch_add(1, Ordering::SeqCst);
                crate::test_support::price(1)
            },
            create_letter: TemplateLetterRenderer,
            send_acknowledgment: InMemoryAcknowledgmentSender::new(),
        });

        let error = workflow
            .place_order(&order(vec![line("W9999", 1)]))
            .await
            .unwrap_err();

        assert_eq!(error.errors()[0].field, "lines[0].product_code");
        assert_eq!(priced_lines.load(Ordering::SeqCst), 0);
        assert_eq!(workflow.dependencies().send_acknowledgment.sent_count(), 0);
    }
}
