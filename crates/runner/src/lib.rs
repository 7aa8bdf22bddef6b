//! Command-line runner for the place-order workflow.
//!
//! Wires the workflow to the in-memory collaborators, places one order (read
//! from a JSON file or the built-in sample) and reports the resulting events.

pub mod config;
pub mod error;
pub mod sample;

use std::path::Path;

use domain::{PlaceOrderEvent, UnvalidatedOrder};
use workflow::services::{
    InMemoryAcknowledgmentSender, InMemoryAddressService, TemplateLetterRenderer,
};
use workflow::{InMemoryPlaceOrderWorkflow, PlaceOrderDependencies, PlaceOrderWorkflow};

use config::Config;
use error::RunnerError;

/// Creates the workflow the runner places orders with.
pub fn create_workflow(config: &Config) -> Result<InMemoryPlaceOrderWorkflow, RunnerError> {
    let catalog = sample::catalog()?;
    let sender = InMemoryAcknowledgmentSender::new();
    sender.set_deliver(config.acknowledgments_enabled);

    Ok(PlaceOrderWorkflow::new(PlaceOrderDependencies {
        check_product_code: catalog.clone(),
        check_address: InMemoryAddressService::new(),
        get_product_price: catalog,
        create_letter: TemplateLetterRenderer,
        send_acknowledgment: sender,
    }))
}

/// Reads an order document from disk.
pub fn read_order(path: &Path) -> Result<UnvalidatedOrder, RunnerError> {
    let raw = std::fs::read_to_string(path).map_err(|source| RunnerError::ReadOrder {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// The order to place: the configured file, or the built-in sample.
pub fn load_order(config: &Config) -> Result<UnvalidatedOrder, RunnerError> {
    match &config.order_path {
        Some(path) => read_order(path),
        None => Ok(sample::order()),
    }
}

/// Places the configured order and returns its events.
pub async fn run(config: &Config) -> Result<Vec<PlaceOrderEvent>, RunnerError> {
    let order = load_order(config)?;
    let workflow = create_workflow(config)?;
    Ok(workflow.place_order(&order).await?)
}
