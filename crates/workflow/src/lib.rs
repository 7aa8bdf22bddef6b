//! The place-order workflow.
//!
//! An unvalidated order goes through four steps:
//!
//! 1. [`validate_order`] turns raw input into a [`domain::ValidatedOrder`],
//!    consulting the product catalog and the address service.
//! 2. [`price_order`] quotes every line and totals the order.
//! 3. [`acknowledge_order`] renders and sends an acknowledgement letter.
//! 4. [`create_events`] assembles the events the run produced.
//!
//! [`PlaceOrderWorkflow`] wires the steps to a set of collaborators
//! (see [`services`]) and runs them in sequence.

pub mod acknowledgment;
pub mod error;
pub mod events;
pub mod place_order;
pub mod pricing;
pub mod services;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use acknowledgment::acknowledge_order;
pub use error::{PlaceOrderError, Result};
pub use events::{create_billing_event, create_events};
pub use place_order::{InMemoryPlaceOrderWorkflow, PlaceOrderDependencies, PlaceOrderWorkflow};
pub use pricing::price_order;
pub use validation::validate_order;
