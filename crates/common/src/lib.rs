//! Shared primitives for the order-taking workspace.
//!
//! - [`OrderId`] identifies a placed order once a downstream layer assigns one
//! - [`NonEmptyList`] is a list that cannot be constructed empty

mod non_empty;
mod order_id;

pub use non_empty::{EmptyListError, NonEmptyList};
pub use order_id::OrderId;
