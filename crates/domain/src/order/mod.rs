//! The order in its three successive stages.
//!
//! ```text
//! UnvalidatedOrder ──validate──► ValidatedOrder ──price──► PricedOrder
//! ```
//!
//! Each stage is its own immutable type; no stage is converted in place.

mod priced;
mod unvalidated;
mod validated;

pub use priced::{PricedOrder, PricedOrderLine};
pub use unvalidated::{UnvalidatedOrder, UnvalidatedOrderLine};
pub use validated::{ValidatedOrder, ValidatedOrderLine};
