//! Type model for the place-order workflow.
//!
//! This crate provides:
//! - Constrained value types (product codes, quantities, prices)
//! - Customer and address types, with checked/validated addresses kept apart
//! - The order in its unvalidated, validated and priced stages
//! - The events a placed order produces

pub mod acknowledgment;
pub mod address;
pub mod customer;
pub mod error;
pub mod events;
pub mod order;
pub mod value_objects;

pub use acknowledgment::{HtmlString, OrderAcknowledgment, SendResult};
pub use address::{Address, AddressValidationError, CheckedAddress, UnvalidatedAddress};
pub use customer::{
    Customer, CustomerEmail, CustomerInfo, PersonalName, UnvalidatedCustomerInfo,
    UnverifiedCustomer, change_email,
};
pub use error::ValidationError;
pub use events::{BillableOrderPlaced, DomainEvent, OrderAcknowledgmentSent, PlaceOrderEvent};
pub use order::{
    PricedOrder, PricedOrderLine, UnvalidatedOrder, UnvalidatedOrderLine, ValidatedOrder,
    ValidatedOrderLine,
};
pub use value_objects::{
    BillingAmount, EmailAddress, GizmoCode, KilogramQuantity, OrderQuantity, Price, ProductCode,
    String50, UnitQuantity, WidgetCode, ZipCode,
};
