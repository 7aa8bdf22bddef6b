//! Collaborator traits and in-memory implementations for the workflow steps.

pub mod acknowledgment;
pub mod address;
pub mod product_catalog;

pub use acknowledgment::{
    AcknowledgmentLetterRenderer, AcknowledgmentSender, InMemoryAcknowledgmentSender,
    TemplateLetterRenderer,
};
pub use address::{AddressChecker, InMemoryAddressService};
pub use product_catalog::{InMemoryProductCatalog, PriceCatalog, ProductCodeChecker};
