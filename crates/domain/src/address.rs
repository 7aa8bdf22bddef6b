//! Addresses: raw input, collaborator-checked, and validated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;
use crate::value_objects::{String50, ZipCode};

/// Address exactly as submitted with the order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnvalidatedAddress {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub address_line3: String,
    #[serde(default)]
    pub address_line4: String,
    pub city: String,
    pub zip_code: String,
}

/// Why the address-existence service rejected an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressValidationError {
    #[error("address format is invalid")]
    InvalidFormat,

    #[error("address not found")]
    AddressNotFound,
}

/// An address the address-existence service has confirmed.
///
/// Only that service should construct one; the workflow never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedAddress(UnvalidatedAddress);

impl CheckedAddress {
    pub fn new(address: UnvalidatedAddress) -> Self {
        Self(address)
    }

    pub fn as_unvalidated(&self) -> &UnvalidatedAddress {
        &self.0
    }
}

/// A validated address.
///
/// Built only from a [`CheckedAddress`]; there is no path from raw input that
/// skips the existence check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    address_line1: String50,
    address_line2: Option<String50>,
    address_line3: Option<String50>,
    address_line4: Option<String50>,
    city: String50,
    zip_code: ZipCode,
}

impl Address {
    /// Checks field shapes of a confirmed address. Stops at the first bad field.
    pub fn from_checked(checked: &CheckedAddress) -> Result<Self, ValidationError> {
        let raw = checked.as_unvalidated();

        Ok(Self {
            address_line1: String50::new("address_line1", &raw.address_line1)?,
            address_line2: String50::optional("address_line2", &raw.address_line2)?,
            address_line3: String50::optional("address_line3", &raw.address_line3)?,
            address_line4: String50::optional("address_line4", &raw.address_line4)?,
            city: String50::new("city", &raw.city)?,
            zip_code: ZipCode::new("zip_code", &raw.zip_code)?,
        })
    }

    pub fn address_line1(&self) -> &String50 {
        &self.address_line1
    }

    /// The optional lines 2 to 4 that were supplied, in order.
    pub fn extra_lines(&self) -> impl Iterator<Item = &String50> {
        [&self.address_line2, &self.address_line3, &self.address_line4]
            .into_iter()
            .flatten()
    }

    pub fn city(&self) -> &String50 {
        &self.city
    }

    pub fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(zip_code: &str) -> UnvalidatedAddress {
        UnvalidatedAddress {
            address_line1: "1 Main St".to_string(),
            address_line2: "Suite 2".to_string(),
            address_line3: String::new(),
            address_line4: String::new(),
            city: "Springfield".to_string(),
            zip_code: zip_code.to_string(),
        }
    }

    #[test]
    fn test_from_checked_keeps_optional_lines() {
        let address = Address::from_checked(&CheckedAddress::new(raw("12345"))).unwrap();
        assert_eq!(address.address_line1().as_str(), "1 Main St");
        let extra: Vec<_> = address.extra_lines().map(String50::as_str).collect();
        assert_eq!(extra, vec!["Suite 2"]);
        assert_eq!(address.zip_code().as_str(), "12345");
    }

    #[test]
    fn test_from_checked_rejects_bad_zip_code() {
        let error = Address::from_checked(&CheckedAddress::new(raw("ABCDE"))).unwrap_err();
        assert_eq!(error.field, "zip_code");
    }

    #[test]
    fn test_optional_lines_default_when_missing_from_json() {
        let json = r#"{"address_line1":"1 Main St","city":"Springfield","zip_code":"12345"}"#;
        let address: UnvalidatedAddress = serde_json::from_str(json).unwrap();
        assert!(address.address_line2.is_empty());
    }
}
