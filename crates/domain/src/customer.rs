//! Customer information and email verification state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value_objects::{EmailAddress, String50};

/// Customer details as received, before any checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvalidatedCustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// A customer's first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PersonalName {
    pub first_name: String50,
    pub last_name: String50,
}

/// Validated customer details attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CustomerInfo {
    pub name: PersonalName,
    pub email_address: EmailAddress,
}

impl CustomerInfo {
    /// Validates raw customer details, reporting every invalid field.
    pub fn parse(raw: &UnvalidatedCustomerInfo) -> Result<Self, Vec<ValidationError>> {
        let first_name = String50::new("first_name", &raw.first_name);
        let last_name = String50::new("last_name", &raw.last_name);
        let email_address = EmailAddress::new("email_address", &raw.email_address);

        match (first_name, last_name, email_address) {
            (Ok(first_name), Ok(last_name), Ok(email_address)) => Ok(Self {
                name: PersonalName {
                    first_name,
                    last_name,
                },
                email_address,
            }),
            (first_name, last_name, email_address) => Err([
                first_name.err(),
                last_name.err(),
                email_address.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

/// An email address together with whether its owner has proven control of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "address")]
pub enum CustomerEmail {
    Unverified(EmailAddress),
    Verified(EmailAddress),
}

impl CustomerEmail {
    pub fn address(&self) -> &EmailAddress {
        match self {
            CustomerEmail::Unverified(address) | CustomerEmail::Verified(address) => address,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, CustomerEmail::Verified(_))
    }
}

/// A customer whose email address has been verified.
///
/// Password resets and other account mail may only target this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    name: PersonalName,
    email: EmailAddress,
}

/// A customer whose email address still awaits verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnverifiedCustomer {
    name: PersonalName,
    email: EmailAddress,
}

impl UnverifiedCustomer {
    pub fn new(name: PersonalName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &PersonalName {
        &self.name
    }

    pub fn email(&self) -> CustomerEmail {
        CustomerEmail::Unverified(self.email.clone())
    }

    /// Marks the email as verified once the owner confirmed it.
    pub fn verify(self) -> Customer {
        Customer {
            name: self.name,
            email: self.email,
        }
    }
}

impl Customer {
    pub fn name(&self) -> &PersonalName {
        &self.name
    }

    pub fn email(&self) -> CustomerEmail {
        CustomerEmail::Verified(self.email.clone())
    }
}

/// Replaces a customer's email. The new address starts out unverified.
pub fn change_email(customer: Customer, new_email: EmailAddress) -> UnverifiedCustomer {
    UnverifiedCustomer {
        name: customer.name,
        email: new_email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_info(first: &str, last: &str, email: &str) -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email_address: email.to_string(),
        }
    }

    fn name() -> PersonalName {
        PersonalName {
            first_name: String50::new("first_name", "Ada").unwrap(),
            last_name: String50::new("last_name", "Lovelace").unwrap(),
        }
    }

    #[test]
    fn test_parse_valid_customer_info() {
        let info = CustomerInfo::parse(&raw_info("Ada", "Lovelace", "ada@example.com")).unwrap();
        assert_eq!(info.name.first_name.as_str(), "Ada");
        assert_eq!(info.email_address.as_str(), "ada@example.com");
    }

    #[test]
    fn test_parse_reports_every_bad_field() {
        let errors = CustomerInfo::parse(&raw_info("", "Lovelace", "nope")).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "email_address"]);
    }

    #[test]
    fn test_change_email_drops_verification() {
        let old = EmailAddress::new("email", "ada@example.com").unwrap();
        let new = EmailAddress::new("email", "ada@lovelace.org").unwrap();
        let customer = UnverifiedCustomer::new(name(), old).verify();
        assert!(customer.email().is_verified());

        let changed = change_email(customer, new.clone());
        assert_eq!(changed.email(), CustomerEmail::Unverified(new));
        assert!(!changed.email().is_verified());

        let reverified = changed.verify();
        assert_eq!(reverified.email().address().as_str(), "ada@lovelace.org");
    }
}
