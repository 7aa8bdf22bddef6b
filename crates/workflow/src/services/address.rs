//! Address-existence service trait and in-memory implementation.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::{AddressValidationError, CheckedAddress, UnvalidatedAddress};

/// Confirms that an address exists.
#[async_trait]
pub trait AddressChecker: Send + Sync {
    /// Returns the confirmed address, or why it could not be confirmed.
    async fn check_address_exists(
        &self,
        address: &UnvalidatedAddress,
    ) -> Result<CheckedAddress, AddressValidationError>;
}

#[async_trait]
impl<F> AddressChecker for F
where
    F: Fn(&UnvalidatedAddress) -> Result<CheckedAddress, AddressValidationError> + Send + Sync,
{
    async fn check_address_exists(
        &self,
        address: &UnvalidatedAddress,
    ) -> Result<CheckedAddress, AddressValidationError> {
        self(address)
    }
}

/// In-memory address service for testing.
///
/// Without a registry every well-formed address is accepted; with one, only
/// registered addresses are. A forced failure overrides both.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressService {
    known: Option<Arc<HashSet<UnvalidatedAddress>>>,
    fail_with: Arc<RwLock<Option<AddressValidationError>>>,
    checks: Arc<AtomicUsize>,
}

impl InMemoryAddressService {
    /// Creates a service that accepts any well-formed address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service that only knows the given addresses.
    pub fn with_known_addresses<I>(addresses: I) -> Self
    where
        I: IntoIterator<Item = UnvalidatedAddress>,
    {
        Self {
            known: Some(Arc::new(addresses.into_iter().collect())),
            ..Self::default()
        }
    }

    /// Makes every subsequent check fail with `error`; `None` restores normal
    /// behaviour.
    pub fn set_fail_with(&self, error: Option<AddressValidationError>) {
        *self.fail_with.write().unwrap_or_else(PoisonError::into_inner) = error;
    }

    /// Number of lookups served so far.
    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressChecker for InMemoryAddressService {
    async fn check_address_exists(
        &self,
        address: &UnvalidatedAddress,
    ) -> Result<CheckedAddress, AddressValidationError> {
        self.checks.fetch_add(1, Ordering::SeqCst);

        let forced = *self.fail_with.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(error) = forced {
            return Err(error);
        }

        if address.address_line1.trim().is_empty() || address.city.trim().is_empty() {
            return Err(AddressValidationError::InvalidFormat);
        }

        match &self.known {
            Some(known) if !known.contains(address) => Err(AddressValidationError::AddressNotFound),
            _ => Ok(CheckedAddress::new(address.clone())),
        }
    }
}
