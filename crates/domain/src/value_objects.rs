//! Constrained primitive types for the order-taking domain.
//!
//! Every type here is constructed through a validating parser and exposes no
//! way to build an unchecked value, so holding one is proof the rule held.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::error::ValidationError;

static WIDGET_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W\d{4}$").expect("widget code pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"));

static ZIP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("zip code pattern is valid"));

const UNIT_QUANTITY_MAX: u32 = 1000;

/// Product code for widgets: `W` followed by exactly four digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WidgetCode(String);

impl WidgetCode {
    /// Parses a widget code, rejecting anything not shaped like `W1234`.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        if WIDGET_CODE_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::new(
                field,
                format!("'{raw}' is not a widget code (expected W followed by 4 digits)"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product code for gizmos.
///
/// Only the leading `G` is checked; the rest of the code is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GizmoCode(String);

impl GizmoCode {
    /// Parses a gizmo code: `G` followed by at least one character.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        if raw.starts_with('G') && raw.len() > 1 && !raw.contains(char::is_whitespace) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::new(
                field,
                format!("'{raw}' is not a gizmo code (expected G followed by an identifier)"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A product code, either a widget or a gizmo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ProductCode {
    Widget(WidgetCode),
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// Parses a raw product code. The first character picks the variant.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        match raw.chars().next() {
            None => Err(ValidationError::new(field, "must not be empty")),
            Some('W') => WidgetCode::parse(field, raw).map(Self::Widget),
            Some('G') => GizmoCode::parse(field, raw).map(Self::Gizmo),
            Some(_) => Err(ValidationError::new(
                field,
                format!("'{raw}' is not a recognised product code"),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProductCode::Widget(code) => code.as_str(),
            ProductCode::Gizmo(code) => code.as_str(),
        }
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of units ordered, `0..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UnitQuantity(u32);

impl UnitQuantity {
    pub fn new(field: &str, value: u32) -> Result<Self, ValidationError> {
        if value > UNIT_QUANTITY_MAX {
            return Err(ValidationError::new(
                field,
                format!("unit quantity {value} exceeds {UNIT_QUANTITY_MAX}"),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Weight ordered in kilograms, `0.00..=100.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct KilogramQuantity(Decimal);

impl KilogramQuantity {
    pub fn new(field: &str, value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::new(
                field,
                format!("kilogram quantity {value} must not be negative"),
            ));
        }
        if value > Decimal::ONE_HUNDRED {
            return Err(ValidationError::new(
                field,
                format!("kilogram quantity {value} exceeds 100"),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Quantity of an order line, tagged with its unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "unit", content = "amount")]
pub enum OrderQuantity {
    Unit(UnitQuantity),
    Kilogram(KilogramQuantity),
}

impl OrderQuantity {
    /// Parses a raw quantity using the unit kind implied by the product code.
    ///
    /// Widgets are counted and must be whole numbers; gizmos are weighed.
    pub fn for_product(
        field: &str,
        product_code: &ProductCode,
        raw: Decimal,
    ) -> Result<Self, ValidationError> {
        match product_code {
            ProductCode::Widget(_) => {
                if !raw.fract().is_zero() {
                    return Err(ValidationError::new(
                        field,
                        format!("unit quantity {raw} must be a whole number"),
                    ));
                }
                let count = raw.to_u32().ok_or_else(|| {
                    ValidationError::new(field, format!("unit quantity {raw} is out of range"))
                })?;
                UnitQuantity::new(field, count).map(OrderQuantity::Unit)
            }
            ProductCode::Gizmo(_) => KilogramQuantity::new(field, raw).map(OrderQuantity::Kilogram),
        }
    }

    /// Numeric amount, irrespective of the unit kind.
    pub fn value(&self) -> Decimal {
        match self {
            OrderQuantity::Unit(quantity) => Decimal::from(quantity.value()),
            OrderQuantity::Kilogram(quantity) => quantity.value(),
        }
    }
}

/// Unit price of a product, `0.00..=1000.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::new("price", "must not be negative"));
        }
        if value > Decimal::ONE_THOUSAND {
            return Err(ValidationError::new("price", "must not exceed 1000"));
        }
        Ok(Self(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Total for `quantity` items at this price.
    pub fn multiply(&self, quantity: &OrderQuantity) -> BillingAmount {
        BillingAmount(self.0 * quantity.value())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Amount to bill for an order. Never negative, since it is only ever a sum of
/// non-negative line totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Sums line totals.
    pub fn sum<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = BillingAmount>,
    {
        amounts.into_iter().fold(Self::zero(), |total, amount| total + amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when there is something to bill.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl std::ops::Add for BillingAmount {
    type Output = BillingAmount;

    fn add(self, rhs: Self) -> Self::Output {
        BillingAmount(self.0 + rhs.0)
    }
}

impl std::fmt::Display for BillingAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Non-empty string of at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct String50(String);

impl String50 {
    pub fn new(field: &str, raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::new(field, "must not be empty"));
        }
        if raw.chars().count() > 50 {
            return Err(ValidationError::new(
                field,
                "must not be more than 50 characters",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Empty input maps to `None`; anything else must satisfy [`String50::new`].
    pub fn optional(field: &str, raw: &str) -> Result<Option<Self>, ValidationError> {
        if raw.is_empty() {
            Ok(None)
        } else {
            Self::new(field, raw).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address with a single `@` separating non-empty parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(field: &str, raw: &str) -> Result<Self, ValidationError> {
        if EMAIL_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::new(
                field,
                format!("'{raw}' is not a valid email address"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Five-digit postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(field: &str, raw: &str) -> Result<Self, ValidationError> {
        if ZIP_CODE_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::new(field, "must be 5 digits"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
