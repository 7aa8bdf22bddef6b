//! Validation step: unvalidated order → validated order.

use common::NonEmptyList;
use domain::{
    Address, CustomerInfo, OrderQuantity, ProductCode, UnvalidatedAddress,
    UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine, ValidatedOrder,
    ValidatedOrderLine, ValidationError,
};

use crate::services::{AddressChecker, ProductCodeChecker};

/// Validates an order against the product catalog and the address service.
///
/// Customer info, shipping address, billing address and lines are checked
/// independently and all their errors are reported together. Within the
/// lines, the first bad line ends line validation. Any error fails the whole
/// order; no partially valid order is ever returned.
#[tracing::instrument(skip_all, fields(lines = order.lines.len()))]
pub async fn validate_order<C, A>(
    check_product_code: &C,
    check_address: &A,
    order: &UnvalidatedOrder,
) -> Result<ValidatedOrder, Vec<ValidationError>>
where
    C: ProductCodeChecker + ?Sized,
    A: AddressChecker + ?Sized,
{
    let mut errors = Vec::new();

    let customer_info = collect(to_customer_info(&order.customer_info), &mut errors);
    let shipping_address = collect(
        to_address(check_address, &order.shipping_address, "shipping_address")
            .await
            .map_err(|error| vec![error]),
        &mut errors,
    );
    let billing_address = collect(
        to_address(check_address, &order.billing_address, "billing_address")
            .await
            .map_err(|error| vec![error]),
        &mut errors,
    );
    let lines = collect(
        to_validated_order_lines(check_product_code, &order.lines)
            .await
            .map_err(|error| vec![error]),
        &mut errors,
    );

    match (customer_info, shipping_address, billing_address, lines) {
        (Some(customer_info), Some(shipping_address), Some(billing_address), Some(lines)) => {
            Ok(ValidatedOrder {
                customer_info,
                shipping_address,
                billing_address,
                lines,
            })
        }
        _ => {
            tracing::debug!(errors = errors.len(), "order failed validation");
            Err(errors)
        }
    }
}

fn collect<T>(
    result: Result<T, Vec<ValidationError>>,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(found) => {
            errors.extend(found);
            None
        }
    }
}

fn to_customer_info(
    raw: &UnvalidatedCustomerInfo,
) -> Result<CustomerInfo, Vec<ValidationError>> {
    CustomerInfo::parse(raw).map_err(|errors| {
        errors
            .into_iter()
            .map(|error| error.within("customer_info"))
            .collect()
    })
}

/// Resolves an address through the address service, then checks its fields.
async fn to_address<A>(
    check_address: &A,
    raw: &UnvalidatedAddress,
    field: &str,
) -> Result<Address, ValidationError>
where
    A: AddressChecker + ?Sized,
{
    let checked = check_address
        .check_address_exists(raw)
        .await
        .map_err(|error| ValidationError::new(field, error.to_string()))?;

    Address::from_checked(&checked).map_err(|error| error.within(field))
}

async fn to_validated_order_lines<C>(
    check_product_code: &C,
    lines: &[UnvalidatedOrderLine],
) -> Result<NonEmptyList<ValidatedOrderLine>, ValidationError>
where
    C: ProductCodeChecker + ?Sized,
{
    let mut validated = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        validated.push(to_validated_order_line(check_product_code, index, line).await?);
    }

    NonEmptyList::try_from(validated)
        .map_err(|_| ValidationError::new("lines", "order must contain at least one line"))
}

async fn to_validated_order_line<C>(
    check_product_code: &C,
    index: usize,
    line: &UnvalidatedOrderLine,
) -> Result<ValidatedOrderLine, ValidationError>
where
    C: ProductCodeChecker + ?Sized,
{
    let code_field = format!("lines[{index}].product_code");
    let product_code = ProductCode::parse(&code_field, &line.product_code)?;

    if !check_product_code
        .check_product_code_exists(&product_code)
        .await
    {
        return Err(ValidationError::new(
            code_field,
            format!("product code '{product_code}' does not exist"),
        ));
    }

    let quantity = OrderQuantity::for_product(
        &format!("lines[{index}].quantity"),
        &product_code,
        line.quantity,
    )?;

    Ok(ValidatedOrderLine {
        product_code,
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryAddressService;
    use crate::test_support::{address, catalog, line, order};
    use domain::{AddressValidationError, CheckedAddress};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[tokio::test]
    async fn test_valid_order_passes() {
        let addresses = InMemoryAddressService::new();
        let unvalidated = order(vec![line("W1234", 3), line("G123", 2)]);

        let validated = validate_order(&catalog(), &addresses, &unvalidated)
            .await
            .unwrap();

        assert_eq!(validated.lines.len(), 2);
        assert_eq!(validated.lines.first().product_code.as_str(), "W1234");
        assert!(matches!(
            validated.lines.as_slice()[1].quantity,
            OrderQuantity::Kilogram(_)
        ));
        assert_eq!(validated.shipping_address.address_line1().as_str(), "1 Main St");
        assert_eq!(validated.billing_address.address_line1().as_str(), "2 Billing Rd");
        assert_eq!(addresses.check_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_product_code_fails() {
        let unvalidated = order(vec![line("W1234", 1), line("W9999", 1)]);

        let errors = validate_order(&catalog(), &InMemoryAddressService::new(), &unvalidated)
            .await
            .unwrap_err();

        assert_eq!(fields(&errors), vec!["lines[1].product_code"]);
        assert!(errors[0].description.contains("W9999"));
    }

    #[tokio::test]
    async fn test_first_bad_line_stops_line_checks() {
        let calls = AtomicUsize::new(0);
        let checker = |code: &ProductCode| {
            calls.fetch_add(1, Ordering::SeqCst);
            code.as_str() != "W0000"
        };
        let unvalidated = order(vec![line("W0000", 1), line("W1234", 1), line("W5678", 1)]);

        let errors = validate_order(&checker, &InMemoryAddressService::new(), &unvalidated)
            .await
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_lines_fail_even_when_everything_else_is_valid() {
        let errors = validate_order(&catalog(), &InMemoryAddressService::new(), &order(vec![]))
            .await
            .unwrap_err();

        assert_eq!(fields(&errors), vec!["lines"]);
    }

    #[tokio::test]
    async fn test_malformed_code_and_quantity() {
        let errors = validate_order(
            &catalog(),
            &InMemoryAddressService::new(),
            &order(vec![line("X1", 1)]),
        )
        .await
        .unwrap_err();
        assert_eq!(fields(&errors), vec!["lines[0].product_code"]);

        let errors = validate_order(
            &catalog(),
            &InMemoryAddressService::new(),
            &order(vec![line("W1234", 5000)]),
        )
        .await
        .unwrap_err();
        assert_eq!(fields(&errors), vec!["lines[0].quantity"]);
    }

    #[tokio::test]
    async fn test_address_service_failure_is_a_validation_error() {
        let addresses = InMemoryAddressService::with_known_addresses([address("1 Main St")]);
        let unvalidated = order(vec![line("W1234", 1)]);

        let errors = validate_order(&catalog(), &addresses, &unvalidated)
            .await
            .unwrap_err();

        assert_eq!(fields(&errors), vec!["billing_address"]);
        assert_eq!(errors[0].description, "address not found");
    }

    #[tokio::test]
    async fn test_checked_address_still_needs_valid_fields() {
        let mut unvalidated = order(vec![line("W1234", 1)]);
        unvalidated.shipping_address.zip_code = "ABC".to_string();

        let errors = validate_order(&catalog(), &InMemoryAddressService::new(), &unvalidated)
            .await
            .unwrap_err();

        assert_eq!(fields(&errors), vec!["shipping_address.zip_code"]);
    }

    #[tokio::test]
    async fn test_errors_from_independent_sections_are_collected() {
        let reject_all =
            |_: &UnvalidatedAddress| -> Result<CheckedAddress, AddressValidationError> {
                Err(AddressValidationError::InvalidFormat)
            };
        let mut unvalidated = order(vec![]);
        unvalidated.customer_info.email_address = "not-an-email".to_string();

        let errors = validate_order(&catalog(), &reject_all, &unvalidated)
            .await
            .unwrap_err();

        assert_eq!(
            fields(&errors),
            vec![
                "customer_info.email_address",
                "shipping_address",
                "billing_address",
                "lines"
            ]
        );
    }
}
