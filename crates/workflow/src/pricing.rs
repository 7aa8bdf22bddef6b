//! Pricing step: validated order → priced order.

use common::NonEmptyList;
use domain::{BillingAmount, PricedOrder, PricedOrderLine, ValidatedOrder, ValidatedOrderLine};

use crate::services::PriceCatalog;

/// Quotes every line against the catalog and totals the order.
///
/// Cannot fail: every product code was confirmed during validation. Lines are
/// quoted one at a time, in order. The priced order carries no id yet.
#[tracing::instrument(skip_all, fields(lines = order.lines.len()))]
pub async fn price_order<P>(get_product_price: &P, order: ValidatedOrder) -> PricedOrder
where
    P: PriceCatalog + ?Sized,
{
    let (first, rest) = order.lines.into_parts();
    let first = to_priced_order_line(get_product_price, first).await;
    let mut priced_rest = Vec::with_capacity(rest.len());
    for line in rest {
        priced_rest.push(to_priced_order_line(get_product_price, line).await);
    }
    let lines = NonEmptyList::new(first, priced_rest);
    let amount_to_bill = BillingAmount::sum(lines.iter().map(PricedOrderLine::line_total));

    tracing::debug!(%amount_to_bill, "order priced");

    PricedOrder {
        id: None,
        customer_info: order.customer_info,
        shipping_address: order.shipping_address,
        billing_address: order.billing_address,
        lines,
        amount_to_bill,
    }
}

async fn to_priced_order_line<P>(
    get_product_price: &P,
    line: ValidatedOrderLine,
) -> PricedOrderLine
where
    P: PriceCatalog + ?Sized,
{
    let unit_price = get_product_price
        .get_product_price(&line.product_code)
        .await;
    PricedOrderLine {
        product_code: line.product_code,
        quantity: line.quantity,
        unit_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryAddressService;
    use crate::test_support::{catalog, line, order, price};
    use crate::validation::validate_order;
    use domain::{ProductCode, UnvalidatedOrderLine};
    use rust_decimal::Decimal;

    async fn validated(lines: Vec<UnvalidatedOrderLine>) -> ValidatedOrder {
        validate_order(&catalog(), &InMemoryAddressService::new(), &order(lines))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_single_line_total() {
        let priced = price_order(&catalog(), validated(vec![line("W1234", 3)]).await).await;

        assert_eq!(priced.amount_to_bill.value(), Decimal::from(30));
        assert_eq!(priced.lines.first().unit_price, price(10));
        assert!(priced.id.is_none());
    }

    #[tokio::test]
    async fn test_amount_is_sum_of_line_totals() {
        let priced = price_order(
            &catalog(),
            validated(vec![line("W1234", 2), line("W5678", 5), line("G123", 3)]).await,
        )
        .await;

        // 2 * 10 + 5 * 4 + 3 * 2
        assert_eq!(priced.amount_to_bill.value(), Decimal::from(46));
        assert_eq!(priced.lines.len(), 3);
    }

    #[tokio::test]
    async fn test_zero_quantities_price_to_zero() {
        let priced = price_order(
            &catalog(),
            validated(vec![line("W1234", 0), line("G123", 0)]).await,
        )
        .await;

        assert_eq!(priced.amount_to_bill, BillingAmount::zero());
        assert!(!priced.amount_to_bill.is_positive());
    }

    #[tokio::test]
    async fn test_fractional_kilograms() {
        let mut unvalidated = vec![line("G123", 0)];
        unvalidated[0].quantity = Decimal::new(25, 1);
        let flat_rate = |_: &ProductCode| price(4);

        let priced = price_order(&flat_rate, validated(unvalidated).await).await;

        assert_eq!(priced.amount_to_bill.value(), Decimal::from(10));
    }
}
