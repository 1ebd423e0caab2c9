//! `orders` command

use std::io::Write;

use globalretailx::{
    commission::CommissionRate,
    fixtures::Fixture,
    orders::{OrderLedger, OrderStatus},
};
use tabled::{builder::Builder, settings::object::Columns};
use tracing::info;

use super::table;

pub(crate) fn run(
    fixture: &Fixture<'_>,
    rate: &CommissionRate,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut builder = Builder::default();

    builder.push_record([
        "Order",
        "Customer",
        "Date",
        "Status",
        "Items",
        "Total",
        "Commission",
        "Retailer",
        "Matches Rate",
    ]);

    let mut mismatched = 0_usize;

    for order in fixture.orders() {
        let reconciles = order.reconciles(rate)?;

        if !reconciles {
            mismatched += 1;
        }

        builder.push_record([
            order.id.clone(),
            order.customer.clone(),
            order.date.to_string(),
            order.status.to_string(),
            order.items.to_string(),
            format!("{}", order.total),
            format!("{}", order.commission),
            format!("{}", order.retailer_amount),
            if reconciles { "yes" } else { "no" }.to_string(),
        ]);
    }

    let ledger = OrderLedger::from_orders(fixture.orders(), fixture.currency()?)?;

    info!(
        orders = ledger.order_count(),
        mismatched,
        rate = %rate.percent_points(),
        "reconciled orders"
    );

    writeln!(out, "\n{}", table::render(builder, Columns::new(4..8)))?;
    writeln!(out, " Gross:       {}", ledger.gross)?;
    writeln!(
        out,
        " Commission:  {} ({}%)",
        ledger.commission,
        rate.percent_points()
    )?;
    writeln!(out, " Retailers:   {}", ledger.retailer_net)?;
    writeln!(out, " Items:       {}", ledger.items)?;

    let statuses: Vec<String> = OrderStatus::ALL
        .into_iter()
        .map(|status| format!("{status} {}", ledger.count(status)))
        .collect();

    writeln!(out, " Statuses:    {}\n", statuses.join(", "))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test_helpers::marketplace;

    use super::*;

    #[test]
    fn lists_orders_and_totals() -> TestResult {
        let mut out = Vec::new();

        run(&marketplace()?, &CommissionRate::standard(), &mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("ORD-001"));
        assert!(output.contains("Raj Patel"));
        assert!(output.contains("2026-02-14"));
        assert!(!output.contains(" no "));
        assert!(output.contains("delivered 2"));

        Ok(())
    }
}
