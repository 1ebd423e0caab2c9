//! `plans` command

use std::io::Write;

use clap::Args;
use globalretailx::{
    commission::CommissionRate,
    plans::{BillingCycle, PlanCurrency, PlanTier},
};
use tabled::{builder::Builder, settings::object::Columns};

use super::table;

/// Plan listing arguments.
#[derive(Debug, Args)]
pub struct PlansArgs {
    /// Listing currency: usd or inr
    #[arg(long, default_value = "usd")]
    pub currency: PlanCurrency,

    /// Show annual billing prices
    #[arg(long)]
    pub annual: bool,
}

pub(crate) fn run(
    args: &PlansArgs,
    rate: &CommissionRate,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let cycle = if args.annual {
        BillingCycle::Annual
    } else {
        BillingCycle::Monthly
    };

    let mut builder = Builder::default();

    builder.push_record(["Plan", "Per Month", "Yearly Saving", "Products"]);

    for tier in PlanTier::ALL {
        let (per_month, saving) = match tier.price(args.currency, cycle)? {
            Some(price) => (
                format!("{}", price.per_month),
                price
                    .yearly_saving
                    .map_or_else(String::new, |saving| format!("{saving}")),
            ),
            None => ("Contact sales".to_string(), String::new()),
        };

        let products = tier
            .product_limit()
            .map_or_else(|| "Unlimited".to_string(), |limit| format!("Up to {limit}"));

        builder.push_record([tier.to_string(), per_month, saving, products]);
    }

    writeln!(out, "\n{}", table::render(builder, Columns::new(1..3)))?;
    writeln!(
        out,
        " {}% commission on every order, on every plan\n",
        rate.percent_points()
    )?;

    Ok(())
}
