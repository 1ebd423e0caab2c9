//! `split` command

use std::io::Write;

use clap::Args;
use globalretailx::{commission::CommissionRate, fixtures::products::parse_money};
use rust_decimal::Decimal;

/// Commission split arguments.
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Order total, in major units (e.g. 100.00)
    pub amount: Decimal,

    /// ISO currency code
    #[arg(default_value = "USD")]
    pub currency: String,
}

pub(crate) fn run(args: &SplitArgs, rate: &CommissionRate, out: &mut impl Write) -> anyhow::Result<()> {
    let total = parse_money(&format!("{} {}", args.amount, args.currency))?;
    let split = rate.split(total)?;

    let share = (split.retailer_share() * Decimal::ONE_HUNDRED).round_dp(2);

    writeln!(out, " Total:       {}", split.total)?;
    writeln!(
        out,
        " Commission:  {} ({}%)",
        split.commission,
        rate.percent_points()
    )?;
    writeln!(out, " Retailer:    {} ({share}%)", split.retailer_amount)?;

    Ok(())
}
