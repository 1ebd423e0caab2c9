//! `cart` command

use std::{io::Write, str::FromStr};

use clap::Args;
use globalretailx::{fixtures::Fixture, pricing::CheckoutPolicy, receipt::CartReceipt};
use thiserror::Error;
use tracing::info;

/// Cart arguments.
///
/// Quantity changes are applied first, then removals, each in the order given.
/// Line numbers start at 1 and follow the receipt.
#[derive(Debug, Args)]
pub struct CartArgs {
    /// Saved cart to load
    #[arg(long, default_value = "default")]
    pub cart: String,

    /// Change a line's quantity, as LINE:DELTA (e.g. 2:-1)
    #[arg(long = "set", value_name = "LINE:DELTA")]
    pub set: Vec<LineDelta>,

    /// Remove a line
    #[arg(long = "remove", value_name = "LINE")]
    pub remove: Vec<LineNumber>,
}

/// Errors parsing line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineArgError {
    /// Not in LINE:DELTA form.
    #[error("expected LINE:DELTA, got {0}")]
    Format(String),

    /// Line numbers start at 1.
    #[error("line numbers start at 1, got {0}")]
    Line(String),

    /// Delta is not an integer.
    #[error("invalid quantity change: {0}")]
    Delta(String),
}

/// A 1-based cart line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumber(usize);

impl LineNumber {
    /// The 0-based cart index.
    fn index(self) -> usize {
        self.0 - 1
    }
}

impl FromStr for LineNumber {
    type Err = LineArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(line) if line >= 1 => Ok(Self(line)),
            _ => Err(LineArgError::Line(s.to_string())),
        }
    }
}

/// A quantity change for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDelta {
    line: LineNumber,
    delta: i64,
}

impl FromStr for LineDelta {
    type Err = LineArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, delta) = s
            .split_once(':')
            .ok_or_else(|| LineArgError::Format(s.to_string()))?;

        Ok(Self {
            line: line.parse()?,
            delta: delta
                .trim()
                .parse()
                .map_err(|_err| LineArgError::Delta(delta.to_string()))?,
        })
    }
}

pub(crate) fn run(
    args: &CartArgs,
    fixture: &Fixture<'_>,
    policy: CheckoutPolicy<'_>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut cart = fixture.cart(&args.cart)?.clone();

    for change in &args.set {
        cart = cart.update_quantity(change.line.index(), change.delta)?;
    }

    for line in &args.remove {
        cart = cart.remove(line.index())?;
    }

    info!(
        cart = %args.cart,
        lines = cart.len(),
        items = cart.item_count(),
        "pricing cart"
    );

    CartReceipt::new(&cart, policy)?.write_to(out, fixture.catalog())?;

    Ok(())
}
