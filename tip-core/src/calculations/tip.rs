//! Tip calculation.
//!
//! The tip is `amount × (percent / 100)`, optionally raised to the next whole
//! currency unit, then handed to a [`CurrencyFormatter`] for display.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Raw tip: bill amount × tip percent / 100 |
//! | 2    | If rounding up: ceiling of step 1 in whole units |
//! | 3    | Currency formatting (minor-unit rounding happens only here) |
//!
//! All arithmetic is exact decimal arithmetic; no floating point is involved
//! between the bill text and the formatted string.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{BillAmount, CurrencyFormat, TipEngine, TipPercent};
//!
//! let engine = TipEngine::new(CurrencyFormat::en_us());
//!
//! let tip = engine.compute(
//!     BillAmount::new(dec!(50.00)),
//!     TipPercent::new(dec!(15)),
//!     false,
//! );
//! assert_eq!(tip, "$7.50");
//!
//! let rounded = engine.compute(
//!     BillAmount::new(dec!(50.00)),
//!     TipPercent::new(dec!(15)),
//!     true,
//! );
//! assert_eq!(rounded, "$8.00");
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::ceil_whole_units;
use crate::currency::{CurrencyFormat, CurrencyFormatter};
use crate::models::{BillAmount, TipPercent};

/// Computes the unformatted tip.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{BillAmount, TipPercent, calculate_tip};
///
/// let tip = calculate_tip(BillAmount::new(dec!(33.33)), TipPercent::new(dec!(18)), false);
/// assert_eq!(tip, dec!(5.9994));
///
/// let rounded = calculate_tip(BillAmount::new(dec!(33.33)), TipPercent::new(dec!(18)), true);
/// assert_eq!(rounded, dec!(6));
/// ```
pub fn calculate_tip(
    amount: BillAmount,
    tip_percent: TipPercent,
    round_up: bool,
) -> Decimal {
    // percent / 100 is at most 0.3, so the product never exceeds the bill.
    let raw = amount.value() * (tip_percent.value() / Decimal::ONE_HUNDRED);
    if round_up {
        ceil_whole_units(raw)
    } else {
        raw
    }
}

/// Computes the tip and formats it with `formatter`.
pub fn compute_tip<F: CurrencyFormatter + ?Sized>(
    amount: BillAmount,
    tip_percent: TipPercent,
    round_up: bool,
    formatter: &F,
) -> String {
    formatter.format(calculate_tip(amount, tip_percent, round_up))
}

/// Tip calculator bound to a currency formatter.
///
/// Stateless apart from the formatter: the same inputs always produce the
/// same string.
#[derive(Debug, Clone)]
pub struct TipEngine<F = CurrencyFormat> {
    formatter: F,
}

impl<F: CurrencyFormatter> TipEngine<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Computes the formatted tip for the given inputs.
    pub fn compute(
        &self,
        amount: BillAmount,
        tip_percent: TipPercent,
        round_up: bool,
    ) -> String {
        compute_tip(amount, tip_percent, round_up, &self.formatter)
    }
}

impl Default for TipEngine<CurrencyFormat> {
    fn default() -> Self {
        Self::new(CurrencyFormat::default())
    }
}
