//! Screen state for the tip calculator.
//!
//! [`TipView`] is the single value the controller publishes: every input the
//! user has given plus the derived tip string. Renderers only ever read it.

use tip_core::{BillAmount, CurrencyFormatter, TipEngine, TipPercent, parse_bill_amount};

/// Everything a renderer needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipView {
    /// Bill text exactly as typed, kept for editing even when it does not parse.
    pub bill_input: String,
    pub tip_percent: TipPercent,
    pub round_up: bool,
    /// Whether the calculate button is in its pressed visual state.
    pub pressed: bool,
    /// Formatted tip, derived from the three inputs above.
    pub tip: String,
}

impl TipView {
    /// Builds the initial view for an empty bill.
    pub fn new<F: CurrencyFormatter>(
        engine: &TipEngine<F>,
        tip_percent: TipPercent,
    ) -> Self {
        let mut view = Self {
            bill_input: String::new(),
            tip_percent,
            round_up: false,
            pressed: false,
            tip: String::new(),
        };
        view.recompute(engine);
        view
    }

    /// Bill amount used for the calculation; malformed text counts as zero.
    pub fn bill_amount(&self) -> BillAmount {
        parse_bill_amount(&self.bill_input)
    }

    /// Refreshes [`TipView::tip`] from the current inputs.
    pub fn recompute<F: CurrencyFormatter>(
        &mut self,
        engine: &TipEngine<F>,
    ) {
        self.tip = engine.compute(self.bill_amount(), self.tip_percent, self.round_up);
    }
}
