use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A tip percentage in the closed range `[0, 30]`.
///
/// The slider that drives this value has a stop every 5 percent
/// (0, 5, 10, 15, 20, 25, 30). [`TipPercent::new`] accepts any value and
/// clamps it; [`TipPercent::from_slider`] additionally snaps to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TipPercent(Decimal);

impl TipPercent {
    pub const MIN: Decimal = Decimal::ZERO;
    pub const MAX: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
    /// Distance between two slider stops.
    pub const STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
    /// Number of positions the slider can rest on.
    pub const STOPS: usize = 7;

    pub fn new(value: Decimal) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Converts a raw slider position into a percentage.
    ///
    /// Out-of-range positions are clamped, non-finite ones become 0, and the
    /// result is snapped to the nearest stop.
    pub fn from_slider(position: f32) -> Self {
        if !position.is_finite() {
            return Self(Self::MIN);
        }
        let step = 5.0_f32;
        let clamped = position.clamp(0.0, 30.0);
        let stop = (clamped / step).round() as u32;
        Self::new(Decimal::from(stop) * Self::STEP)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Integer part of the percentage, as shown next to the slider.
    pub fn whole_percent(&self) -> u32 {
        self.0.trunc().to_u32().unwrap_or(0)
    }

    /// Index of the nearest slider stop, `0..STOPS`.
    pub fn stop_index(&self) -> usize {
        (self.0 / Self::STEP).round().to_usize().unwrap_or(0)
    }
}

impl Default for TipPercent {
    fn default() -> Self {
        Self(Decimal::from_parts(15, 0, 0, false, 0))
    }
}

impl From<Decimal> for TipPercent {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TipPercent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.whole_percent())
    }
}
