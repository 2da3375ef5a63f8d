//! Rounding helpers shared by the tip calculation and currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value up to the next whole currency unit.
///
/// Rounding happens on whole units, not on minor units: `7.01` becomes `8`,
/// not `7.01`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::ceil_whole_units;
///
/// assert_eq!(ceil_whole_units(dec!(7.50)), dec!(8));
/// assert_eq!(ceil_whole_units(dec!(5.9994)), dec!(6));
/// assert_eq!(ceil_whole_units(dec!(6.00)), dec!(6));
/// ```
pub fn ceil_whole_units(value: Decimal) -> Decimal {
    value.ceil()
}

/// Rounds a value to `digits` decimal places using half-even rounding.
///
/// This is the rounding a platform currency formatter applies to minor
/// units: values exactly halfway go to the even neighbour.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_minor_units;
///
/// assert_eq!(round_minor_units(dec!(0.125), 2), dec!(0.12));
/// assert_eq!(round_minor_units(dec!(0.135), 2), dec!(0.14));
/// assert_eq!(round_minor_units(dec!(1234.5), 0), dec!(1234));
/// ```
pub fn round_minor_units(
    value: Decimal,
    digits: u32,
) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
}
