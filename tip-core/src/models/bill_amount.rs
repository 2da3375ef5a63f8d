use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bill total entered by the user.
///
/// Always non-negative: negative values are clamped to zero on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillAmount(Decimal);

impl BillAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        if value.is_sign_negative() {
            Self::ZERO
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for BillAmount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for BillAmount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
