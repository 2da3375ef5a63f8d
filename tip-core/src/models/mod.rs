mod bill_amount;
mod tip_percent;

pub use bill_amount::BillAmount;
pub use tip_percent::TipPercent;
