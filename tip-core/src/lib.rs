pub mod calculations;
pub mod currency;
pub mod models;
pub mod parse;

pub use calculations::{TipEngine, calculate_tip, compute_tip};
pub use currency::{CurrencyError, CurrencyFormat, CurrencyFormatter, SymbolPosition};
pub use models::*;
pub use parse::parse_bill_amount;
