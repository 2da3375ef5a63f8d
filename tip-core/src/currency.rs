//! Currency formatting.
//!
//! [`CurrencyFormatter`] is the seam between the calculation and whatever
//! renders money for the user. [`CurrencyFormat`] is the built-in
//! implementation: a small table of locale conventions (symbol, separators,
//! minor-unit digits) applied with half-even rounding.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_minor_units;

/// Errors raised while selecting a currency format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("unsupported currency locale '{0}'")]
    UnknownLocale(String),
}

/// Turns a numeric amount into display text.
pub trait CurrencyFormatter {
    fn format(
        &self,
        value: Decimal,
    ) -> String;
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale conventions for formatting money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Canonical locale tag, e.g. `en-US`.
    pub locale: &'static str,
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Text placed between number and symbol.
    pub spacing: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
    /// Number of minor-unit digits (2 for cents, 0 for yen).
    pub minor_digits: u32,
}

const NBSP: &str = "\u{a0}";

impl CurrencyFormat {
    /// Locale tags understood by [`CurrencyFormat::for_locale`].
    pub const SUPPORTED_LOCALES: [&'static str; 5] = ["en-US", "en-GB", "de-DE", "fr-FR", "ja-JP"];

    pub fn en_us() -> Self {
        Self {
            locale: "en-US",
            symbol: "$",
            position: SymbolPosition::Prefix,
            spacing: "",
            decimal_separator: '.',
            grouping_separator: Some(','),
            minor_digits: 2,
        }
    }

    pub fn en_gb() -> Self {
        Self {
            locale: "en-GB",
            symbol: "£",
            ..Self::en_us()
        }
    }

    pub fn de_de() -> Self {
        Self {
            locale: "de-DE",
            symbol: "€",
            position: SymbolPosition::Suffix,
            spacing: NBSP,
            decimal_separator: ',',
            grouping_separator: Some('.'),
            minor_digits: 2,
        }
    }

    pub fn fr_fr() -> Self {
        Self {
            locale: "fr-FR",
            grouping_separator: Some('\u{a0}'),
            ..Self::de_de()
        }
    }

    pub fn ja_jp() -> Self {
        Self {
            locale: "ja-JP",
            symbol: "￥",
            minor_digits: 0,
            ..Self::en_us()
        }
    }

    /// Looks up a built-in format by locale tag.
    ///
    /// Matching is case-insensitive and accepts `_` in place of `-`.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::UnknownLocale`] for tags with no built-in format.
    pub fn for_locale(tag: &str) -> Result<Self, CurrencyError> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en-us" => Ok(Self::en_us()),
            "en-gb" => Ok(Self::en_gb()),
            "de-de" => Ok(Self::de_de()),
            "fr-fr" => Ok(Self::fr_fr()),
            "ja-jp" => Ok(Self::ja_jp()),
            _ => Err(CurrencyError::UnknownLocale(tag.to_string())),
        }
    }

    fn group_digits(
        &self,
        digits: &str,
    ) -> String {
        let Some(separator) = self.grouping_separator else {
            return digits.to_string();
        };
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl CurrencyFormatter for CurrencyFormat {
    fn format(
        &self,
        value: Decimal,
    ) -> String {
        let rounded = round_minor_units(value, self.minor_digits);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.*}", self.minor_digits as usize, rounded.abs());

        let (whole, fraction) = match plain.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut number = self.group_digits(whole);
        if let Some(fraction) = fraction {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{}{number}", self.symbol, self.spacing),
            SymbolPosition::Suffix => format!("{sign}{number}{}{}", self.spacing, self.symbol),
        }
    }
}
