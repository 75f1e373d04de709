use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from converting an amount to words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TerbilangError {
    /// Negative amount while [`NegativeStyle::Reject`](super::NegativeStyle::Reject) is set.
    #[error("negative amount {0} cannot be spelled out")]
    NegativeAmount(Decimal),

    /// Amount is not a finite number (NaN, infinity, or outside `Decimal` range).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount needs a magnitude word beyond "triliun" (>= 10^15).
    #[error("amount {0} exceeds the largest spelled magnitude (triliun)")]
    UnsupportedMagnitude(Decimal),
}

/// Errors from parsing a display (`DD/MM/YYYY`) or transport (`YYYY-MM-DD`) date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// Input was empty or whitespace only.
    #[error("no date given")]
    Empty,

    /// Input was the "Invalid Date" sentinel produced by broken date pickers.
    #[error("invalid date sentinel")]
    Sentinel,

    /// Input does not have three separated components.
    #[error("malformed date '{0}'")]
    Shape(String),

    /// A component is not a plain decimal integer.
    #[error("date component '{0}' is not a number")]
    NotANumber(String),

    /// A component is outside its allowed range.
    #[error("{field} {value} out of range")]
    OutOfRange {
        /// "day", "month" or "year".
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// Components are in range but do not name a real day (e.g. 31/02).
    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    NotACalendarDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages() {
        assert_eq!(
            TerbilangError::NegativeAmount(dec!(-5)).to_string(),
            "negative amount -5 cannot be spelled out"
        );
        assert_eq!(
            DateError::OutOfRange { field: "month", value: 13 }.to_string(),
            "month 13 out of range"
        );
        assert_eq!(
            DateError::NotACalendarDate { year: 2024, month: 2, day: 31 }.to_string(),
            "31/02/2024 is not a calendar date"
        );
    }
}
