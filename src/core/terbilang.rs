//! Terbilang: Indonesian spelled-out amounts for printed documents.
//!
//! Amounts are rounded to whole Rupiah, decomposed by magnitude
//! (ribu, juta, milyar, triliun) and terminated by the currency unit word.
//!
//! ```
//! use faktur::terbilang;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     terbilang(dec!(1500000)).unwrap(),
//!     "satu juta lima ratus ribu rupiah"
//! );
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::TerbilangError;

/// Words for 0..=11. Slot 0 is never emitted by the recursion.
const BASE: [&str; 12] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan", "sepuluh",
    "sebelas",
];

const ZERO_WORD: &str = "nol";
const MINUS_WORD: &str = "minus";

/// First amount that would need a word beyond "triliun".
pub const MAX_SPELLED: u64 = 1_000_000_000_000_000;

/// How negative amounts are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    /// Spell the magnitude prefixed by "minus" (credit notes, sales returns).
    #[default]
    Minus,
    /// Fail with [`TerbilangError::NegativeAmount`].
    Reject,
}

/// Tie-break used when rounding fractional amounts to whole Rupiah.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 2.5 → 3, -2.5 → -3.
    #[default]
    HalfUp,
    /// 2.5 → 2, 3.5 → 4 (banker's rounding).
    HalfEven,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Options for [`Terbilang`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerbilangOptions {
    /// Currency unit appended after the words (default "rupiah").
    /// An empty unit appends nothing.
    pub unit: String,
    /// Negative amount handling.
    pub negative: NegativeStyle,
    /// Rounding tie-break.
    pub rounding: Rounding,
}

impl Default for TerbilangOptions {
    fn default() -> Self {
        Self {
            unit: "rupiah".into(),
            negative: NegativeStyle::default(),
            rounding: Rounding::default(),
        }
    }
}

impl TerbilangOptions {
    /// Start a builder from the defaults.
    pub fn builder() -> TerbilangOptionsBuilder {
        TerbilangOptionsBuilder {
            options: Self::default(),
        }
    }
}

/// Builder for [`TerbilangOptions`].
///
/// # Example
///
/// ```
/// use faktur::{NegativeStyle, Rounding, TerbilangOptions};
///
/// let options = TerbilangOptions::builder()
///     .negative(NegativeStyle::Reject)
///     .rounding(Rounding::HalfEven)
///     .build();
/// assert_eq!(options.unit, "rupiah");
/// ```
#[derive(Debug, Clone)]
pub struct TerbilangOptionsBuilder {
    options: TerbilangOptions,
}

impl TerbilangOptionsBuilder {
    /// Set the trailing currency unit word.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.options.unit = unit.into();
        self
    }

    /// Set negative amount handling.
    pub fn negative(mut self, style: NegativeStyle) -> Self {
        self.options.negative = style;
        self
    }

    /// Set the rounding tie-break.
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.options.rounding = rounding;
        self
    }

    /// Build the options.
    pub fn build(self) -> TerbilangOptions {
        self.options
    }
}

/// Configured amount-to-words converter.
#[derive(Debug, Clone, Default)]
pub struct Terbilang {
    options: TerbilangOptions,
}

impl Terbilang {
    /// Create a converter with the given options.
    pub fn new(options: TerbilangOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &TerbilangOptions {
        &self.options
    }

    /// Convert an amount to words followed by the currency unit.
    pub fn convert(&self, amount: Decimal) -> Result<String, TerbilangError> {
        let result = self.spell(amount);
        match &result {
            Ok(words) => tracing::trace!(%amount, %words, "terbilang"),
            Err(err) => tracing::debug!(%amount, error = %err, "terbilang conversion failed"),
        }
        result
    }

    /// Convert a floating-point amount (e.g. a raw JSON number).
    ///
    /// The exact binary value is kept, so 2.4999999999999996 spells as 2.
    pub fn convert_f64(&self, amount: f64) -> Result<String, TerbilangError> {
        let decimal = Decimal::from_f64_retain(amount).ok_or_else(|| {
            let err = TerbilangError::InvalidAmount(amount.to_string());
            tracing::debug!(amount, error = %err, "terbilang conversion failed");
            err
        })?;
        self.convert(decimal)
    }

    fn spell(&self, amount: Decimal) -> Result<String, TerbilangError> {
        let rounded = amount.round_dp_with_strategy(0, self.options.rounding.strategy());
        let negative = rounded < Decimal::ZERO;
        if negative && self.options.negative == NegativeStyle::Reject {
            return Err(TerbilangError::NegativeAmount(amount));
        }

        let magnitude = rounded.abs();
        if magnitude >= Decimal::from(MAX_SPELLED) {
            return Err(TerbilangError::UnsupportedMagnitude(amount));
        }
        let n = magnitude
            .to_u64()
            .ok_or_else(|| TerbilangError::InvalidAmount(amount.to_string()))?;

        let mut out = String::new();
        if negative {
            out.push_str(MINUS_WORD);
            out.push(' ');
        }
        out.push_str(&number_to_words(n)?);

        let unit = self.options.unit.trim();
        if !unit.is_empty() {
            out.push(' ');
            out.push_str(unit);
        }
        Ok(out)
    }
}

/// Spell a non-negative integer in Indonesian, without currency unit.
///
/// `0` is "nol". Fails for `n >= 10^15`.
pub fn number_to_words(n: u64) -> Result<String, TerbilangError> {
    if n >= MAX_SPELLED {
        return Err(TerbilangError::UnsupportedMagnitude(Decimal::from(n)));
    }
    if n == 0 {
        return Ok(ZERO_WORD.into());
    }
    Ok(collapse_whitespace(&words(n)))
}

/// Spell `amount` with the default options: unit "rupiah", half-up rounding,
/// "minus" prefix for negatives.
pub fn terbilang(amount: Decimal) -> Result<String, TerbilangError> {
    Terbilang::default().convert(amount)
}

/// [`terbilang`] for a floating-point amount. NaN and infinities fail.
pub fn terbilang_f64(amount: f64) -> Result<String, TerbilangError> {
    Terbilang::default().convert_f64(amount)
}

fn words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=11 => BASE[n as usize].to_string(),
        12..=19 => format!("{} belas", BASE[(n - 10) as usize]),
        20..=99 => join(format!("{} puluh", BASE[(n / 10) as usize]), n % 10),
        100..=199 => join("seratus".to_string(), n % 100),
        200..=999 => join(format!("{} ratus", BASE[(n / 100) as usize]), n % 100),
        1_000..=1_999 => join("seribu".to_string(), n % 1_000),
        2_000..=999_999 => scale(n, 1_000, "ribu"),
        1_000_000..=999_999_999 => scale(n, 1_000_000, "juta"),
        1_000_000_000..=999_999_999_999 => scale(n, 1_000_000_000, "milyar"),
        _ => scale(n, 1_000_000_000_000, "triliun"),
    }
}

fn scale(n: u64, unit: u64, word: &str) -> String {
    join(format!("{} {word}", words(n / unit)), n % unit)
}

fn join(head: String, rest: u64) -> String {
    if rest > 0 {
        format!("{head} {}", words(rest))
    } else {
        head
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
