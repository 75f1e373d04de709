use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::date::format_date_long;
use super::error::TerbilangError;
use super::rupiah::{format_idr, normalize_in_words};
use super::terbilang::Terbilang;

/// Totals block printed at the foot of invoices, purchase orders and reports.
///
/// ```
/// use faktur::core::*;
/// use rust_decimal_macros::dec;
///
/// let block = DocumentSummary::new(dec!(1500000))
///     .subtotal(dec!(1351351.35))
///     .tax(dec!(148648.65))
///     .render()
///     .unwrap();
/// assert!(block.contains("Terbilang : satu juta lima ratus ribu rupiah"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    total: Decimal,
    subtotal: Option<Decimal>,
    tax: Option<Decimal>,
    outstanding: Option<Decimal>,
    in_words: Option<String>,
    printed_on: Option<NaiveDate>,
    converter: Terbilang,
}

impl DocumentSummary {
    /// Start a block for a document whose grand total is `total`.
    pub fn new(total: Decimal) -> Self {
        Self {
            total,
            subtotal: None,
            tax: None,
            outstanding: None,
            in_words: None,
            printed_on: None,
            converter: Terbilang::default(),
        }
    }

    /// Amount before tax (DPP).
    pub fn subtotal(mut self, amount: Decimal) -> Self {
        self.subtotal = Some(amount);
        self
    }

    /// PPN (VAT) amount.
    pub fn tax(mut self, amount: Decimal) -> Self {
        self.tax = Some(amount);
        self
    }

    /// Remaining unpaid amount; zero is not printed.
    pub fn outstanding(mut self, amount: Decimal) -> Self {
        self.outstanding = Some(amount);
        self
    }

    /// Spelled-out total supplied by the ERP backend. Takes precedence over
    /// the computed terbilang when non-empty.
    pub fn in_words(mut self, text: impl Into<String>) -> Self {
        self.in_words = Some(text.into());
        self
    }

    /// Print date shown in the closing "Dicetak oleh sistem" line.
    pub fn printed_on(mut self, date: NaiveDate) -> Self {
        self.printed_on = Some(date);
        self
    }

    /// Converter used when no ERP text is supplied (default options otherwise).
    pub fn converter(mut self, converter: Terbilang) -> Self {
        self.converter = converter;
        self
    }

    /// The terbilang line: normalized ERP text if present, otherwise computed.
    ///
    /// A zero total without ERP text has no terbilang line.
    pub fn terbilang(&self) -> Result<Option<String>, TerbilangError> {
        let supplied = self
            .in_words
            .as_deref()
            .map(normalize_in_words)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        match supplied {
            Some(text) => Ok(Some(text)),
            None if self.total.is_zero() => Ok(None),
            None => self.converter.convert(self.total).map(Some),
        }
    }

    /// Render the block as label/value lines.
    pub fn render(&self) -> Result<String, TerbilangError> {
        let mut rows: Vec<(&str, String)> = Vec::new();
        if let Some(subtotal) = self.subtotal {
            rows.push(("Subtotal", format_idr(subtotal)));
        }
        if let Some(tax) = self.tax {
            rows.push(("PPN", format_idr(tax)));
        }
        rows.push(("Total", format_idr(self.total)));
        if let Some(outstanding) = self.outstanding.filter(|o| !o.is_zero()) {
            rows.push(("Sisa Tagihan", format_idr(outstanding)));
        }
        if let Some(words) = self.terbilang()? {
            rows.push(("Terbilang", words));
        }

        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let mut out = String::new();
        for (label, value) in &rows {
            out.push_str(&format!("{label:<width$} : {value}\n"));
        }
        if let Some(date) = self.printed_on {
            out.push_str(&format!("Dicetak oleh sistem - {}\n", format_date_long(date)));
        }
        Ok(out)
    }
}
