//! Rupiah amounts in `id-ID` notation and cleanup of ERP "in words" text.
//!
//! `id-ID` groups digits with `.` and separates decimals with `,`
//! (Rp 1.500.000 / 12,5).

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a number the way `toLocaleString('id-ID')` does: at most three
/// fraction digits, trailing zeros dropped.
pub fn format_number_id(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded < Decimal::ZERO;
    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Format an amount as "Rp 1.500.000".
pub fn format_idr(amount: Decimal) -> String {
    format!("Rp {}", format_number_id(amount))
}

/// Normalize the `in_words` text the ERP backend attaches to documents.
///
/// "IDR Satu Juta Saja." becomes "Rp Satu Juta rupiah": a leading `IDR`
/// token turns into `Rp` and a trailing `saja` (optionally with a period)
/// into `rupiah`. Matching is case-insensitive and anchored at the ends of
/// `raw` as given; surrounding whitespace is not trimmed.
pub fn normalize_in_words(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    match strip_prefix_word(raw, "IDR") {
        Some(rest) => {
            out.push_str("Rp ");
            out.push_str(rest);
        }
        None => out.push_str(raw),
    }

    if let Some(head) = strip_suffix_word(&out, "saja") {
        let mut replaced = head.to_string();
        replaced.push_str(" rupiah");
        return replaced;
    }
    out
}

/// `text` without a leading `word` followed by whitespace.
fn strip_prefix_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let head = text.get(..word.len())?;
    let rest = &text[word.len()..];
    if head.eq_ignore_ascii_case(word) && rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// `text` without a trailing whitespace-separated `word` (optionally followed
/// by a period), with the remaining whitespace trimmed.
fn strip_suffix_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let body = text.strip_suffix('.').unwrap_or(text);
    let split = body.len().checked_sub(word.len())?;
    let tail = body.get(split..)?;
    let head = &body[..split];
    if tail.eq_ignore_ascii_case(word) && head.ends_with(char::is_whitespace) {
        Some(head.trim_end())
    } else {
        None
    }
}
