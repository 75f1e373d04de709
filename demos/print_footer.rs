use chrono::NaiveDate;
use faktur::core::*;
use rust_decimal_macros::dec;

fn main() {
    // Sales invoice: DPP 25.000.000 + PPN 11%
    let subtotal = dec!(25000000);
    let tax = subtotal * dec!(0.11);
    let total = subtotal + tax;

    let footer = DocumentSummary::new(total)
        .subtotal(subtotal)
        .tax(tax)
        .printed_on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
        .render();

    match footer {
        Ok(text) => print!("{text}"),
        Err(e) => eprintln!("cannot print footer: {e}"),
    }

    // Same invoice with the backend's own in_words field
    println!();
    let footer = DocumentSummary::new(total)
        .in_words("IDR Dua Puluh Tujuh Juta Tujuh Ratus Lima Puluh Ribu Saja.")
        .render()
        .unwrap();
    print!("{footer}");
}
