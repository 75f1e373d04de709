use faktur::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. Negative amounts: "minus" by default, error when rejected ──
    println!("=== Negative Amounts ===");
    println!("  default: {}", terbilang(dec!(-250000)).unwrap());

    let strict = Terbilang::new(
        TerbilangOptions::builder()
            .negative(NegativeStyle::Reject)
            .build(),
    );
    match strict.convert(dec!(-250000)) {
        Ok(words) => println!("  strict: {words}"),
        Err(e) => println!("  strict: {e}"),
    }

    // ── 2. Beyond triliun ──────────────────────────────────────────────
    println!("\n=== Magnitude Ceiling ===");
    match terbilang(Decimal::from(MAX_SPELLED)) {
        Ok(words) => println!("  {words}"),
        Err(e) => println!("  {e}"),
    }

    // ── 3. Non-finite input from raw JSON numbers ──────────────────────
    println!("\n=== Non-finite Input ===");
    for amount in [f64::NAN, f64::INFINITY, 1500.5] {
        match terbilang_f64(amount) {
            Ok(words) => println!("  {amount}: {words}"),
            Err(e) => println!("  {amount}: {e}"),
        }
    }

    // ── 4. Date errors ─────────────────────────────────────────────────
    println!("\n=== Date Errors ===");
    for input in ["31/04/2024", "01/13/2024", "01/01/1899", "1/2"] {
        if let Err(e) = parse_date(input) {
            println!("  {input}: {e}");
        }
    }
}
