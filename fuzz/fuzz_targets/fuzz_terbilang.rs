#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: (i64, u32)| {
    let (mantissa, scale) = data;
    let Ok(amount) = Decimal::try_from_i128_with_scale(mantissa as i128, scale % 29) else {
        return;
    };
    if let Ok(words) = faktur::terbilang(amount) {
        assert!(!words.contains("  "));
        assert!(words.ends_with("rupiah"));
    }
    let _ = faktur::format_idr(amount);
});
