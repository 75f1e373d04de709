#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine, panics are bugs.
        if let Ok(transport) = faktur::parse_date(s) {
            assert!(faktur::parse_transport_date(&transport).is_ok());
        }
        let _ = faktur::format_report_date(s);
        let _ = faktur::normalize_in_words(s);
    }
});
