use chrono::NaiveDate;
use faktur::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// --- Terbilang ---

#[test]
fn terbilang_reference_values() {
    let cases: &[(u64, &str)] = &[
        (0, "nol rupiah"),
        (11, "sebelas rupiah"),
        (12, "dua belas rupiah"),
        (100, "seratus rupiah"),
        (1000, "seribu rupiah"),
        (1_500_000, "satu juta lima ratus ribu rupiah"),
    ];
    for (n, expected) in cases {
        assert_eq!(terbilang(Decimal::from(*n)).unwrap(), *expected, "n = {n}");
    }
}

#[test]
fn terbilang_invoice_total() {
    // typical invoice grand total incl. PPN 11%
    assert_eq!(
        terbilang(dec!(27750000)).unwrap(),
        "dua puluh tujuh juta tujuh ratus lima puluh ribu rupiah"
    );
    assert_eq!(
        terbilang(dec!(1234567890)).unwrap(),
        "satu milyar dua ratus tiga puluh empat juta \
         lima ratus enam puluh tujuh ribu delapan ratus sembilan puluh rupiah"
    );
}

#[test]
fn terbilang_irregular_words_inside_larger_numbers() {
    assert_eq!(number_to_words(100_100).unwrap(), "seratus ribu seratus");
    assert_eq!(number_to_words(1_001_000).unwrap(), "satu juta seribu");
    assert_eq!(number_to_words(111_111).unwrap(), "seratus sebelas ribu seratus sebelas");
    assert_eq!(number_to_words(1_000_000_000_000).unwrap(), "satu triliun");
}

#[test]
fn terbilang_settlement_amount_with_cents() {
    assert_eq!(terbilang(dec!(999.50)).unwrap(), "seribu rupiah");
    assert_eq!(terbilang_f64(1_500_000.4).unwrap(), "satu juta lima ratus ribu rupiah");
}

#[test]
fn terbilang_credit_note() {
    assert_eq!(terbilang(dec!(-250000)).unwrap(), "minus dua ratus lima puluh ribu rupiah");
}

#[test]
fn terbilang_ceiling() {
    let err = terbilang(dec!(1000000000000000)).unwrap_err();
    assert!(matches!(err, TerbilangError::UnsupportedMagnitude(_)));
    assert!(err.to_string().contains("triliun"));
}

#[test]
fn terbilang_options_from_json() {
    let options: TerbilangOptions =
        serde_json::from_str(r#"{"negative": "reject", "rounding": "half_even"}"#).unwrap();
    assert_eq!(options.unit, "rupiah");
    assert_eq!(options.negative, NegativeStyle::Reject);
    assert_eq!(options.rounding, Rounding::HalfEven);

    let conv = Terbilang::new(options);
    assert_eq!(conv.convert(dec!(0.5)).unwrap(), "nol rupiah");
    assert!(matches!(conv.convert(dec!(-1)), Err(TerbilangError::NegativeAmount(_))));
}

#[test]
fn terbilang_options_serialize() {
    let json = serde_json::to_value(TerbilangOptions::default()).unwrap();
    assert_eq!(json["unit"], "rupiah");
    assert_eq!(json["negative"], "minus");
    assert_eq!(json["rounding"], "half_up");
}

// --- Date bridge ---

#[test]
fn display_to_transport() {
    assert_eq!(parse_date("01/01/1900").unwrap(), "1900-01-01");
    assert_eq!(parse_date("31/12/2100").unwrap(), "2100-12-31");
    assert_eq!(parse_date("17/08/1945").unwrap(), "1945-08-17");
}

#[test]
fn invalid_calendar_date_is_not_clamped() {
    assert_eq!(
        parse_date("31/02/2024"),
        Err(DateError::NotACalendarDate { year: 2024, month: 2, day: 31 })
    );
    assert_eq!(parse_date("31/02/2024").unwrap_or_default(), "");
}

#[test]
fn transport_input_rejected_by_display_parser() {
    assert!(matches!(parse_date("2024-02-29"), Err(DateError::Shape(_))));
    assert_eq!(parse_transport_date("2024-02-29").unwrap(), date(2024, 2, 29));
}

#[test]
fn display_round_trip_through_transport() {
    for d in [date(1900, 1, 1), date(2000, 2, 29), date(2024, 9, 9), date(2100, 12, 31)] {
        let display = format_date(d);
        let transport = parse_date(&display).unwrap();
        assert_eq!(transport, format_transport_date(d));
        assert_eq!(transport_to_display(&transport).unwrap(), display);
    }
}

#[test]
fn report_and_footer_dates() {
    assert_eq!(format_report_date("2024-08-17"), "17 Agu 2024");
    assert_eq!(format_report_date("  "), "-");
    assert_eq!(format_report_date("n/a"), "n/a");
    assert_eq!(format_date_long(date(2026, 10, 19)), "19 Oktober 2026");
}

// --- Rupiah ---

#[test]
fn rupiah_amounts() {
    assert_eq!(format_idr(dec!(27750000)), "Rp 27.750.000");
    assert_eq!(format_idr(dec!(12500.75)), "Rp 12.500,75");
    assert_eq!(format_number_id(dec!(-1234567)), "-1.234.567");
}

#[test]
fn erp_in_words() {
    assert_eq!(
        normalize_in_words("IDR Dua Puluh Tujuh Juta Tujuh Ratus Lima Puluh Ribu Saja."),
        "Rp Dua Puluh Tujuh Juta Tujuh Ratus Lima Puluh Ribu rupiah"
    );
}
