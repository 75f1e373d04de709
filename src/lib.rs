//! # faktur
//!
//! Formatting core for printed Indonesian ERP documents (sales invoices,
//! delivery notes, purchase orders, financial reports):
//!
//! - **terbilang**: amounts spelled out in Indonesian, ending in "rupiah"
//! - **date bridge**: `DD/MM/YYYY` display form to and from the
//!   `YYYY-MM-DD` transport form used by the ERP API
//! - **Rupiah amounts** in `id-ID` notation and cleanup of ERP "in words" text
//!
//! Amounts are [`rust_decimal::Decimal`]; floating point is accepted only at
//! the [`terbilang_f64`] boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use faktur::core::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(terbilang(dec!(1500000)).unwrap(), "satu juta lima ratus ribu rupiah");
//! assert_eq!(format_idr(dec!(1500000)), "Rp 1.500.000");
//!
//! let due = parse_display_date("29/02/2024").unwrap();
//! assert_eq!(due, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! assert_eq!(parse_date("29/02/2024").unwrap(), "2024-02-29");
//! assert!(parse_date("29/02/2023").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Terbilang, date bridge, Rupiah formatting, summary block |
//! | `all` | Everything |
//!
//! ## Logging
//!
//! Rejected dates and failed conversions are reported as `tracing` events at
//! `debug` level. Install a subscriber in the application to see them.

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
