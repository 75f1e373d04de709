//! Terbilang, date bridge and Rupiah formatting.
//!
//! Everything here is a pure function of its input; nothing performs I/O
//! or holds shared state.

mod date;
mod error;
mod rupiah;
mod summary;
mod terbilang;

pub use date::*;
pub use error::*;
pub use rupiah::*;
pub use summary::*;
pub use terbilang::*;
