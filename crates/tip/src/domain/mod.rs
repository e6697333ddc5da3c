//! Tip domain types
//!
//! Pure amount resolution and display. Nothing here performs I/O.

pub mod address;
pub mod amount;
pub mod display;
pub mod selection;

pub use address::LightningAddress;
pub use amount::{SATS_PER_BTC, Sats, is_submittable, parse_sats};
pub use display::{CurrencyDisplayMode, ExchangeRate, format_for_display};
pub use selection::{SelectionState, TipSelection, resolve_effective_amount};
