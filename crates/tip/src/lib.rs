//! Tip - Lightning tips for ride drivers
//!
//! This crate holds the logic behind the post-ride tip screen:
//! - Resolve the tip amount from a preset or a custom entry
//! - Render amounts in sats or dollars at the current exchange rate
//! - Gate confirmation on a non-zero amount
//! - Validate the driver's Lightning address for copy or wallet hand-off
//!
//! Payment execution is left to the caller, which receives the confirmed
//! amount through the `on_tip_sent` callback of [`TipFlow`].
//!
//! # Example
//!
//! ```
//! use tip::{CurrencyDisplayMode, ExchangeRate, TipFlow, TipSettings};
//!
//! let settings = TipSettings {
//!     display_mode: CurrencyDisplayMode::Fiat,
//!     ..Default::default()
//! };
//! let mut flow = TipFlow::new(&settings).exchange_rate(ExchangeRate::from_usd(60_000.0));
//!
//! flow.select_preset(0);
//! assert_eq!(flow.display_amount(), "$0.60");
//! assert_eq!(flow.confirm().unwrap(), 1000);
//! ```

pub mod domain;
pub mod error;
pub mod flow;
pub mod storage;

// Re-exports for convenient access
pub use domain::{
    CurrencyDisplayMode, ExchangeRate, LightningAddress, SATS_PER_BTC, Sats, SelectionState,
    TipSelection, format_for_display, is_submittable, parse_sats, resolve_effective_amount,
};
pub use error::{Result, TipError};
pub use flow::TipFlow;
pub use storage::{DEFAULT_PRESETS, TipSettings};
