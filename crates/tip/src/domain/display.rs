//! Currency display for tip amounts
//!
//! Renders an amount either in sats or in dollars. Fiat values are computed
//! in integers from a rate held to 10^-8 dollars and rounded half-to-even at
//! the cent.

use serde::{Deserialize, Serialize};

use super::amount::{SATS_PER_BTC, Sats};

/// Which unit amounts are shown in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyDisplayMode {
    /// Satoshis
    #[default]
    Native,
    /// US dollars at the current exchange rate
    Fiat,
}

impl CurrencyDisplayMode {
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyDisplayMode::Native => "native",
            CurrencyDisplayMode::Fiat => "fiat",
        }
    }

    /// The other mode, for a settings toggle
    pub fn toggled(self) -> Self {
        match self {
            CurrencyDisplayMode::Native => CurrencyDisplayMode::Fiat,
            CurrencyDisplayMode::Fiat => CurrencyDisplayMode::Native,
        }
    }
}

/// Micro-cents (10^-8 dollars) in one cent
pub const MICRO_CENTS_PER_CENT: u64 = 1_000_000;

/// Fiat price of one whole coin, held in micro-cents.
///
/// Always positive. Constructors return `None` for anything else. Only the
/// final converted amount is rounded to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ExchangeRate {
    micro_cents_per_btc: u64,
}

impl ExchangeRate {
    /// Rate from a dollar price, kept to 10^-8 dollars
    pub fn from_usd(usd_per_btc: f64) -> Option<Self> {
        if !usd_per_btc.is_finite() || usd_per_btc <= 0.0 {
            return None;
        }
        let micro_cents = (usd_per_btc * 1e8).round();
        if micro_cents < 1.0 || micro_cents >= u64::MAX as f64 {
            return None;
        }
        Self::from_micro_cents(micro_cents as u64)
    }

    /// Rate from a price expressed in whole cents
    pub fn from_cents(cents_per_btc: u64) -> Option<Self> {
        cents_per_btc
            .checked_mul(MICRO_CENTS_PER_CENT)
            .and_then(Self::from_micro_cents)
    }

    /// Rate from a price expressed in micro-cents
    pub fn from_micro_cents(micro_cents_per_btc: u64) -> Option<Self> {
        if micro_cents_per_btc == 0 {
            None
        } else {
            Some(Self {
                micro_cents_per_btc,
            })
        }
    }

    pub fn micro_cents_per_btc(&self) -> u64 {
        self.micro_cents_per_btc
    }

    /// Convert sats to cents, rounding half-to-even
    pub fn sats_to_cents(&self, amount: Sats) -> u128 {
        let numerator = amount as u128 * self.micro_cents_per_btc as u128;
        let denominator = SATS_PER_BTC as u128 * MICRO_CENTS_PER_CENT as u128;
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;

        match (remainder * 2).cmp(&denominator) {
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
            _ => quotient,
        }
    }
}

impl TryFrom<u64> for ExchangeRate {
    type Error = &'static str;

    fn try_from(micro_cents_per_btc: u64) -> Result<Self, Self::Error> {
        Self::from_micro_cents(micro_cents_per_btc).ok_or("exchange rate must be positive")
    }
}

impl From<ExchangeRate> for u64 {
    fn from(rate: ExchangeRate) -> Self {
        rate.micro_cents_per_btc
    }
}

/// Render an amount for display.
///
/// Falls back to sats whenever the mode is native or no rate is known.
pub fn format_for_display(
    amount: Sats,
    mode: CurrencyDisplayMode,
    rate: Option<ExchangeRate>,
) -> String {
    match (mode, rate) {
        (CurrencyDisplayMode::Fiat, Some(rate)) => format_cents(rate.sats_to_cents(amount)),
        _ => format!("{} sats", amount),
    }
}

fn format_cents(cents: u128) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
