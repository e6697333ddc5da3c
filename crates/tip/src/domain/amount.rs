//! Tip amounts in satoshis

/// Amount in satoshis
pub type Sats = u64;

/// Satoshis per whole coin
pub const SATS_PER_BTC: Sats = 100_000_000;

/// Whether an amount may be handed off as a tip.
///
/// Zero means nothing is selected. No upper bound is applied.
pub fn is_submittable(amount: Sats) -> bool {
    amount > 0
}

/// Parse a digits-only entry into sats.
///
/// Anything that is not a plain run of ASCII digits, or that overflows,
/// resolves to zero.
pub fn parse_sats(text: &str) -> Sats {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    text.parse().unwrap_or(0)
}
