//! Lightning addresses (LUD-16)
//!
//! A Lightning address looks like an email address, `user@domain`, and
//! resolves to `https://domain/.well-known/lnurlp/user`. This module only
//! validates and formats; it never contacts the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TipError};

/// URI scheme understood by external wallet apps
pub const LIGHTNING_SCHEME: &str = "lightning:";

/// Validated Lightning address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LightningAddress {
    user: String,
    domain: String,
}

impl LightningAddress {
    /// Parse an address, accepting an optional `lightning:` prefix
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim().to_lowercase();
        let raw = trimmed.strip_prefix(LIGHTNING_SCHEME).unwrap_or(&trimmed);

        let (user, domain) = raw
            .split_once('@')
            .ok_or_else(|| TipError::InvalidAddress(format!("missing '@' in {input:?}")))?;

        if user.is_empty() || !user.chars().all(is_user_char) {
            return Err(TipError::InvalidAddress(format!(
                "bad user part in {input:?}"
            )));
        }

        if !domain.contains('.')
            || domain.split('.').any(|label| label.is_empty())
            || !domain.chars().all(is_domain_char)
        {
            return Err(TipError::InvalidAddress(format!(
                "bad domain in {input:?}"
            )));
        }

        Ok(Self {
            user: user.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// `lightning:` URI for handing off to an external wallet
    pub fn to_uri(&self) -> String {
        format!("{}{}", LIGHTNING_SCHEME, self)
    }

    /// LNURL-pay endpoint the address resolves to
    pub fn lnurlp_url(&self) -> String {
        format!("https://{}/.well-known/lnurlp/{}", self.domain, self.user)
    }
}

fn is_user_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.' | '+')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.')
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.domain)
    }
}

impl std::str::FromStr for LightningAddress {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LightningAddress {
    type Error = TipError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<LightningAddress> for String {
    fn from(address: LightningAddress) -> Self {
        address.to_string()
    }
}
