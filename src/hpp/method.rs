//! Signing method selection.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::HppError;

/// Algorithm family determining canonicalization, digest, and key handling.
///
/// The method is fixed when a session is constructed. To sign the same data
/// under a different method, derive a new session with
/// [`PaymentSession::with_method`](crate::PaymentSession::with_method)
/// rather than mutating an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningMethod {
    /// HMAC-SHA1 over an ordered field concatenation, keyed with the
    /// secret's raw bytes.
    #[default]
    Sha1,
    /// HMAC-SHA256 over a sorted escaped key:value joining, keyed with the
    /// hex-decoded secret.
    Sha256,
}

impl SigningMethod {
    /// Returns the configuration name of this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningMethod {
    type Err = HppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sha1") {
            Ok(Self::Sha1)
        } else if s.eq_ignore_ascii_case("sha256") {
            Ok(Self::Sha256)
        } else {
            Err(HppError::UnsupportedMethod(s.to_owned()))
        }
    }
}
