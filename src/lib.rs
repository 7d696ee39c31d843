//! Request signing and result verification for Adyen Hosted Payment Pages.
//!
//! Merchants redirect shoppers to an Adyen-hosted payment page and receive
//! the outcome as a signed result callback. Both directions are
//! authenticated with an HMAC over a canonical rendering of the session
//! fields, keyed with a shared merchant secret. This crate implements that
//! signing scheme: field normalization, canonicalization under the SHA1 and
//! SHA256 method families, signature computation, and result verification.
//!
//! The crate performs no I/O. Transport, form rendering, and configuration
//! loading belong to the caller; sessions consume an already-loaded
//! [`HppConfig`] and hand back a signed field mapping.
//!
//! # Signing a payment request
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use adyen_hpp::{FieldValue, HppConfig, PaymentSession, SigningMethod};
//!
//! # fn main() -> adyen_hpp::Result<()> {
//! let config = HppConfig::new(
//!     "TestMerchant",
//!     "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48",
//!     SigningMethod::Sha256,
//! );
//!
//! let data: BTreeMap<String, FieldValue> = [
//!     ("merchantReference", "SKINTEST-1435226439255"),
//!     ("paymentAmount", "199"),
//!     ("currencyCode", "EUR"),
//!     ("shipBeforeDate", "2015-07-01"),
//!     ("skinCode", "X7hsNDWp"),
//!     ("sessionValidity", "2015-06-25T10:31:06Z"),
//!     ("shopperLocale", "en_GB"),
//! ]
//! .into_iter()
//! .map(|(name, value)| (name.to_owned(), FieldValue::from(value)))
//! .collect();
//!
//! let mut session = PaymentSession::new(data, &config)?;
//! let signature = session.sign()?;
//! assert_eq!(signature, "GJ1asjR5VmkvihDJxCd8yE2DGYOKwWwJCBiV3R51NFg=");
//!
//! let url = session.redirect_url(&config)?;
//! assert_eq!(url.host_str(), Some("test.adyen.com"));
//! # Ok(())
//! # }
//! ```
//!
//! # Verifying a result callback
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use adyen_hpp::{HppConfig, PaymentResult, SigningMethod};
//!
//! # fn main() -> adyen_hpp::Result<()> {
//! let config = HppConfig::new(
//!     "TestMerchant",
//!     "2AFC1353849821D10CCF70A453CDC68FF54B71E099B916A6A30A52CECCCE8FF7",
//!     SigningMethod::Sha256,
//! );
//!
//! let data: BTreeMap<String, String> = [
//!     ("authResult", "CANCELLED"),
//!     ("merchantReference", "ab6bbd6d-dfb6-45b2-86f7-31b0b20d898a"),
//!     ("merchantSig", "JmwOcrYh4H2W7mvSRUxSBcBROBfBcCLK/EhMGXboM78="),
//!     ("shopperLocale", "en"),
//!     ("skinCode", "W7WasXf0"),
//! ]
//! .into_iter()
//! .map(|(name, value)| (name.to_owned(), value.to_owned()))
//! .collect();
//!
//! let result = PaymentResult::new(data, &config)?;
//! assert!(result.is_valid()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Module organization
//!
//! - [`hpp`]: the signing engine (normalization, canonicalization, HMAC,
//!   sessions)
//! - [`config`]: gateway configuration consumed at session construction
//! - [`error`]: error types; verification mismatch is a value, not an error

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod hpp;

pub use config::{Environment, HppConfig};
pub use error::{HppError, Result};
pub use hpp::{FieldValue, PaymentResult, PaymentSession, SigningMethod};
