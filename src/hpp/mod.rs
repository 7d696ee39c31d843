//! The HPP signing engine.
//!
//! Signing a request walks four steps: native values are normalized into
//! gateway string encodings ([`normalize`]), the canonical plaintext is
//! built under the configured method ([`canonical`]), the plaintext is
//! HMAC-signed and base64-encoded ([`mac`]), and the signature lands in the
//! data mapping under `merchantSig` ([`PaymentSession::sign`]). Verifying a
//! result runs the same pipeline over the result field set and compares
//! against the supplied signature ([`PaymentResult::is_valid`]).

pub mod canonical;
pub mod fields;
pub mod mac;
mod method;
pub mod normalize;
pub mod redirect;
mod session;

pub use method::SigningMethod;
pub use normalize::{FieldValue, NormalizedData, RequestData};
pub use session::{PaymentResult, PaymentSession};

#[cfg(test)]
mod tests;
