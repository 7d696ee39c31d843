//! Field names and signature field sets for the HPP protocol.
//!
//! The SHA1 scheme signs fixed, pre-declared field lists whose order must
//! match the gateway documentation exactly. The SHA256 scheme derives its
//! request field set dynamically from the data mapping minus the exclusion
//! rule in [`is_excluded_from_signing`].

/// Field receiving the computed signature.
pub const MERCHANT_SIG: &str = "merchantSig";

/// Hosted-page skin identifier, defaulted from configuration when absent.
pub const SKIN_CODE: &str = "skinCode";

/// Merchant account identifier, defaulted from configuration when absent.
pub const MERCHANT_ACCOUNT: &str = "merchantAccount";

/// Payment amount in minor units after normalization.
pub const PAYMENT_AMOUNT: &str = "paymentAmount";

/// Latest shipping date, a calendar date after normalization.
pub const SHIP_BEFORE_DATE: &str = "shipBeforeDate";

/// Expiry of the payment session, a timestamp after normalization.
pub const SESSION_VALIDITY: &str = "sessionValidity";

/// Request signature fields for the SHA1 method, in gateway-documented
/// order. `billingAddressType` appears twice; the duplication is part of
/// the documented order and is preserved verbatim.
pub const SHA1_SIGNATURE_FIELDS: &[&str] = &[
    "paymentAmount",
    "currencyCode",
    "shipBeforeDate",
    "merchantReference",
    "skinCode",
    "merchantAccount",
    "sessionValidity",
    "shopperEmail",
    "shopperReference",
    "allowedMethods",
    "blockedMethods",
    "shopperStatement",
    "billingAddressType",
    "recurringContract",
    "billingAddressType",
    "deliveryAddressType",
];

/// Fields that must be present before a request can be signed.
pub const REQUIRED_FIELDS: &[&str] = &[
    "merchantReference",
    "paymentAmount",
    "currencyCode",
    "shipBeforeDate",
    "skinCode",
    "merchantAccount",
    "sessionValidity",
];

/// Response signature fields for the SHA1 method, in gateway-documented
/// order.
pub const SHA1_RESULT_SIGNATURE_FIELDS: &[&str] =
    &["authResult", "pspReference", "merchantReference", "skinCode", "merchantReturnData"];

/// Response signature fields for the SHA256 method. Only the listed fields
/// actually present in a result participate in its signature.
pub const SHA256_RESULT_SIGNATURE_FIELDS: &[&str] = &[
    "authResult",
    "merchantReference",
    "merchantReturnData",
    "paymentMethod",
    "pspReference",
    "shopperLocale",
    "skinCode",
];

/// Fields that must be present before a result can be verified.
pub const RESULT_REQUIRED_FIELDS: &[&str] =
    &["authResult", "merchantReference", "skinCode", "merchantSig", "shopperLocale"];

/// Returns true when `name` never participates in SHA256 request signing.
///
/// Covers the signature fields themselves and the `ignore.` namespace the
/// gateway reserves for merchant-private round-trip data.
#[must_use]
pub fn is_excluded_from_signing(name: &str) -> bool {
    name == "sig" || name == MERCHANT_SIG || name.starts_with("ignore.")
}
