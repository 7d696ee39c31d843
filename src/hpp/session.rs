//! Signing sessions and result verification.

use std::collections::BTreeMap;

use constant_time_eq::constant_time_eq;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::HppConfig,
    error::{HppError, Result},
    hpp::{
        canonical, fields, mac,
        normalize::{self, FieldValue, NormalizedData, RequestData},
        redirect, SigningMethod,
    },
};

/// A payment request being prepared for the hosted payment page.
///
/// Construction injects configured defaults and normalizes native values
/// into gateway string encodings; [`sign`](Self::sign) then computes
/// `merchantSig` over the method's field set and stores it in the mapping.
///
/// The signing method is fixed at construction. Use
/// [`with_method`](Self::with_method) to derive a session that signs under
/// a different method; a signature already stored in the data stays as it
/// is until [`sign`](Self::sign) is called again.
///
/// A session serves one payment flow and is not reused across unrelated
/// requests.
#[derive(Debug, Clone)]
pub struct PaymentSession {
    data: NormalizedData,
    method: SigningMethod,
    secret: String,
}

impl PaymentSession {
    /// Creates a session from request data and gateway configuration.
    ///
    /// Absent `skinCode` and `merchantAccount` entries are populated from
    /// the configuration exactly once, before normalization runs.
    ///
    /// # Errors
    ///
    /// Returns [`HppError::MissingConfiguration`] when the configured
    /// secret or account identifier is empty, and
    /// [`HppError::InvalidAmount`] when `paymentAmount` fails to normalize.
    pub fn new(mut data: RequestData, config: &HppConfig) -> Result<Self> {
        config.validate()?;

        if !data.contains_key(fields::SKIN_CODE) {
            if let Some(skin) = &config.skin_code {
                data.insert(fields::SKIN_CODE.to_owned(), FieldValue::from(skin.as_str()));
            }
        }
        if !data.contains_key(fields::MERCHANT_ACCOUNT) {
            data.insert(
                fields::MERCHANT_ACCOUNT.to_owned(),
                FieldValue::from(config.merchant_account.as_str()),
            );
        }

        Ok(Self {
            data: normalize::normalize(data)?,
            method: config.signing_method,
            secret: config.merchant_secret.clone(),
        })
    }

    /// Returns this session re-keyed to sign under `method`.
    ///
    /// Purely a construction-time choice applied late: the data mapping,
    /// including any previously stored signature, is untouched until the
    /// next [`sign`](Self::sign).
    #[must_use]
    pub fn with_method(mut self, method: SigningMethod) -> Self {
        self.method = method;
        self
    }

    /// The signing method this session uses.
    #[must_use]
    pub fn method(&self) -> SigningMethod {
        self.method
    }

    /// The normalized data mapping, including `merchantSig` once signed.
    #[must_use]
    pub fn data(&self) -> &NormalizedData {
        &self.data
    }

    /// The stored signature, if [`sign`](Self::sign) has run.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.data.get(fields::MERCHANT_SIG).map(String::as_str)
    }

    /// Computes the merchant signature and stores it under `merchantSig`.
    ///
    /// SHA1 signs the fixed request field list in documented order; SHA256
    /// signs every field except the excluded names, sorted and escaped.
    /// Signing again recomputes and overwrites; the result is deterministic
    /// for identical data, secret, and method.
    ///
    /// # Errors
    ///
    /// Returns [`HppError::MissingFields`] when a required field is absent
    /// and [`HppError::InvalidSecret`] when a SHA256 secret is not hex.
    pub fn sign(&mut self) -> Result<&str> {
        require_fields(&self.data, fields::REQUIRED_FIELDS)?;

        let plaintext = match self.method {
            SigningMethod::Sha1 => {
                canonical::concatenated(&self.data, fields::SHA1_SIGNATURE_FIELDS)
            }
            SigningMethod::Sha256 => canonical::sorted_escaped(&self.data, None),
        };
        let signature = mac::sign_plaintext(self.method, &self.secret, &plaintext)?;
        debug!(method = %self.method, "request signed");

        self.data.insert(fields::MERCHANT_SIG.to_owned(), signature);
        Ok(self.data.get(fields::MERCHANT_SIG).map(String::as_str).unwrap_or_default())
    }

    /// Enumerates hidden form fields for a hosted-page POST, in name order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.data.iter().map(|(name, value)| (name.clone(), value.clone())).collect()
    }

    /// Builds the hosted-page redirect URL carrying the signed data as
    /// URL-encoded query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HppError::MissingFields`] when the session has not been
    /// signed yet.
    pub fn redirect_url(&self, config: &HppConfig) -> Result<Url> {
        redirect::redirect_url(config, &self.data)
    }
}

/// A decoded payment-result callback awaiting signature verification.
///
/// Verification is read-only: [`is_valid`](Self::is_valid) recomputes the
/// expected signature over the method-specific result field set and
/// reports whether the supplied `merchantSig` matches.
#[derive(Debug, Clone)]
pub struct PaymentResult {
    data: BTreeMap<String, String>,
    method: SigningMethod,
    secret: String,
}

impl PaymentResult {
    /// Creates a verification session from decoded result parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HppError::MissingConfiguration`] when the configured
    /// secret or account identifier is empty.
    pub fn new(data: BTreeMap<String, String>, config: &HppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { data, method: config.signing_method, secret: config.merchant_secret.clone() })
    }

    /// Returns this result re-keyed to verify under `method`.
    #[must_use]
    pub fn with_method(mut self, method: SigningMethod) -> Self {
        self.method = method;
        self
    }

    /// The result data mapping as received.
    #[must_use]
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    /// Recomputes the result signature and compares it to `merchantSig`.
    ///
    /// The comparison is byte-for-byte in constant time. A mismatch is a
    /// normal negative outcome (`Ok(false)`), distinct from a malformed
    /// result, which is an error.
    ///
    /// # Errors
    ///
    /// Returns [`HppError::MissingFields`] when an expected result field is
    /// absent and [`HppError::InvalidSecret`] when a SHA256 secret is not
    /// hex.
    pub fn is_valid(&self) -> Result<bool> {
        require_fields(&self.data, fields::RESULT_REQUIRED_FIELDS)?;

        let plaintext = match self.method {
            SigningMethod::Sha1 => {
                canonical::concatenated(&self.data, fields::SHA1_RESULT_SIGNATURE_FIELDS)
            }
            SigningMethod::Sha256 => {
                canonical::sorted_escaped(&self.data, Some(fields::SHA256_RESULT_SIGNATURE_FIELDS))
            }
        };
        let expected = mac::sign_plaintext(self.method, &self.secret, &plaintext)?;
        let supplied = self.data.get(fields::MERCHANT_SIG).map(String::as_str).unwrap_or_default();

        let valid = constant_time_eq(expected.as_bytes(), supplied.as_bytes());
        if valid {
            debug!(method = %self.method, "result signature verified");
        } else {
            warn!(method = %self.method, "result signature mismatch");
        }
        Ok(valid)
    }
}

fn require_fields(data: &BTreeMap<String, String>, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !data.contains_key(**field))
        .map(|field| (*field).to_owned())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(HppError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> HppConfig {
        let mut config =
            HppConfig::new("TestMerchant", "ASDFa34SDZCGSRT4534ad", SigningMethod::Sha1);
        config.skin_code = Some("X7hsNDWp".to_owned());
        config
    }

    fn minimal_request() -> RequestData {
        [
            ("merchantReference", "ref-1"),
            ("paymentAmount", "1000"),
            ("currencyCode", "EUR"),
            ("shipBeforeDate", "2015-07-01"),
            ("sessionValidity", "2015-06-25T10:31:06Z"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), FieldValue::from(value)))
        .collect()
    }

    fn minimal_result() -> BTreeMap<String, String> {
        [
            ("authResult", "AUTHORISED"),
            ("merchantReference", "ref-1"),
            ("skinCode", "X7hsNDWp"),
            ("merchantSig", "bogus"),
            ("shopperLocale", "en"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
    }

    #[test]
    fn test_defaults_are_injected_once_at_construction() {
        let session = PaymentSession::new(minimal_request(), &test_config()).unwrap();
        assert_eq!(session.data()["skinCode"], "X7hsNDWp");
        assert_eq!(session.data()["merchantAccount"], "TestMerchant");
    }

    #[test]
    fn test_explicit_fields_win_over_defaults() {
        let mut data = minimal_request();
        data.insert("skinCode".to_owned(), FieldValue::from("override"));
        let session = PaymentSession::new(data, &test_config()).unwrap();
        assert_eq!(session.data()["skinCode"], "override");
    }

    #[test]
    fn test_empty_secret_is_rejected_at_construction() {
        let mut config = test_config();
        config.merchant_secret = String::new();
        let result = PaymentSession::new(minimal_request(), &config);
        assert!(matches!(result, Err(HppError::MissingConfiguration("merchant_secret"))));
    }

    #[test]
    fn test_sign_requires_all_mandatory_fields() {
        let mut data = minimal_request();
        data.remove("sessionValidity");
        data.remove("currencyCode");
        let mut session = PaymentSession::new(data, &test_config()).unwrap();

        let result = session.sign();
        match result {
            Err(HppError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["currencyCode".to_owned(), "sessionValidity".to_owned()]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
        assert!(session.signature().is_none(), "failed sign must not store a signature");
    }

    #[test]
    fn test_sign_stores_signature_and_is_deterministic() {
        let mut session = PaymentSession::new(minimal_request(), &test_config()).unwrap();
        let first = session.sign().unwrap().to_owned();
        assert_eq!(session.signature(), Some(first.as_str()));

        let second = session.sign().unwrap().to_owned();
        assert_eq!(first, second, "re-signing identical data must reproduce the signature");
    }

    #[test]
    fn test_with_method_does_not_touch_stored_signature() {
        let mut session = PaymentSession::new(minimal_request(), &test_config()).unwrap();
        let sha1_sig = session.sign().unwrap().to_owned();

        let mut session = session.with_method(SigningMethod::Sha256);
        assert_eq!(session.signature(), Some(sha1_sig.as_str()));

        // Re-signing under the new method replaces it. The SHA1 secret is
        // not valid hex, so the SHA256 path reports the secret instead.
        assert!(matches!(session.sign(), Err(HppError::InvalidSecret(_))));
        assert_eq!(session.signature(), Some(sha1_sig.as_str()));
    }

    #[test]
    fn test_unrelated_field_is_inert_on_sha1_path() {
        let mut session = PaymentSession::new(minimal_request(), &test_config()).unwrap();
        let baseline = session.sign().unwrap().to_owned();

        let mut data = minimal_request();
        data.insert("unrelatedField".to_owned(), FieldValue::from("noise"));
        let mut session = PaymentSession::new(data, &test_config()).unwrap();
        assert_eq!(session.sign().unwrap(), baseline);
    }

    #[test]
    fn test_signed_field_change_changes_signature() {
        let mut session = PaymentSession::new(minimal_request(), &test_config()).unwrap();
        let baseline = session.sign().unwrap().to_owned();

        let mut data = minimal_request();
        data.insert("currencyCode".to_owned(), FieldValue::from("USD"));
        let mut session = PaymentSession::new(data, &test_config()).unwrap();
        assert_ne!(session.sign().unwrap(), baseline);
    }

    #[test]
    fn test_form_fields_enumerate_in_name_order() {
        let mut session = PaymentSession::new(minimal_request(), &test_config()).unwrap();
        session.sign().unwrap();

        let form = session.form_fields();
        assert_eq!(form.len(), session.data().len());
        let mut names: Vec<&String> = form.iter().map(|(name, _)| name).collect();
        let sorted = names.clone();
        names.sort();
        assert_eq!(names, sorted);
        assert!(form.iter().any(|(name, _)| name == "merchantSig"));
    }

    #[test]
    fn test_is_valid_requires_result_fields() {
        let mut data = minimal_result();
        data.remove("shopperLocale");
        let result = PaymentResult::new(data, &test_config()).unwrap();
        match result.is_valid() {
            Err(HppError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["shopperLocale".to_owned()]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_is_valid_mismatch_is_false_not_error() {
        let result = PaymentResult::new(minimal_result(), &test_config()).unwrap();
        assert!(!result.is_valid().unwrap());
    }
}
