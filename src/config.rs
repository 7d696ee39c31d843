//! Gateway configuration types.
//!
//! Configuration is an explicit value handed to sessions at construction;
//! the crate never reaches into ambient settings. Loading (files,
//! environment) is a caller concern; the types deserialize from TOML or
//! any other serde format.

use serde::Deserialize;

use crate::{
    error::{HppError, Result},
    hpp::SigningMethod,
};

/// Gateway environment, selecting the hosted-page host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The `test.adyen.com` gateway.
    #[default]
    Test,
    /// The `live.adyen.com` gateway.
    Live,
}

impl Environment {
    /// Returns the gateway subdomain for this environment.
    #[must_use]
    pub const fn subdomain(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
        }
    }
}

/// Gateway configuration consumed at session construction.
///
/// # Examples
///
/// ```
/// use adyen_hpp::HppConfig;
///
/// let toml = r#"
///     merchant_account = "TestMerchant"
///     merchant_secret = "ASDFa34SDZCGSRT4534ad"
///     signing_method = "sha1"
///     skin_code = "X7hsNDWp"
///     environment = "test"
/// "#;
///
/// let config: HppConfig = toml::from_str(toml).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HppConfig {
    /// Merchant account identifier, injected into requests that lack one.
    pub merchant_account: String,

    /// Shared merchant secret. Raw bytes for SHA1 signing; a hex encoding
    /// of the HMAC key for SHA256.
    pub merchant_secret: String,

    /// Signing method for sessions built from this configuration.
    #[serde(default)]
    pub signing_method: SigningMethod,

    /// Default skin code, injected into requests that lack one.
    #[serde(default)]
    pub skin_code: Option<String>,

    /// Gateway environment.
    #[serde(default)]
    pub environment: Environment,

    /// Single-page payment flow when true, method-selection flow otherwise.
    #[serde(default = "default_one_page")]
    pub one_page: bool,

    /// Webservice username, consumed by the recurring-payment API client.
    #[serde(default)]
    pub api_username: Option<String>,

    /// Webservice password, consumed by the recurring-payment API client.
    #[serde(default)]
    pub api_password: Option<String>,
}

fn default_one_page() -> bool {
    true
}

impl HppConfig {
    /// Creates a configuration with the required values and defaults for
    /// the rest: test environment, single-page flow, no default skin.
    pub fn new(
        merchant_account: impl Into<String>,
        merchant_secret: impl Into<String>,
        signing_method: SigningMethod,
    ) -> Self {
        Self {
            merchant_account: merchant_account.into(),
            merchant_secret: merchant_secret.into(),
            signing_method,
            skin_code: None,
            environment: Environment::default(),
            one_page: true,
            api_username: None,
            api_password: None,
        }
    }

    /// Checks that the values every signing session depends on are set.
    ///
    /// # Errors
    ///
    /// Returns [`HppError::MissingConfiguration`] naming the first empty
    /// required value.
    pub fn validate(&self) -> Result<()> {
        if self.merchant_secret.is_empty() {
            return Err(HppError::MissingConfiguration("merchant_secret"));
        }
        if self.merchant_account.is_empty() {
            return Err(HppError::MissingConfiguration("merchant_account"));
        }
        Ok(())
    }
}
