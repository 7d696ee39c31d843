//! Hosted-page URL derivation.

use std::collections::BTreeMap;

use url::Url;

use crate::{
    config::HppConfig,
    error::{HppError, Result},
    hpp::fields,
};

/// Page serving the single-page (one-step) payment flow.
const PAY_PAGE: &str = "pay.shtml";

/// Page serving the multi-page flow with payment-method selection.
const SELECT_PAGE: &str = "select.shtml";

/// Builds the redirect URL for starting a payment.
///
/// The environment selects the gateway host, the page-flow flag selects the
/// page, and the signed data mapping is appended as URL-encoded query
/// parameters.
///
/// # Errors
///
/// Returns [`HppError::MissingFields`] when `merchantSig` is absent: data
/// must be signed before a shopper is redirected with it.
pub fn redirect_url(config: &HppConfig, data: &BTreeMap<String, String>) -> Result<Url> {
    if !data.contains_key(fields::MERCHANT_SIG) {
        return Err(HppError::MissingFields(vec![fields::MERCHANT_SIG.to_owned()]));
    }

    let page = if config.one_page { PAY_PAGE } else { SELECT_PAGE };
    let base = format!("https://{}.adyen.com/hpp/{page}", config.environment.subdomain());
    let mut url = Url::parse(&base).expect("gateway base URL is well formed");
    url.query_pairs_mut().extend_pairs(data.iter());
    Ok(url)
}
