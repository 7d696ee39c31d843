//! Payment request signing example.
//!
//! This example prepares a payment session from native Rust values,
//! signs it under the SHA256 method, and prints the hidden form fields
//! and redirect URL a checkout page would use.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example sign_payment_request
//! ```

#![allow(
    clippy::print_stdout,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use std::collections::BTreeMap;

use adyen_hpp::{FieldValue, HppConfig, PaymentSession, SigningMethod};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

// Test skin secret published in the gateway's signing documentation.
// Production secrets belong in secure storage, never in source code.
const HMAC_KEY: &str = "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("adyen-hpp: Payment Request Signing Example\n");

    // Step 1: Configure the gateway connection
    println!("1. Building gateway configuration...");
    let mut config = HppConfig::new("TestMerchant", HMAC_KEY, SigningMethod::Sha256);
    config.skin_code = Some("X7hsNDWp".to_owned());
    println!("   Merchant account: {}", config.merchant_account);
    println!("   Signing method:   {}", config.signing_method);
    println!("   Environment:      {}.adyen.com", config.environment.subdomain());

    // Step 2: Assemble the request from native values
    println!("\n2. Assembling request data from native values...");
    let mut data: BTreeMap<String, FieldValue> = BTreeMap::new();
    data.insert("merchantReference".to_owned(), FieldValue::from("ORDER-2016-0042"));
    data.insert("currencyCode".to_owned(), FieldValue::from("EUR"));
    // 19.99 EUR in major units; normalization converts to 1999 minor units.
    data.insert("paymentAmount".to_owned(), FieldValue::from(Decimal::new(1999, 2)));
    data.insert(
        "shipBeforeDate".to_owned(),
        FieldValue::from(NaiveDate::from_ymd_opt(2016, 8, 1).expect("valid date")),
    );
    // The session stays payable for the next hour.
    data.insert("sessionValidity".to_owned(), FieldValue::from(Duration::hours(1)));
    data.insert("shopperLocale".to_owned(), FieldValue::from("en_GB"));
    println!("   {} fields staged", data.len());

    // Step 3: Construct the session
    println!("\n3. Constructing the payment session...");
    println!("   skinCode and merchantAccount are injected from configuration,");
    println!("   native values are normalized to gateway string encodings.");
    let mut session = PaymentSession::new(data, &config)?;
    for (name, value) in session.data() {
        println!("   {:<20} = {}", name, value);
    }

    // Step 4: Sign
    println!("\n4. Signing...");
    let signature = session.sign()?.to_owned();
    println!("   ✓ merchantSig = {}", signature);

    // Step 5: Hidden form fields for a POST to the hosted page
    println!("\n5. Hidden form fields for the hosted-page POST:");
    for (name, value) in session.form_fields() {
        println!("   <input type=\"hidden\" name=\"{}\" value=\"{}\" />", name, value);
    }

    // Step 6: Or redirect the shopper with a GET
    println!("\n6. Redirect URL for a GET flow:");
    let url = session.redirect_url(&config)?;
    println!("   {}", url);

    println!("\n✓ Request signing example complete");
    Ok(())
}
