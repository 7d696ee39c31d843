//! Error handling example showing how to handle each error kind.
//!
//! Every error this crate returns indicates caller misuse: bad
//! configuration or bad input. This example triggers each kind and shows
//! the matching recovery.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use std::collections::BTreeMap;

use adyen_hpp::{FieldValue, HppConfig, HppError, PaymentSession, SigningMethod};
use rust_decimal::Decimal;

fn request(pairs: &[(&str, &str)]) -> BTreeMap<String, FieldValue> {
    pairs.iter().map(|(name, value)| ((*name).to_owned(), FieldValue::from(*value))).collect()
}

fn main() {
    println!("adyen-hpp: Error Handling Example\n");

    let config = HppConfig::new("TestMerchant", "ASDFa34SDZCGSRT4534ad", SigningMethod::Sha1);

    // Example 1: Empty secret (should fail at construction)
    println!("Example 1: Constructing a session with an empty secret");
    let mut broken = config.clone();
    broken.merchant_secret = String::new();
    match PaymentSession::new(request(&[("merchantReference", "ref-1")]), &broken) {
        Ok(_) => println!("   Unexpected success"),
        Err(HppError::MissingConfiguration(name)) => {
            println!("   ✓ Caught configuration error: {} is required", name);
            println!("   Recovery: Supply the merchant secret before building sessions");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 2: Zero amount (should fail during normalization)
    println!("\nExample 2: Amount that normalizes to zero minor units");
    let mut data = request(&[("merchantReference", "ref-1"), ("currencyCode", "EUR")]);
    data.insert("paymentAmount".to_owned(), FieldValue::from(Decimal::new(0, 2)));
    match PaymentSession::new(data, &config) {
        Ok(_) => println!("   Unexpected success"),
        Err(HppError::InvalidAmount(value)) => {
            println!("   ✓ Caught amount error: {:?} is not a payable amount", value);
            println!("   Recovery: Charge a non-zero amount in currency major units");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 3: Signing without the required fields
    println!("\nExample 3: Signing an incomplete request");
    let data = request(&[
        ("merchantReference", "ref-1"),
        ("paymentAmount", "1000"),
        ("currencyCode", "EUR"),
        ("skinCode", "X7hsNDWp"),
    ]);
    let mut session = PaymentSession::new(data, &config).expect("construction succeeds");
    match session.sign() {
        Ok(_) => println!("   Unexpected success"),
        Err(HppError::MissingFields(missing)) => {
            println!("   ✓ Caught missing fields: {}", missing.join(", "));
            println!("   Recovery: Populate every required field, then sign again");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 4: Unrecognized method string from configuration
    println!("\nExample 4: Parsing an unsupported signing method");
    match "md5".parse::<SigningMethod>() {
        Ok(_) => println!("   Unexpected success"),
        Err(HppError::UnsupportedMethod(name)) => {
            println!("   ✓ Caught unsupported method: {:?}", name);
            println!("   Recovery: Configure \"sha1\" or \"sha256\"");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 5: SHA256 secret that is not hex
    println!("\nExample 5: Signing with a non-hex SHA256 secret");
    let sha256 = HppConfig::new("TestMerchant", "not-a-hex-secret", SigningMethod::Sha256);
    let data = request(&[
        ("merchantReference", "ref-1"),
        ("paymentAmount", "1000"),
        ("currencyCode", "EUR"),
        ("shipBeforeDate", "2016-08-01"),
        ("skinCode", "X7hsNDWp"),
        ("sessionValidity", "2016-07-25T10:31:06Z"),
    ]);
    let mut session = PaymentSession::new(data, &sha256).expect("construction succeeds");
    match session.sign() {
        Ok(_) => println!("   Unexpected success"),
        Err(HppError::InvalidSecret(e)) => {
            println!("   ✓ Caught secret error: {}", e);
            println!("   Recovery: SHA256 secrets are hex strings from the skin settings page");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n✓ Error handling examples complete");
}
