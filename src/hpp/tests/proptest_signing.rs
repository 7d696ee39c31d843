use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::{
    config::HppConfig,
    hpp::{canonical, fields, mac, FieldValue, PaymentResult, PaymentSession, RequestData,
        SigningMethod},
};

fn request_data(required: &[String], amount: i64) -> RequestData {
    let names = ["merchantReference", "currencyCode", "shipBeforeDate", "sessionValidity"];
    let mut data: RequestData = names
        .iter()
        .zip(required)
        .map(|(name, value)| ((*name).to_owned(), FieldValue::from(value.clone())))
        .collect();
    data.insert("paymentAmount".to_owned(), FieldValue::from(amount));
    data
}

fn corrupt_last_char(signature: &str) -> String {
    let mut bytes = signature.to_owned().into_bytes();
    let last = bytes.len() - 1;
    bytes[last] = if bytes[last] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).expect("ASCII stays ASCII")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_sha256_signing_deterministic_and_selective(
        secret in "[0-9a-f]{64}",
        required in proptest::collection::vec("[ -~]{1,16}", 4),
        amount in 1_i64..1_000_000,
        extra_name in "[a-z]{1,12}",
        extra_value in "[ -~]{0,16}",
    ) {
        let mut config = HppConfig::new("TestMerchant", secret, SigningMethod::Sha256);
        config.skin_code = Some("X7hsNDWp".to_owned());
        let data = request_data(&required, amount);

        let mut first = PaymentSession::new(data.clone(), &config).unwrap();
        let baseline = first.sign().unwrap().to_owned();
        let mut second = PaymentSession::new(data.clone(), &config).unwrap();
        prop_assert_eq!(second.sign().unwrap(), baseline.as_str());

        // Excluded names never move the signature.
        let mut noisy = data.clone();
        noisy.insert(format!("ignore.{extra_name}"), FieldValue::from(extra_value.clone()));
        noisy.insert("merchantSig".to_owned(), FieldValue::from("junk"));
        noisy.insert("sig".to_owned(), FieldValue::from("junk"));
        let mut ignored = PaymentSession::new(noisy, &config).unwrap();
        prop_assert_eq!(ignored.sign().unwrap(), baseline.as_str());

        // Any other added field lands in the dynamic field set and does.
        let mut extended = data.clone();
        extended.insert(format!("extra.{extra_name}"), FieldValue::from(extra_value));
        let mut sensitive = PaymentSession::new(extended, &config).unwrap();
        prop_assert_ne!(sensitive.sign().unwrap(), baseline.as_str());
    }

    #[test]
    fn test_sha1_result_verification_roundtrip(
        secret in "[ -~]{1,32}",
        auth_result in "[A-Z]{1,12}",
        reference in "[ -~]{1,24}",
        skin in "[a-zA-Z0-9]{8}",
        locale in "[a-z]{2}",
        psp in "[0-9]{1,16}",
    ) {
        let config = HppConfig::new("TestMerchant", secret.clone(), SigningMethod::Sha1);
        let mut data: BTreeMap<String, String> = [
            ("authResult", auth_result),
            ("merchantReference", reference),
            ("skinCode", skin),
            ("shopperLocale", locale),
            ("pspReference", psp),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect();

        let plaintext = canonical::concatenated(&data, fields::SHA1_RESULT_SIGNATURE_FIELDS);
        let signature = mac::sign_plaintext(SigningMethod::Sha1, &secret, &plaintext).unwrap();
        data.insert("merchantSig".to_owned(), signature.clone());

        let result = PaymentResult::new(data.clone(), &config).unwrap();
        prop_assert!(result.is_valid().unwrap());

        data.insert("merchantSig".to_owned(), corrupt_last_char(&signature));
        let corrupted = PaymentResult::new(data, &config).unwrap();
        prop_assert!(!corrupted.is_valid().unwrap());
    }

    #[test]
    fn test_sha256_result_verification_roundtrip(
        secret in "[0-9a-f]{64}",
        auth_result in "[A-Z]{1,12}",
        reference in "[ -~]{1,24}",
        skin in "[a-zA-Z0-9]{8}",
        locale in "[a-z]{2}",
        unrelated in "[ -~]{0,16}",
    ) {
        let config = HppConfig::new("TestMerchant", secret.clone(), SigningMethod::Sha256);
        let mut data: BTreeMap<String, String> = [
            ("authResult", auth_result),
            ("merchantReference", reference),
            ("skinCode", skin),
            ("shopperLocale", locale),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect();

        let plaintext =
            canonical::sorted_escaped(&data, Some(fields::SHA256_RESULT_SIGNATURE_FIELDS));
        let signature = mac::sign_plaintext(SigningMethod::Sha256, &secret, &plaintext).unwrap();
        data.insert("merchantSig".to_owned(), signature.clone());

        // Fields outside the result signature set never affect the check.
        data.insert("merchantAccount".to_owned(), unrelated);

        let result = PaymentResult::new(data.clone(), &config).unwrap();
        prop_assert!(result.is_valid().unwrap());

        data.insert("merchantSig".to_owned(), corrupt_last_char(&signature));
        let corrupted = PaymentResult::new(data, &config).unwrap();
        prop_assert!(!corrupted.is_valid().unwrap());
    }
}
