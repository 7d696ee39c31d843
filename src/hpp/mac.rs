//! HMAC signature computation.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{digest::KeyInit, Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::{error::Result, hpp::SigningMethod};

/// Signs `plaintext` with the merchant secret and base64-encodes the digest.
///
/// The SHA1 method keys the MAC with the secret's raw bytes; the SHA256
/// method hex-decodes the secret into the key first. Both emit standard
/// base64 without line breaks.
///
/// # Errors
///
/// Returns [`HppError::InvalidSecret`](crate::HppError::InvalidSecret) when
/// a SHA256 secret is not valid hex.
pub fn sign_plaintext(method: SigningMethod, secret: &str, plaintext: &str) -> Result<String> {
    let digest = match method {
        SigningMethod::Sha1 => mac_digest::<Hmac<Sha1>>(secret.as_bytes(), plaintext.as_bytes()),
        SigningMethod::Sha256 => {
            let key = hex::decode(secret)?;
            mac_digest::<Hmac<Sha256>>(&key, plaintext.as_bytes())
        }
    };
    Ok(STANDARD.encode(digest))
}

fn mac_digest<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
