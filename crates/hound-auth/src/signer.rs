//! HMAC-SHA256 token signer.

use crate::error::SignError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use hound_core::ClientCredential;
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Standard alphabet, padding optional on decode. Client keys are often
/// handed out with the trailing `=` stripped.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Map a base64url string onto the standard alphabet.
pub fn base64_url_decode(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Map a standard base64 string onto the URL-safe alphabet.
pub fn base64_url_encode(input: &str) -> String {
    input.replace('+', "-").replace('/', "_")
}

/// Sign `token` with a base64url client key.
///
/// Fails only when the key is not valid base64. Callers signing many tokens
/// with the same key should build a [`SigningKey`] once instead.
pub fn sign(token: &str, client_key: &str) -> Result<String, SignError> {
    Ok(SigningKey::from_b64url(client_key)?.sign(token))
}

/// A decoded client key, ready to sign tokens.
#[derive(Clone)]
pub struct SigningKey {
    mac: HmacSha256,
}

impl SigningKey {
    /// Decode a base64url client key.
    pub fn from_b64url(client_key: &str) -> Result<Self, SignError> {
        let bytes = KEY_ENGINE.decode(base64_url_decode(client_key))?;
        Self::from_bytes(&bytes)
    }

    /// Build a key from raw bytes. An empty key is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignError> {
        if bytes.is_empty() {
            return Err(SignError::InvalidKey("key is empty".to_string()));
        }
        let mac = <HmacSha256 as Mac>::new_from_slice(bytes)
            .map_err(|e| SignError::InvalidKey(e.to_string()))?;
        Ok(Self { mac })
    }

    /// Decode the key held by a resolved credential.
    pub fn from_credential(credential: &ClientCredential) -> Result<Self, SignError> {
        Self::from_b64url(credential.expose_client_key())
    }

    /// HMAC-SHA256 over the UTF-8 bytes of `token`, base64url-encoded.
    pub fn sign(&self, token: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(token.as_bytes());
        let digest = mac.finalize().into_bytes();
        base64_url_encode(&STANDARD.encode(digest))
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64url of the raw bytes "testkey", padding stripped
    const TEST_KEY: &str = "dGVzdGtleQ";

    #[test]
    fn test_golden_vector() {
        assert_eq!(
            sign("hello", TEST_KEY).unwrap(),
            "SidpMYOyjSYWIJ1v9ed2Rq9fwG6mr_rDdBWZWwe-Ld8="
        );
    }

    #[test]
    fn test_padding_is_optional() {
        assert_eq!(sign("hello", TEST_KEY).unwrap(), sign("hello", "dGVzdGtleQ==").unwrap());
    }

    #[test]
    fn test_deterministic() {
        let key = SigningKey::from_b64url(TEST_KEY).unwrap();
        for token in ["", "a", "some-request-token", "ünïcödé"] {
            assert_eq!(key.sign(token), key.sign(token));
            assert_eq!(key.sign(token), sign(token, TEST_KEY).unwrap());
        }
    }

    #[test]
    fn test_output_is_url_safe() {
        let key = SigningKey::from_b64url(TEST_KEY).unwrap();
        for i in 0..256 {
            let signature = key.sign(&format!("token-{i}"));
            assert!(!signature.contains('+'), "{signature}");
            assert!(!signature.contains('/'), "{signature}");
        }
    }

    #[test]
    fn test_url_safe_key_decodes_to_raw_bytes() {
        // Standard base64 "+/+/ECA=" contains both characters that get swapped.
        let raw = [0xfb, 0xff, 0xbf, 0x10, 0x20];
        let url_safe = base64_url_encode(&STANDARD.encode(raw));
        assert_eq!(url_safe, "-_-_ECA=");

        let decoded = KEY_ENGINE.decode(base64_url_decode(&url_safe)).unwrap();
        assert_eq!(decoded, raw);

        assert_eq!(
            SigningKey::from_b64url(&url_safe).unwrap().sign("x"),
            SigningKey::from_bytes(&raw).unwrap().sign("x")
        );
    }

    #[test]
    fn test_malformed_key_is_decode_error() {
        assert!(matches!(sign("hello", "not base64!"), Err(SignError::Decode(_))));
        assert!(matches!(SigningKey::from_b64url("abc$"), Err(SignError::Decode(_))));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(SigningKey::from_b64url(""), Err(SignError::InvalidKey(_))));
        assert!(matches!(SigningKey::from_b64url("  "), Err(SignError::Decode(_))));
        assert!(matches!(sign("hello", ""), Err(SignError::InvalidKey(_))));
    }

    #[test]
    fn test_empty_token_still_signs() {
        let signature = sign("", TEST_KEY).unwrap();
        assert_eq!(signature.len(), 44);
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = SigningKey::from_b64url(TEST_KEY).unwrap();
        assert_eq!(format!("{key:?}"), "SigningKey([REDACTED])");
    }
}
