//! Authentication credentials for the EXX API
//!
//! Implements HMAC-SHA512 signing as required by EXX trade endpoints: the
//! signature is the hex digest of the keyed hash over the canonical sorted
//! query string.
//!
//! # Security
//!
//! Secret keys are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};
use crate::params::canonical_query;

type HmacSha512 = Hmac<Sha512>;

/// API credentials for authenticated requests
///
/// Secret keys are automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// Access key (public identifier, transmitted with each request)
    access_key: String,
    /// Secret key (never transmitted, used only as the HMAC key)
    secret_key: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an access key and secret key
    ///
    /// EXX secret keys are opaque ASCII strings used directly as the HMAC
    /// key. An empty secret is a configuration error and is rejected here
    /// rather than at request time.
    pub fn new(access_key: impl Into<String>, secret_key: impl AsRef<str>) -> AuthResult<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.as_ref();

        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials(
                "Secret key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            access_key,
            secret_key: SecretBox::new(Box::new(secret_key.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `EXX_ACCESS_KEY` and `EXX_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let access_key = std::env::var("EXX_ACCESS_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("EXX_ACCESS_KEY".to_string()))?;
        let secret_key = std::env::var("EXX_SECRET_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("EXX_SECRET_KEY".to_string()))?;

        Self::new(access_key, secret_key)
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Current time in integer milliseconds since the Unix epoch
    ///
    /// Used as the request nonce. Two requests within the same millisecond
    /// legitimately share a nonce; uniqueness is enforced server-side by
    /// rejecting stale or duplicate values.
    pub fn timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }

    /// Sign a canonical query string
    ///
    /// Computes HMAC-SHA512 over the canonical bytes with the secret key and
    /// returns the hex-encoded digest. The input must already be in sorted
    /// canonical form (see [`canonical_query`]) or the server will compute a
    /// different digest during verification.
    pub fn sign(&self, canonical: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(canonical.as_bytes());
        let result = mac.finalize();

        hex::encode(result.into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            access_key: self.access_key.clone(),
            secret_key: SecretBox::new(Box::new(self.secret_key.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "access_key",
                &format!("{}...", &self.access_key[..8.min(self.access_key.len())]),
            )
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building signed query strings
///
/// Captures the nonce at construction so every parameter of one request is
/// signed against the same timestamp.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the current time as nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            nonce: Credentials::timestamp_ms(),
        }
    }

    /// Create a request signer with a fixed nonce
    pub fn with_nonce(credentials: &'a Credentials, nonce: u64) -> Self {
        Self { credentials, nonce }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        self.credentials.access_key()
    }

    /// Build the full signed query string for the given endpoint parameters
    ///
    /// Merges `accesskey` and `nonce` with the endpoint parameters, encodes
    /// the canonical sorted form, signs it, and appends the signature. The
    /// appended signature breaks the overall sort order, which is fine: the
    /// server re-sorts the received parameters before verifying.
    pub fn signed_query(&self, params: &[(&str, &str)]) -> AuthResult<String> {
        let nonce = self.nonce.to_string();

        let mut full: Vec<(&str, &str)> = vec![
            ("accesskey", self.credentials.access_key()),
            ("nonce", &nonce),
        ];
        full.extend_from_slice(params);

        let canonical = canonical_query(&full)?;
        let signature = self.credentials.sign(&canonical);

        Ok(format!("{}&signature={}", canonical, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let result = Credentials::new("K", "");
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = Credentials::new("test_access_key", "test_secret_key").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret_key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_known_signature_vector() {
        // HMAC-SHA512("abc", "accesskey=K&nonce=1000")
        let creds = Credentials::new("K", "abc").unwrap();
        let signature = creds.sign("accesskey=K&nonce=1000");

        assert_eq!(
            signature,
            "14c4e9f088b360dc2dbeedd13978653357c7cf7ad7fc51cd39ea807531e13989\
             e2701f5394e233534cf55b8daca1ddc273670915c72412cf394581c24cde19b0"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let creds = Credentials::new("K", "abc").unwrap();
        assert_eq!(
            creds.sign("accesskey=K&nonce=1000"),
            creds.sign("accesskey=K&nonce=1000")
        );
    }

    #[test]
    fn test_signed_query_known_vector() {
        let creds = Credentials::new("test-key", "test-secret").unwrap();
        let signer = RequestSigner::with_nonce(&creds, 1000);

        let query = signer
            .signed_query(&[
                ("currency", "ensa_eth"),
                ("type", "buy"),
                ("amount", "1.0"),
                ("price", "10"),
            ])
            .unwrap();

        assert_eq!(
            query,
            "accesskey=test-key&amount=1.0&currency=ensa_eth&nonce=1000&price=10&type=buy\
             &signature=a5bd3e0ff00c7ec0f9b4f1dd6d89d7cbb22909cc7176e634a23ec66d3961eb16\
             abdc52c3d5e29900e3136e92e83bdfb3fd29ed578f9dea0422ca4e227f2bed01"
        );
    }

    #[test]
    fn test_same_nonce_same_params_same_query() {
        // Two requests in the same millisecond share a nonce and therefore a
        // signature; uniqueness is the server's concern, not ours.
        let creds = Credentials::new("K", "abc").unwrap();
        let a = RequestSigner::with_nonce(&creds, 1000)
            .signed_query(&[("currency", "ensa_eth")])
            .unwrap();
        let b = RequestSigner::with_nonce(&creds, 1000)
            .signed_query(&[("currency", "ensa_eth")])
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_nonce_is_millisecond_scale() {
        // 2020-01-01 in milliseconds; anything below is seconds precision
        assert!(Credentials::timestamp_ms() > 1_577_836_800_000);
    }
}
