//! Credentials and request signing for the EXX exchange API
//!
//! EXX authenticates trade requests with a query-string signature: the
//! request parameters (including `accesskey` and a millisecond `nonce`) are
//! sorted lexicographically by key, URL-encoded, and signed with
//! HMAC-SHA512 under the account's secret key. The hex digest travels as
//! the `signature` parameter.
//!
//! # Example
//!
//! ```no_run
//! use exx_auth::{Credentials, RequestSigner};
//!
//! # fn main() -> Result<(), exx_auth::AuthError> {
//! let creds = Credentials::from_env()?;
//! let signer = RequestSigner::new(&creds);
//! let query = signer.signed_query(&[("currency", "ensa_eth")])?;
//! // query now carries accesskey, nonce and signature
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod params;

// Re-export main types
pub use credentials::{Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
pub use params::canonical_query;
