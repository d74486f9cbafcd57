//! Canonical query-string encoding for request signing
//!
//! EXX verifies a request signature against the lexicographically sorted,
//! URL-encoded form of its parameters. Signer and verifier must produce the
//! same byte string regardless of the order parameters were supplied in, so
//! every signed request goes through this canonical encoding first.

use crate::error::{AuthError, AuthResult};

/// Encode parameters into their canonical query-string form.
///
/// Pairs are sorted lexicographically by key (stable, so duplicate keys keep
/// their relative order) and URL-encoded. An empty slice yields an empty
/// string.
pub fn canonical_query(params: &[(&str, &str)]) -> AuthResult<String> {
    let mut sorted: Vec<(&str, &str)> = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    serde_urlencoded::to_string(&sorted).map_err(|e| AuthError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_independent_of_insertion_order() {
        let a = canonical_query(&[("currency", "ensa_eth"), ("accesskey", "K")]).unwrap();
        let b = canonical_query(&[("accesskey", "K"), ("currency", "ensa_eth")]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, "accesskey=K&currency=ensa_eth");
    }

    #[test]
    fn test_empty_params_yield_empty_string() {
        assert_eq!(canonical_query(&[]).unwrap(), "");
    }

    #[test]
    fn test_values_are_url_encoded() {
        let encoded = canonical_query(&[("memo", "a b&c=d")]).unwrap();
        assert_eq!(encoded, "memo=a+b%26c%3Dd");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let params = [
            ("amount", "1.0"),
            ("currency", "ensa_eth"),
            ("receiveAddr", "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"),
        ];
        let encoded = canonical_query(&params).unwrap();

        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&encoded).unwrap();
        let expected: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let params = [("type", "buy"), ("price", "10"), ("currency", "ensa_eth")];
        assert_eq!(
            canonical_query(&params).unwrap(),
            canonical_query(&params).unwrap()
        );
    }
}
