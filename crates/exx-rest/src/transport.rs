//! Shared HTTP transport for endpoint calls
//!
//! Every endpoint is one GET and one JSON decode. Network failures surface
//! as [`RestError::Http`], bodies that are not the expected JSON shape as
//! [`RestError::Decode`] with the HTTP status and a truncated body snippet,
//! so callers can branch on the failure mode.

use crate::error::{RestError, RestResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Maximum body length carried in a decode error
const SNIPPET_LEN: usize = 120;

/// Issue a single GET and decode the response body as JSON
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> RestResult<T> {
    debug!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| RestError::Decode {
        status,
        message: e.to_string(),
        snippet: snippet(&body),
    })
}

/// Truncate a response body for inclusion in an error message
fn snippet(body: &str) -> String {
    if body.len() <= SNIPPET_LEN {
        body.to_string()
    } else {
        let mut end = SNIPPET_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_kept_whole() {
        assert_eq!(snippet("{\"code\":100}"), "{\"code\":100}");
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(500);
        let s = snippet(&body);
        assert_eq!(s.len(), SNIPPET_LEN + 3);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let body = "仓".repeat(200);
        let s = snippet(&body);
        assert!(s.ends_with("..."));
        assert!(s.len() <= SNIPPET_LEN + 3);
    }
}
