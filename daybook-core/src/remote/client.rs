// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared HTTP plumbing for the remote feeds
//!
//! One `reqwest` client with timeout and user-agent serves all three feeds.
//! Transport and decode failures are kept apart so callers can distinguish
//! "no response" from "response we don't understand".

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use reqwest::Client;

/// HTTP client for the remote feeds.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a feed client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "Daybook/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;
        Ok(FeedClient { client })
    }

    /// GET a URL with query parameters and decode the JSON body.
    ///
    /// The body is fetched as text first so that a schema mismatch shows up
    /// as [`FetchError::Decode`], not as a transport failure.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Errors that can occur fetching a remote feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error with status code.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network/request error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response received but does not match the expected schema.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with an error envelope.
    #[error("service error {code}: {reason}")]
    Service {
        /// Service-level error code.
        code: i64,
        /// Human-readable reason from the service.
        reason: String,
    },
}

/// Two-way failure split: did we get a usable response at all?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// No usable response (connectivity, timeout, HTTP failure).
    Transport,
    /// A response arrived but could not be interpreted.
    Decode,
}

impl FetchError {
    /// Classifies this error into the transport/decode split.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Http(_) | FetchError::Network(_) => FetchErrorKind::Transport,
            FetchError::Decode(_) | FetchError::Service { .. } => FetchErrorKind::Decode,
        }
    }
}

/// Service envelope used by the almanac and lottery feeds.
///
/// `{ "error_code": 0, "reason": "...", "result": { ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceEnvelope<T> {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub reason: String,
    pub result: Option<T>,
}

impl<T> ServiceEnvelope<T> {
    /// Unwraps the payload, mapping a service-level error to [`FetchError`].
    pub fn into_result(self) -> Result<T, FetchError> {
        if self.error_code != 0 {
            return Err(FetchError::Service {
                code: self.error_code,
                reason: self.reason,
            });
        }
        self.result.ok_or(FetchError::Service {
            code: 0,
            reason: "missing result payload".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_kind_split() {
        assert_eq!(FetchError::Http(502).kind(), FetchErrorKind::Transport);
        let decode: FetchError = serde_json::from_str::<i64>("x").unwrap_err().into();
        assert_eq!(decode.kind(), FetchErrorKind::Decode);
        let service = FetchError::Service {
            code: 10012,
            reason: "key expired".to_string(),
        };
        assert_eq!(service.kind(), FetchErrorKind::Decode);
    }

    #[test]
    fn test_envelope_unwraps_payload() {
        let envelope: ServiceEnvelope<i64> =
            serde_json::from_str(r#"{"error_code":0,"reason":"ok","result":7}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), 7);
    }

    #[test]
    fn test_envelope_maps_service_errors() {
        let envelope: ServiceEnvelope<i64> =
            serde_json::from_str(r#"{"error_code":10012,"reason":"key expired"}"#).unwrap();
        match envelope.into_result() {
            Err(FetchError::Service { code, reason }) => {
                assert_eq!(code, 10012);
                assert_eq!(reason, "key expired");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_missing_result_is_an_error() {
        let envelope: ServiceEnvelope<i64> =
            serde_json::from_str(r#"{"error_code":0,"reason":"ok"}"#).unwrap();
        assert!(envelope.into_result().is_err());
    }
}
