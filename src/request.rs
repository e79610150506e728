//! Wire types for the AnkiConnect protocol.
//!
//! Every call is an HTTP POST of `{action, version, params}` and every
//! reply is `{result, error}`. The decoding rules live here so the
//! async client, the blocking client, and the batch dispatcher all
//! treat responses identically.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The AnkiConnect API version this crate speaks.
pub(crate) const API_VERSION: u8 = 6;

/// The request body expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct AnkiRequest<'a, T> {
    pub action: &'a str,
    pub version: u8,
    /// API key, only when AnkiConnect is configured to require one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<T>,
}

impl<'a, T> AnkiRequest<'a, T> {
    pub fn new(action: &'a str, params: T, key: Option<&'a str>) -> Self {
        Self {
            action,
            version: API_VERSION,
            key,
            params: Some(params),
        }
    }

    pub fn without_params(action: &'a str, key: Option<&'a str>) -> AnkiRequest<'a, ()> {
        AnkiRequest {
            action,
            version: API_VERSION,
            key,
            params: None,
        }
    }
}

/// The response body returned by AnkiConnect.
///
/// `result` and `error` are mutually exclusive in practice; a null
/// result with a null error is how void actions report success.
#[derive(Debug, Deserialize)]
pub(crate) struct AnkiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> AnkiResponse<T> {
    /// Decode a response for an action that must return a result.
    pub fn into_result(self) -> Result<T> {
        match (self.result, self.error) {
            (Some(result), None) => Ok(result),
            (_, Some(err)) => Err(api_error(err)),
            (None, None) => Err(Error::EmptyResponse),
        }
    }

    /// Decode a response for an action where null is a valid result.
    pub fn into_nullable(self) -> Result<Option<T>> {
        match (self.result, self.error) {
            (result, None) => Ok(result),
            (_, Some(err)) => Err(api_error(err)),
        }
    }

    /// Decode a response for an action that returns null on success.
    pub fn into_void(self) -> Result<()> {
        match self.error {
            None => Ok(()),
            Some(err) => Err(api_error(err)),
        }
    }
}

/// Map an AnkiConnect error string onto the typed error.
pub(crate) fn api_error(err: String) -> Error {
    if err.contains("permission") {
        Error::PermissionDenied
    } else {
        Error::AnkiConnect(err)
    }
}

/// Map a reqwest failure onto the typed error.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    if err.is_connect() {
        Error::ConnectionRefused
    } else {
        Error::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_params_omits_the_field() {
        let request = AnkiRequest::<()>::without_params("deckNames", None);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"action": "deckNames", "version": 6})
        );
    }

    #[test]
    fn request_with_key_includes_it() {
        let request = AnkiRequest::new("findCards", serde_json::json!({"query": "is:due"}), Some("k"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["key"], "k");
        assert_eq!(body["params"]["query"], "is:due");
    }

    #[test]
    fn null_result_with_null_error_is_void_success() {
        let response: AnkiResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"result": null, "error": null})).unwrap();
        assert!(response.into_void().is_ok());
    }

    #[test]
    fn permission_errors_get_their_own_variant() {
        let response: AnkiResponse<i64> = serde_json::from_value(
            serde_json::json!({"result": null, "error": "valid api key must be provided, permission denied"}),
        )
        .unwrap();
        assert!(matches!(
            response.into_result(),
            Err(Error::PermissionDenied)
        ));
    }
}
