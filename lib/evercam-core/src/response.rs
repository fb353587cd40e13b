//! API response interpretation.
//!
//! [`ApiResponse`] carries what the transport produced (status code plus raw
//! body) and interprets it either as JSON ([`ApiResponse::json`]) or as raw
//! bytes ([`ApiResponse::raw`]). Both consume the response; nothing is
//! retained after interpretation.

use bytes::Bytes;
use serde_json::Value;
use tracing::error;

use crate::{Error, Result};

/// An HTTP response as seen by the pipeline: status code and raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: Bytes,
}

impl ApiResponse {
    /// Create a response from a status code and body. An empty body stands
    /// for an absent one.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Raw body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Interpret the response as a JSON payload.
    ///
    /// On a success status an absent or blank body yields `Ok(None)`; a body
    /// that fails to parse is an invalid response; a parsed object carrying
    /// a `"message"` key is an error the API smuggled inside a 2xx. Any
    /// other status becomes an API error, preferring the embedded
    /// `"message"` text when one can be parsed out of the body.
    pub fn json(self) -> Result<Option<Value>> {
        if !self.is_success() {
            return Err(self.into_api_error());
        }
        if self.is_blank() {
            return Ok(None);
        }
        let Some(data) = self.parse_body() else {
            let message =
                "API call failed to return any data or contained data that could not be parsed.";
            error!("{message}");
            return Err(Error::invalid_response(message));
        };
        if let Some(text) = embedded_message(&data) {
            let message = format!("Evercam API call returned an error. Message: {text}");
            error!("{message}");
            return Err(Error::api(message));
        }
        Ok(Some(data))
    }

    /// Interpret the response as raw bytes.
    ///
    /// Non-2xx statuses fail exactly like [`Self::json`]; a success status
    /// returns the body verbatim, without JSON parsing.
    pub fn raw(self) -> Result<Bytes> {
        if !self.is_success() {
            return Err(self.into_api_error());
        }
        Ok(self.body)
    }

    /// Body rendered as text, with invalid UTF-8 replaced.
    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn is_blank(&self) -> bool {
        self.body_text().trim().is_empty()
    }

    /// Best-effort JSON parse of the body. Parse failures are logged and
    /// swallowed; the caller decides whether that is fatal.
    fn parse_body(&self) -> Option<Value> {
        if self.is_blank() {
            return None;
        }
        match serde_json::from_slice(&self.body) {
            Ok(data) => Some(data),
            Err(cause) => {
                error!("Error interpreting response for API call. Cause: {cause}");
                None
            }
        }
    }

    /// Build the error for a non-2xx response.
    fn into_api_error(self) -> Error {
        let message = match self.parse_body().as_ref().and_then(embedded_message) {
            Some(text) => format!("Evercam API call returned an error. Message: {text}"),
            None => format!(
                "Evercam API call returned a {} code. Response body was '{}'.",
                self.status,
                self.body_text()
            ),
        };
        error!("{message}");
        Error::api(message)
    }
}

/// The `"message"` value of an error envelope, rendered as plain text.
fn embedded_message(data: &Value) -> Option<String> {
    let message = data.as_object()?.get("message")?;
    Some(match message {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_payload() {
        let response = ApiResponse::new(200, r#"{"logs": []}"#);
        let data = response.json().expect("payload").expect("some");
        assert_eq!(data, serde_json::json!({"logs": []}));
    }

    #[test]
    fn success_with_empty_body_yields_none() {
        let response = ApiResponse::new(200, "");
        assert!(response.json().expect("no payload").is_none());
    }

    #[test]
    fn success_with_blank_body_yields_none() {
        let response = ApiResponse::new(200, "  \n\t ");
        assert!(response.json().expect("no payload").is_none());
    }

    #[test]
    fn success_with_unparseable_body_is_invalid_response() {
        let response = ApiResponse::new(200, "not json at all");
        let err = response.json().expect_err("should fail");
        assert!(err.is_invalid_response());
        assert_eq!(
            err.to_string(),
            "API call failed to return any data or contained data that could not be parsed."
        );
    }

    #[test]
    fn success_with_embedded_message_is_api_error() {
        let response = ApiResponse::new(200, r#"{"message": "camera is offline"}"#);
        let err = response.json().expect_err("should fail");
        assert!(err.is_api());
        assert_eq!(
            err.to_string(),
            "Evercam API call returned an error. Message: camera is offline"
        );
    }

    #[test]
    fn failure_with_message_envelope() {
        let response = ApiResponse::new(400, r#"{"message": "Its Broken"}"#);
        let err = response.json().expect_err("should fail");
        assert!(err.is_api());
        assert_eq!(
            err.to_string(),
            "Evercam API call returned an error. Message: Its Broken"
        );
    }

    #[test]
    fn failure_without_message_reports_status_and_body() {
        let response = ApiResponse::new(500, "boom");
        let err = response.json().expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "Evercam API call returned a 500 code. Response body was 'boom'."
        );
    }

    #[test]
    fn failure_with_unparseable_body_is_tolerated() {
        let response = ApiResponse::new(502, "<html>bad gateway</html>");
        let err = response.json().expect_err("should fail");
        assert!(err.is_api());
        assert_eq!(
            err.to_string(),
            "Evercam API call returned a 502 code. Response body was '<html>bad gateway</html>'."
        );
    }

    #[test]
    fn failure_with_non_object_payload_reports_status() {
        let response = ApiResponse::new(404, r#"["message"]"#);
        let err = response.json().expect_err("should fail");
        assert_eq!(
            err.to_string(),
            r#"Evercam API call returned a 404 code. Response body was '["message"]'."#
        );
    }

    #[test]
    fn raw_returns_body_verbatim() {
        let bytes = Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0]);
        let response = ApiResponse::new(200, bytes.clone());
        assert_eq!(response.raw().expect("bytes"), bytes);
    }

    #[test]
    fn raw_skips_json_parsing_on_success() {
        let response = ApiResponse::new(200, "not json at all");
        assert_eq!(
            response.raw().expect("bytes"),
            Bytes::from("not json at all")
        );
    }

    #[test]
    fn raw_fails_like_json_on_error_status() {
        let response = ApiResponse::new(403, r#"{"message": "Unauthorized"}"#);
        let err = response.raw().expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "Evercam API call returned an error. Message: Unauthorized"
        );
    }
}
