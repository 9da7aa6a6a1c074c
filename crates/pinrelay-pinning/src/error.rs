use pinrelay_core::AppError;
use serde_json::Value;
use thiserror::Error;

/// Pinning operation errors
#[derive(Debug, Error)]
pub enum PinningError {
    #[error("Pinata JWT not configured")]
    MissingCredential,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request to pinning service failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Pinning service returned {status}: {body}")]
    Upstream {
        status: u16,
        /// Best-effort human-readable detail pulled from `body`
        detail: Option<String>,
        body: String,
    },

    #[error("Unexpected response from pinning service: {0}")]
    InvalidResponse(String),
}

impl PinningError {
    /// Message suitable for an operator or an end user.
    pub fn detail(&self) -> Option<&str> {
        match self {
            PinningError::Upstream { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<PinningError> for AppError {
    fn from(err: PinningError) -> Self {
        match err {
            PinningError::MissingCredential => AppError::MissingCredential,
            PinningError::Io { path, source } => {
                AppError::Filesystem(format!("Failed to read {}: {}", path, source))
            }
            PinningError::Network(e) => AppError::Network(e.to_string()),
            PinningError::Upstream { status, detail, .. } => AppError::Upstream {
                status,
                message: detail,
            },
            PinningError::InvalidResponse(msg) => {
                AppError::Internal(format!("Invalid response from pinning service: {}", msg))
            }
        }
    }
}

/// Pull the client-facing message out of a Pinata error body.
///
/// Only `error.details` of `{"error":{"reason":"...","details":"..."}}` is used. Reason
/// codes and other shapes yield `None`; the raw body is still logged by the client.
pub fn extract_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    value
        .get("error")?
        .get("details")?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinrelay_core::ErrorMetadata;

    #[test]
    fn extracts_details() {
        let body = r#"{"error":{"reason":"INVALID_CREDENTIALS","details":"Invalid API key"}}"#;
        assert_eq!(extract_error_detail(body).as_deref(), Some("Invalid API key"));
    }

    #[test]
    fn reason_code_is_not_a_detail() {
        let blank = r#"{"error":{"reason":"NO_SCOPES_FOUND","details":"  "}}"#;
        assert_eq!(extract_error_detail(blank), None);

        let missing = r#"{"error":{"reason":"INVALID_CREDENTIALS"}}"#;
        assert_eq!(extract_error_detail(missing), None);
    }

    #[test]
    fn string_error_is_not_a_detail() {
        let body = r#"{"error":"Payload too large"}"#;
        assert_eq!(extract_error_detail(body), None);
    }

    #[test]
    fn reason_only_body_renders_generic_message() {
        let body = r#"{"error":{"reason":"INVALID_CREDENTIALS"}}"#;
        let err = PinningError::Upstream {
            status: 401,
            detail: extract_error_detail(body),
            body: body.to_string(),
        };
        assert_eq!(
            AppError::from(err).client_message(),
            pinrelay_core::error::GENERIC_UPLOAD_FAILURE
        );
    }

    #[test]
    fn ignores_unusable_bodies() {
        assert_eq!(extract_error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_error_detail(r#"{"message":"nope"}"#), None);
        assert_eq!(extract_error_detail(r#"{"error":42}"#), None);
        assert_eq!(extract_error_detail(""), None);
    }

    #[test]
    fn maps_into_app_error() {
        let err = PinningError::Upstream {
            status: 403,
            detail: Some("Forbidden".to_string()),
            body: "{}".to_string(),
        };
        match AppError::from(err) {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message.as_deref(), Some("Forbidden"));
            }
            other => panic!("Expected Upstream variant, got {:?}", other),
        }

        assert!(matches!(
            AppError::from(PinningError::MissingCredential),
            AppError::MissingCredential
        ));
    }
}
