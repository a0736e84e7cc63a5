use serde::{Deserialize, Serialize};

/// JSON envelope returned by every operator endpoint.
///
/// The server guarantees a boolean `success` field and, when `success` is
/// false, an `error` string. Nothing else about the shape is assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusEnvelope {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }

    /// Map the envelope to a `Result`, surfacing the server-supplied error
    /// text. An envelope with `success: false` but no text degrades to a
    /// fixed placeholder rather than an empty message.
    pub fn into_result(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "unspecified server error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_envelope() {
        let env: StatusEnvelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.success);
        assert!(env.error.is_none());
        assert!(env.into_result().is_ok());
    }

    #[test]
    fn test_parse_failure_envelope() {
        let env: StatusEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "Access denied"}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Access denied");
    }

    #[test]
    fn test_failure_without_error_text() {
        let env: StatusEnvelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "unspecified server error");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let env: StatusEnvelope =
            serde_json::from_str(r#"{"success": true, "station_id": 7}"#).unwrap();
        assert!(env.success);
    }

    #[test]
    fn test_serialize_skips_absent_error() {
        let json = serde_json::to_string(&StatusEnvelope::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
