//! Response envelope returned for every [`ChoiceRequest`](crate::ChoiceRequest).

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Result
// =============================================================================

/// Result of a request operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Operation succeeded
    Success {
        /// Requirements or validation result, depending on the request
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation failed
    Error {
        code: ErrorCode,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
}

impl ResponseResult {
    /// Create a success response with data.
    ///
    /// A payload that fails to serialise becomes an `internal_error`.
    pub fn success<T: Serialize>(data: T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => ResponseResult::Success { data: Some(value) },
            Err(e) => ResponseResult::error(
                ErrorCode::InternalError,
                format!("Failed to serialise response: {e}"),
            ),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Error code, if this is an error response
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ResponseResult::Error { code, .. } => Some(*code),
            ResponseResult::Success { .. } => None,
        }
    }
}

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Unknown class, race, background or subclass id
    NotFound,
    /// Request was well-formed JSON but cannot be answered as asked
    BadRequest,
    InternalError,
}

impl ErrorCode {
    /// Convert to HTTP status code equivalent
    pub fn to_http_status(&self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::BadRequest => 400,
            ErrorCode::InternalError => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_wire_shape() {
        let response = ResponseResult::success(json!({ "can_save": true }));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["can_save"], true);
    }

    #[test]
    fn test_error_wire_shape() {
        let response = ResponseResult::error(ErrorCode::NotFound, "Unknown class: 'artificer'");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "not_found");
        assert!(value.get("details").is_none());
        assert_eq!(response.error_code(), Some(ErrorCode::NotFound));
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::NotFound.to_http_status(), 404);
        assert_eq!(ErrorCode::BadRequest.to_http_status(), 400);
        assert_eq!(ErrorCode::InternalError.to_http_status(), 500);
    }
}
