//! ShipEngine error response body.

use serde::Deserialize;

/// Error envelope ShipEngine returns with non-2xx responses.
///
/// ```json
/// {
///   "request_id": "aa3d8e8e-462b-4476-9618-72db7f7b7009",
///   "errors": [
///     {
///       "error_source": "shipengine",
///       "error_type": "validation",
///       "error_code": "invalid_identifier",
///       "message": "label_id se-0 is invalid"
///     }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub request_id: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorItem {
    pub error_code: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Joins the reported messages, falling back to error codes.
    ///
    /// Returns `None` when the body carries nothing printable.
    pub fn message(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref().or(e.error_code.as_deref()))
            .filter(|m| !m.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
