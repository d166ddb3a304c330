//! Wire types of the Roborock user API.

use serde::Deserialize;

/// Envelope around every response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: Option<i64>,
    pub msg: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// The payload of a successful response, or the failure message.
    ///
    /// A successful envelope without `result` yields `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            return Ok(self.result);
        }
        Err(match (self.msg, self.code) {
            (Some(msg), _) if !msg.is_empty() => msg,
            (_, Some(code)) => format!("error code {code}"),
            _ => "unspecified error".to_string(),
        })
    }
}
