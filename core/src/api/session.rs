use serde::{Deserialize, Serialize};

/// `Authorization` header value for the stored admin token, if any.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseDisposition {
    OK,
    /// Token expired or invalid: drop the stored session and send the admin
    /// back to the login page.
    CLEAR_SESSION,
    FAILED,
}

pub fn response_disposition(status: u16) -> ResponseDisposition {
    match status {
        200..=299 => ResponseDisposition::OK,
        401 => ResponseDisposition::CLEAR_SESSION,
        _ => ResponseDisposition::FAILED,
    }
}
