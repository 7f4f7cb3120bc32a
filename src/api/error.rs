use std::borrow::Cow;

use crate::modules::notification::model::Notice;
use crate::utils::format_megabytes;

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // reqwest errors
    #[error("Network Error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request failed with status {0}")]
    Status(reqwest::StatusCode),
    // serde errors
    #[error("JSON Serialization/Deserialization Error")]
    JsonError(#[from] serde_json::Error),
    // io errors
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    // Custom Errors
    #[error("Malformed Response: {0}")]
    MalformedResponse(Cow<'static, str>),
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn malformed(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

impl From<validator::ValidationErrors> for SystemError {
    fn from(err: validator::ValidationErrors) -> Self {
        SystemError::BadRequest(err.to_string().into())
    }
}

/// Client-side rejection of a candidate file. Nothing is sent to the backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Invalid file type: {mime}")]
    InvalidType { mime: String },
    #[error("File too large: {size} bytes exceeds {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

impl Rejection {
    pub fn notice(&self) -> Notice {
        match self {
            Rejection::InvalidType { .. } => {
                Notice::destructive("Invalid file type", "Please select an image file.")
            }
            Rejection::TooLarge { limit, .. } => Notice::destructive(
                "File too large",
                format!("Please select an image smaller than {}.", format_megabytes(*limit)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_notice_uses_default_limit() {
        let rejection = Rejection::TooLarge { size: 6 * 1024 * 1024, limit: 5 * 1024 * 1024 };
        assert_eq!(rejection.notice().description, "Please select an image smaller than 5.00 MB.");
    }

    #[test]
    fn test_too_large_notice_keeps_fractional_limits() {
        let half = Rejection::TooLarge { size: 600 * 1024, limit: 512 * 1024 };
        assert_eq!(half.notice().description, "Please select an image smaller than 0.50 MB.");

        let one_and_a_half = Rejection::TooLarge { size: 2 * 1024 * 1024, limit: 1536 * 1024 };
        assert_eq!(
            one_and_a_half.notice().description,
            "Please select an image smaller than 1.50 MB."
        );
    }

    #[test]
    fn test_invalid_type_notice() {
        let notice = Rejection::InvalidType { mime: "text/plain".into() }.notice();
        assert_eq!(notice.title, "Invalid file type");
        assert_eq!(notice.description, "Please select an image file.");
    }
}
