//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::GuestNotFound | Self::TableNotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::GuestNameRequired
            | Self::TableNumberRequired
            | Self::TableNumberInvalid => StatusCode::BAD_REQUEST,

            // 502 Bad Gateway
            Self::GatewayFailure
            | Self::LayoutCommitFailed
            | Self::LayoutResetIncomplete => StatusCode::BAD_GATEWAY,
        }
    }
}
