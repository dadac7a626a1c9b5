//! Unified error codes for the seating planner
//!
//! This module defines all error codes used across the planner core, the
//! gateway adapters, and any presentation layer consuming them.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Guest errors
//! - 2xxx: Table errors
//! - 3xxx: Layout errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Guest ====================
    /// Guest not found
    GuestNotFound = 1001,
    /// Guest name is empty
    GuestNameRequired = 1002,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table number is missing
    TableNumberRequired = 2002,
    /// Table number is zero or otherwise unusable
    TableNumberInvalid = 2003,

    // ==================== 3xxx: Layout ====================
    /// A table position could not be persisted
    LayoutCommitFailed = 3001,
    /// Some tables kept their old position during a layout reset
    LayoutResetIncomplete = 3002,

    // ==================== 9xxx: System ====================
    /// Entity gateway call failed
    GatewayFailure = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestNameRequired => "Guest name is required",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableNumberRequired => "Table number is required",
            ErrorCode::TableNumberInvalid => "Table number must be a positive integer",

            // Layout
            ErrorCode::LayoutCommitFailed => "Table position could not be saved",
            ErrorCode::LayoutResetIncomplete => "Layout reset did not update every table",

            // System
            ErrorCode::GatewayFailure => "Entity store request failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Guest
            1001 => Ok(ErrorCode::GuestNotFound),
            1002 => Ok(ErrorCode::GuestNameRequired),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableNumberRequired),
            2003 => Ok(ErrorCode::TableNumberInvalid),

            // Layout
            3001 => Ok(ErrorCode::LayoutCommitFailed),
            3002 => Ok(ErrorCode::LayoutResetIncomplete),

            // System
            9002 => Ok(ErrorCode::GatewayFailure),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
