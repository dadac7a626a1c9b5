//! Input validation helpers
//!
//! Form payloads are checked here before any gateway call, so a bad form
//! surfaces as a validation error and never as a transport failure.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{GuestDraft, TableDraft};

// ── Text length limits ──────────────────────────────────────────────

/// Guest and table names
pub const MAX_NAME_LEN: usize = 200;

/// Notes on guests and tables
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    validate_length(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    match value {
        Some(v) => validate_length(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_length(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

// ── Form payloads ───────────────────────────────────────────────────

pub fn validate_guest_draft(draft: &GuestDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::GuestNameRequired).with_detail("field", "name"));
    }
    validate_required_text(&draft.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&draft.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&draft.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&draft.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

pub fn validate_table_draft(draft: &TableDraft) -> AppResult<()> {
    match draft.table_number {
        None => {
            return Err(
                AppError::new(ErrorCode::TableNumberRequired).with_detail("field", "table_number")
            );
        }
        Some(0) => {
            return Err(
                AppError::new(ErrorCode::TableNumberInvalid).with_detail("field", "table_number")
            );
        }
        Some(_) => {}
    }
    if !draft.position_x.is_finite() || !draft.position_y.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "Table position must be finite",
        )
        .with_detail("field", "position"));
    }
    validate_optional_text(&draft.table_name, "table_name", MAX_NAME_LEN)?;
    validate_optional_text(&draft.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}
