//! Form validation schemas for collections and tasks.
//!
//! Each schema is a pure function from a draft (raw form input) to a
//! discriminated result: either a typed, validated value ready to hand to the
//! mutation layer, or a list of field-scoped violations the form renders
//! inline. Validation rules are kept as data so they stay testable in
//! isolation from any rendering.

use chrono::NaiveDate;
use thiserror::Error;

use crate::palette::CollectionColor;
use crate::utils::datetime;

/// Minimum length of a collection name, in characters.
pub const COLLECTION_NAME_MIN_LEN: usize = 5;
/// Minimum length of a task's content, in characters.
pub const TASK_CONTENT_MIN_LEN: usize = 10;

/// A single field-scoped validation violation.
///
/// These never reach the mutation layer; they are rendered next to the
/// offending field and block submission entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the form field the violation applies to.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw input of the create-collection form.
#[derive(Debug, Clone, Default)]
pub struct CollectionDraft {
    pub name: String,
    /// Palette color name as selected in the form, `None` until picked.
    pub color: Option<String>,
}

/// A validated create-collection payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCollection {
    pub name: String,
    pub color: CollectionColor,
}

/// Raw input of the create-task form.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub collection_id: i32,
    pub content: String,
    /// Expiration date as typed, `YYYY-MM-DD`. Empty means no expiration.
    pub expires_at: String,
}

/// A validated create-task payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask {
    pub collection_id: i32,
    pub content: String,
    pub expires_at: Option<NaiveDate>,
}

/// Validate a collection draft against the collection schema.
///
/// The name must be at least [`COLLECTION_NAME_MIN_LEN`] characters and the
/// color must be a member of the enumerated palette.
pub fn validate_collection(draft: &CollectionDraft) -> Result<ValidCollection, Vec<FieldError>> {
    let mut errors = Vec::new();

    // Length counts the input as given; padding is not stripped first
    if draft.name.chars().count() < COLLECTION_NAME_MIN_LEN {
        errors.push(FieldError::new(
            "name",
            format!("Collection name must be at least {COLLECTION_NAME_MIN_LEN} characters long"),
        ));
    }

    let color = match draft.color.as_deref() {
        Some(raw) => match raw.parse::<CollectionColor>() {
            Ok(color) => Some(color),
            Err(()) => {
                errors.push(FieldError::new("color", format!("'{raw}' is not a palette color")));
                None
            }
        },
        None => {
            errors.push(FieldError::new("color", "Pick a color for the collection"));
            None
        }
    };

    match (errors.is_empty(), color) {
        (true, Some(color)) => Ok(ValidCollection {
            name: draft.name.clone(),
            color,
        }),
        _ => Err(errors),
    }
}

/// Validate a task draft against the task schema.
///
/// The collection id must be non-negative, the content at least
/// [`TASK_CONTENT_MIN_LEN`] characters, and the expiration date, when present,
/// a parseable calendar date. There is deliberately no must-be-in-the-future
/// check on the expiration date.
pub fn validate_task(draft: &TaskDraft) -> Result<ValidTask, Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.collection_id < 0 {
        errors.push(FieldError::new("collection_id", "Collection id cannot be negative"));
    }

    if draft.content.chars().count() < TASK_CONTENT_MIN_LEN {
        errors.push(FieldError::new(
            "content",
            format!("Task content must be at least {TASK_CONTENT_MIN_LEN} characters long"),
        ));
    }

    let expires_at = if draft.expires_at.trim().is_empty() {
        None
    } else {
        match datetime::parse_date(draft.expires_at.trim()) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(
                    "expires_at",
                    format!("'{}' is not a valid date (expected YYYY-MM-DD)", draft.expires_at.trim()),
                ));
                None
            }
        }
    };

    if errors.is_empty() {
        Ok(ValidTask {
            collection_id: draft.collection_id,
            content: draft.content.clone(),
            expires_at,
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(name: &str, color: Option<&str>) -> CollectionDraft {
        CollectionDraft {
            name: name.to_string(),
            color: color.map(String::from),
        }
    }

    fn task(collection_id: i32, content: &str, expires_at: &str) -> TaskDraft {
        TaskDraft {
            collection_id,
            content: content.to_string(),
            expires_at: expires_at.to_string(),
        }
    }

    #[test]
    fn test_collection_name_too_short() {
        // "Work" is 4 characters, one below the minimum
        let err = validate_collection(&collection("Work", Some("sky"))).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "name");
    }

    #[test]
    fn test_collection_name_at_boundary() {
        let valid = validate_collection(&collection("Chore", Some("sky"))).unwrap();
        assert_eq!(valid.name, "Chore");
        assert_eq!(valid.color, CollectionColor::Sky);
    }

    #[test]
    fn test_collection_accepts_valid_draft() {
        let valid = validate_collection(&collection("Chores", Some("poppy"))).unwrap();
        assert_eq!(valid.color, CollectionColor::Poppy);
    }

    #[test]
    fn test_collection_color_outside_palette() {
        let err = validate_collection(&collection("Groceries", Some("ultraviolet"))).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "color");
    }

    #[test]
    fn test_collection_missing_color() {
        let err = validate_collection(&collection("Groceries", None)).unwrap_err();
        assert_eq!(err[0].field, "color");
    }

    #[test]
    fn test_collection_reports_all_violations_at_once() {
        let err = validate_collection(&collection("abc", Some("nope"))).unwrap_err();
        let fields: Vec<_> = err.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "color"]);
    }

    #[test]
    fn test_collection_padded_name_counts_as_given() {
        // "nap  " is 5 characters including the padding
        let valid = validate_collection(&collection("nap  ", Some("sky"))).unwrap();
        assert_eq!(valid.name, "nap  ");
    }

    #[test]
    fn test_task_padded_content_counts_as_given() {
        // "buy milk  " is 10 characters including the padding
        let valid = validate_task(&task(1, "buy milk  ", "")).unwrap();
        assert_eq!(valid.content, "buy milk  ");
    }

    #[test]
    fn test_task_content_too_short() {
        // "Buy milk" is 8 characters
        let err = validate_task(&task(1, "Buy milk", "")).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "content");
    }

    #[test]
    fn test_task_accepts_without_expiration() {
        // "Buy milk today" is 14 characters
        let valid = validate_task(&task(1, "Buy milk today", "")).unwrap();
        assert_eq!(valid.expires_at, None);
        assert_eq!(valid.collection_id, 1);
    }

    #[test]
    fn test_task_accepts_with_expiration() {
        let valid = validate_task(&task(0, "Water the plants", "2026-09-01")).unwrap();
        assert_eq!(valid.expires_at, Some(chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()));
    }

    #[test]
    fn test_task_past_expiration_is_accepted() {
        // No must-be-in-the-future rule on expiration dates
        let valid = validate_task(&task(1, "Water the plants", "2001-01-01")).unwrap();
        assert!(valid.expires_at.is_some());
    }

    #[test]
    fn test_task_rejects_negative_collection_id() {
        let err = validate_task(&task(-1, "Water the plants", "")).unwrap_err();
        assert_eq!(err[0].field, "collection_id");
    }

    #[test]
    fn test_task_rejects_malformed_expiration() {
        let err = validate_task(&task(1, "Water the plants", "next tuesday")).unwrap_err();
        assert_eq!(err[0].field, "expires_at");
    }

    #[test]
    fn test_task_content_at_boundary() {
        let valid = validate_task(&task(1, "0123456789", "")).unwrap();
        assert_eq!(valid.content, "0123456789");
    }
}
