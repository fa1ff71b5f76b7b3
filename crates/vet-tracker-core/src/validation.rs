//! Completeness check for patient drafts.
//!
//! Only presence is checked. E-mail format, date ranges and lengths are left
//! to the front end.

use thiserror::Error;

use crate::models::{Field, PatientDraft};

/// Message shown when a draft is incomplete.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// A draft was submitted with one or more empty fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("All fields are required")]
pub struct ValidationError {
    /// Empty fields, in form order
    pub missing: Vec<Field>,
}

/// Check that every field of the draft is non-empty.
pub fn validate(draft: &PatientDraft) -> Result<(), ValidationError> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

/// Boolean form of [`validate`].
pub fn is_valid(draft: &PatientDraft) -> bool {
    validate(draft).is_ok()
}
