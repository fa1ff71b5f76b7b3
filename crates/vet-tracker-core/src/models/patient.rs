//! Patient models.

use serde::{Deserialize, Serialize};

use super::PatientDraft;
use crate::id::generate_id;

/// A patient admitted to the clinic.
///
/// Records only enter the [`PatientStore`](crate::PatientStore) through the intake form
/// or a checked preload, both of which validate every content field first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Session-unique ID, assigned on creation and never changed
    pub id: String,
    /// Pet name
    pub pet_name: String,
    /// Owner/client name
    pub owner_name: String,
    /// Contact e-mail of the owner
    pub email: String,
    /// Admission date (YYYY-MM-DD)
    pub admission_date: String,
    /// Presenting symptoms
    pub symptoms: String,
}

impl PatientRecord {
    /// Create a record with a freshly generated ID from a draft's fields.
    pub fn new(draft: PatientDraft) -> Self {
        Self::with_id(generate_id(), draft)
    }

    /// Create a record carrying an existing ID (edit path).
    pub fn with_id(id: impl Into<String>, draft: PatientDraft) -> Self {
        Self {
            id: id.into(),
            pet_name: draft.pet_name,
            owner_name: draft.owner_name,
            email: draft.email,
            admission_date: draft.admission_date,
            symptoms: draft.symptoms,
        }
    }
}
