//! Vet Tracker Core Library
//!
//! Headless patient intake for a veterinary clinic: records, a completeness
//! check and the create/edit form that feeds an in-memory store.
//!
//! # Architecture
//!
//! ```text
//!   Front end (CLI / native shell)
//!        │ field edits, submit, select
//!        ▼
//!   PatientForm ──validate──▶ ValidationError ──▶ ErrorBanner
//!        │
//!        │ add / replace / select
//!        ▼
//!   PatientStore ──▶ snapshot ──▶ patient list, PatientExport
//!        │
//!   Notifier ──▶ toast ("Client registered", "Data updated")
//! ```
//!
//! # Core Principle
//!
//! **No incomplete record ever reaches the store.** Every submit runs the
//! validation rule first; a failed check only raises the error banner.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, PatientDraft, Field)
//! - [`id`]: Session-unique record IDs
//! - [`validation`]: Required-field check
//! - [`store`]: In-memory collection with a selection slot
//! - [`form`]: Create/edit state machine
//! - [`notify`]: Toast notifier seam
//! - [`view`]: Header, error banner and form view model
//! - [`export`]: JSON and CSV export of the patient list

pub mod export;
pub mod form;
pub mod id;
pub mod models;
pub mod notify;
pub mod store;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use export::PatientExport;
pub use form::{FormMode, PatientForm, SubmitOutcome};
pub use id::generate_id;
pub use models::{Field, PatientDraft, PatientRecord, Selection};
pub use notify::{CollectingNotifier, NoopNotifier, Notifier, Toast};
pub use store::{PatientStore, PreloadError};
pub use validation::{is_valid, validate, ValidationError};
pub use view::{ErrorBanner, FormView, Header};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TrackerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        TrackerError::SerializationError(e.to_string())
    }
}

impl From<models::UnknownField> for TrackerError {
    fn from(e: models::UnknownField) -> Self {
        TrackerError::InvalidInput(e.to_string())
    }
}

impl From<store::PreloadError> for TrackerError {
    fn from(e: store::PreloadError) -> Self {
        TrackerError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for TrackerError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        TrackerError::LockError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a tracker with an empty patient list.
#[uniffi::export]
pub fn new_tracker() -> Arc<PatientTracker> {
    Arc::new(PatientTracker::from_store(PatientStore::new()))
}

/// Create a tracker preloaded with patients.
///
/// Fails with `InvalidInput` if a patient has an empty field, an empty id or
/// an id already used by another patient.
#[uniffi::export]
pub fn new_tracker_with_patients(
    patients: Vec<FfiPatient>,
) -> Result<Arc<PatientTracker>, TrackerError> {
    let records = patients.into_iter().map(Into::into).collect();
    let store = PatientStore::try_with_records(records)?;
    Ok(Arc::new(PatientTracker::from_store(store)))
}

// =========================================================================
// Main API Object
// =========================================================================

struct TrackerState {
    store: PatientStore,
    form: PatientForm,
}

/// Thread-safe tracker for FFI. Owns the store, the form and pending toasts.
#[derive(uniffi::Object)]
pub struct PatientTracker {
    state: Arc<Mutex<TrackerState>>,
    toasts: CollectingNotifier,
}

impl PatientTracker {
    fn from_store(store: PatientStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(TrackerState {
                store,
                form: PatientForm::new(),
            })),
            toasts: CollectingNotifier::new(),
        }
    }
}

#[uniffi::export]
impl PatientTracker {
    // =========================================================================
    // Form Operations
    // =========================================================================

    /// Edit one draft field.
    pub fn set_field(&self, field: FfiField, value: String) -> Result<(), TrackerError> {
        let mut state = self.state.lock()?;
        state.form.set_field(field.into(), value);
        Ok(())
    }

    /// Edit one draft field by name ("pet", "owner", "email", "date", "symptoms").
    pub fn set_field_by_name(&self, name: String, value: String) -> Result<(), TrackerError> {
        let field: Field = name.parse()?;
        let mut state = self.state.lock()?;
        state.form.set_field(field, value);
        Ok(())
    }

    /// Current draft values.
    pub fn draft(&self) -> Result<FfiDraft, TrackerError> {
        let state = self.state.lock()?;
        Ok(state.form.draft().clone().into())
    }

    /// Validate and save the draft.
    pub fn submit(&self) -> Result<FfiSubmitResult, TrackerError> {
        let mut state = self.state.lock()?;
        let TrackerState { store, form } = &mut *state;
        let result = match form.submit(store, &self.toasts) {
            Ok(outcome) => outcome.into(),
            Err(err) => FfiSubmitResult {
                status: FfiSubmitStatus::Invalid,
                patient: None,
                missing_fields: err.missing.into_iter().map(Into::into).collect(),
            },
        };
        Ok(result)
    }

    /// Validation banner text, if the last submit failed.
    pub fn error_message(&self) -> Result<Option<String>, TrackerError> {
        let state = self.state.lock()?;
        Ok(state.form.error_message().map(str::to_string))
    }

    /// "Save Changes" while editing, "Add Patient" otherwise.
    pub fn submit_label(&self) -> Result<String, TrackerError> {
        let state = self.state.lock()?;
        Ok(state.form.submit_label(&state.store).to_string())
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Load a patient into the form for editing.
    pub fn select_patient(&self, id: String) -> Result<FfiDraft, TrackerError> {
        let mut state = self.state.lock()?;
        let TrackerState { store, form } = &mut *state;
        if !form.select_by_id(store, &id) {
            return Err(TrackerError::NotFound(id));
        }
        Ok(form.draft().clone().into())
    }

    /// Leave edit mode and reset the draft.
    pub fn clear_selection(&self) -> Result<(), TrackerError> {
        let mut state = self.state.lock()?;
        let TrackerState { store, form } = &mut *state;
        form.cancel_edit(store);
        Ok(())
    }

    /// Whether a patient is selected for editing.
    pub fn is_editing(&self) -> Result<bool, TrackerError> {
        let state = self.state.lock()?;
        Ok(matches!(state.form.mode(&state.store), FormMode::Edit { .. }))
    }

    // =========================================================================
    // Patient List Operations
    // =========================================================================

    /// All patients in insertion order.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, TrackerError> {
        let state = self.state.lock()?;
        Ok(state.store.records().iter().cloned().map(Into::into).collect())
    }

    /// Delete a patient.
    pub fn remove_patient(&self, id: String) -> Result<FfiPatient, TrackerError> {
        let mut state = self.state.lock()?;
        let removed = state.store.remove(&id).ok_or(TrackerError::NotFound(id))?;
        Ok(removed.into())
    }

    /// Store revision, bumped on every change to the list.
    pub fn revision(&self) -> Result<u64, TrackerError> {
        let state = self.state.lock()?;
        Ok(state.store.revision())
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Take toasts raised since the last call.
    pub fn take_toasts(&self) -> Vec<FfiToast> {
        self.toasts.drain().into_iter().map(Into::into).collect()
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export the patient list as JSON.
    pub fn export_json(&self) -> Result<String, TrackerError> {
        let state = self.state.lock()?;
        Ok(PatientExport::from_store(&state.store).to_json()?)
    }

    /// Export the patient list as CSV.
    pub fn export_csv(&self) -> Result<String, TrackerError> {
        let state = self.state.lock()?;
        Ok(PatientExport::from_store(&state.store).to_csv())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiField {
    PetName,
    OwnerName,
    Email,
    AdmissionDate,
    Symptoms,
}

impl From<FfiField> for Field {
    fn from(field: FfiField) -> Self {
        match field {
            FfiField::PetName => Field::PetName,
            FfiField::OwnerName => Field::OwnerName,
            FfiField::Email => Field::Email,
            FfiField::AdmissionDate => Field::AdmissionDate,
            FfiField::Symptoms => Field::Symptoms,
        }
    }
}

impl From<Field> for FfiField {
    fn from(field: Field) -> Self {
        match field {
            Field::PetName => FfiField::PetName,
            Field::OwnerName => FfiField::OwnerName,
            Field::Email => FfiField::Email,
            Field::AdmissionDate => FfiField::AdmissionDate,
            Field::Symptoms => FfiField::Symptoms,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub email: String,
    pub admission_date: String,
    pub symptoms: String,
}

impl From<PatientRecord> for FfiPatient {
    fn from(record: PatientRecord) -> Self {
        Self {
            id: record.id,
            pet_name: record.pet_name,
            owner_name: record.owner_name,
            email: record.email,
            admission_date: record.admission_date,
            symptoms: record.symptoms,
        }
    }
}

impl From<FfiPatient> for PatientRecord {
    fn from(patient: FfiPatient) -> Self {
        PatientRecord {
            id: patient.id,
            pet_name: patient.pet_name,
            owner_name: patient.owner_name,
            email: patient.email,
            admission_date: patient.admission_date,
            symptoms: patient.symptoms,
        }
    }
}

/// FFI-safe draft.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDraft {
    pub pet_name: String,
    pub owner_name: String,
    pub email: String,
    pub admission_date: String,
    pub symptoms: String,
}

impl From<PatientDraft> for FfiDraft {
    fn from(draft: PatientDraft) -> Self {
        Self {
            pet_name: draft.pet_name,
            owner_name: draft.owner_name,
            email: draft.email,
            admission_date: draft.admission_date,
            symptoms: draft.symptoms,
        }
    }
}

/// FFI-safe submit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiSubmitStatus {
    Created,
    Updated,
    UpdateMissed,
    Invalid,
}

/// FFI-safe submit result.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiSubmitResult {
    pub status: FfiSubmitStatus,
    pub patient: Option<FfiPatient>,
    pub missing_fields: Vec<FfiField>,
}

impl From<SubmitOutcome> for FfiSubmitResult {
    fn from(outcome: SubmitOutcome) -> Self {
        let (status, record) = match outcome {
            SubmitOutcome::Created(r) => (FfiSubmitStatus::Created, r),
            SubmitOutcome::Updated(r) => (FfiSubmitStatus::Updated, r),
            SubmitOutcome::UpdateMissed(r) => (FfiSubmitStatus::UpdateMissed, r),
        };
        Self {
            status,
            patient: Some(record.into()),
            missing_fields: Vec::new(),
        }
    }
}

/// FFI-safe toast.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiToast {
    pub title: String,
    pub duration_ms: u64,
}

impl From<Toast> for FfiToast {
    fn from(toast: Toast) -> Self {
        Self {
            title: toast.title,
            duration_ms: toast.duration.as_millis() as u64,
        }
    }
}
