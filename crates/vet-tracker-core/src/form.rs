//! Patient intake form.
//!
//! The form owns a [`PatientDraft`] and an error flag. The store is owned by
//! the caller and passed in per event, so the form never holds shared state.
//!
//! ```text
//!            select(record)
//!   Create ─────────────────▶ Edit { id }
//!     ▲  │                        │
//!     │  │ submit (valid)         │ submit (valid): replace, clear selection
//!     │  ▼ add                    │
//!   Create ◀──────────────────────┘
//! ```
//!
//! An invalid submit sets the error flag and changes nothing else.

use crate::models::{Field, PatientDraft, PatientRecord};
use crate::notify::{Notifier, Toast};
use crate::store::PatientStore;
use crate::validation::{validate, ValidationError};
use crate::view::ErrorBanner;

/// Toast title after a new patient is added.
pub const CREATED_MESSAGE: &str = "Client registered successfully";
/// Toast title after an existing patient is updated.
pub const UPDATED_MESSAGE: &str = "Data updated successfully";

/// Form state, derived from the store's selection slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// No selection: submit adds a new record
    Create,
    /// A record is selected: submit replaces it
    Edit { id: String },
}

/// Result of a valid submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended
    Created(PatientRecord),
    /// The selected record was replaced
    Updated(PatientRecord),
    /// The selected record was gone from the store. Selection is cleared
    /// and the draft kept so it can be resubmitted as a new patient.
    UpdateMissed(PatientRecord),
}

impl SubmitOutcome {
    pub fn record(&self) -> &PatientRecord {
        match self {
            SubmitOutcome::Created(r)
            | SubmitOutcome::Updated(r)
            | SubmitOutcome::UpdateMissed(r) => r,
        }
    }
}

/// Editable draft plus validation state.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    draft: PatientDraft,
    error: bool,
}

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Whether the last submit failed validation.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Banner text for the current error state.
    pub fn error_message(&self) -> Option<&'static str> {
        ErrorBanner::render(self.error)
    }

    pub fn mode(&self, store: &PatientStore) -> FormMode {
        match store.selection() {
            Some(record) => FormMode::Edit {
                id: record.id.clone(),
            },
            None => FormMode::Create,
        }
    }

    pub fn submit_label(&self, store: &PatientStore) -> &'static str {
        match self.mode(store) {
            FormMode::Create => "Add Patient",
            FormMode::Edit { .. } => "Save Changes",
        }
    }

    /// Sync the draft with a new selection.
    ///
    /// A selected record overwrites every draft field. Clearing the selection
    /// leaves the draft alone.
    pub fn on_selection_changed(&mut self, selection: Option<&PatientRecord>) {
        if let Some(record) = selection {
            self.draft = PatientDraft::from_record(record);
        }
    }

    /// Select a record for editing and load it into the draft.
    pub fn select(&mut self, store: &mut PatientStore, record: PatientRecord) {
        self.on_selection_changed(Some(&record));
        store.select(Some(record));
    }

    /// Select the stored record with `id`. Returns `false` if there is none.
    pub fn select_by_id(&mut self, store: &mut PatientStore, id: &str) -> bool {
        match store.get(id).cloned() {
            Some(record) => {
                self.select(store, record);
                true
            }
            None => {
                tracing::warn!(id, "select skipped: no patient with this id");
                false
            }
        }
    }

    /// Leave edit mode without saving and reset the draft.
    pub fn cancel_edit(&mut self, store: &mut PatientStore) {
        store.select(None);
        self.draft.clear();
        self.error = false;
    }

    /// Validate the draft and add or update the store.
    pub fn submit(
        &mut self,
        store: &mut PatientStore,
        notifier: &dyn Notifier,
    ) -> Result<SubmitOutcome, ValidationError> {
        self.error = false;

        if let Err(err) = validate(&self.draft) {
            tracing::debug!(missing = ?err.missing, "submit rejected");
            self.error = true;
            return Err(err);
        }

        let outcome = match self.mode(store) {
            FormMode::Edit { id } => {
                let record = PatientRecord::with_id(id.clone(), self.draft.clone());
                let replaced = store.replace(&id, record.clone());
                store.select(None);
                if !replaced {
                    return Ok(SubmitOutcome::UpdateMissed(record));
                }
                notifier.notify(&Toast::success(UPDATED_MESSAGE));
                SubmitOutcome::Updated(record)
            }
            FormMode::Create => {
                let record = PatientRecord::new(self.draft.clone());
                store.add(record.clone());
                notifier.notify(&Toast::success(CREATED_MESSAGE));
                SubmitOutcome::Created(record)
            }
        };

        self.draft.clear();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{CollectingNotifier, NoopNotifier};

    fn fill(form: &mut PatientForm) {
        form.set_field(Field::PetName, "Rex");
        form.set_field(Field::OwnerName, "Ana");
        form.set_field(Field::Email, "ana@x.com");
        form.set_field(Field::AdmissionDate, "2024-01-01");
        form.set_field(Field::Symptoms, "cough");
    }

    fn stored(id: &str) -> PatientRecord {
        PatientRecord {
            id: id.into(),
            pet_name: "Luna".into(),
            owner_name: "Ben".into(),
            email: "ben@x.com".into(),
            admission_date: "2024-02-02".into(),
            symptoms: "limping".into(),
        }
    }

    #[test]
    fn test_initial_state() {
        let form = PatientForm::new();
        let store = PatientStore::new();
        assert_eq!(form.mode(&store), FormMode::Create);
        assert!(form.draft().is_blank());
        assert!(!form.has_error());
        assert_eq!(form.submit_label(&store), "Add Patient");
    }

    #[test]
    fn test_create_notifies() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::new();
        let notifier = CollectingNotifier::new();
        fill(&mut form);

        let outcome = form.submit(&mut store, &notifier).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Created(_)));

        let toasts = notifier.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, CREATED_MESSAGE);
    }

    #[test]
    fn test_select_loads_draft_and_switches_mode() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::try_with_records(vec![stored("abc")]).unwrap();

        assert!(form.select_by_id(&mut store, "abc"));
        assert_eq!(form.mode(&store), FormMode::Edit { id: "abc".into() });
        assert_eq!(form.submit_label(&store), "Save Changes");
        assert_eq!(form.draft(), &PatientDraft::from_record(&stored("abc")));
    }

    #[test]
    fn test_select_unknown_id() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::new();
        assert!(!form.select_by_id(&mut store, "nope"));
        assert_eq!(form.mode(&store), FormMode::Create);
    }

    #[test]
    fn test_clearing_selection_keeps_draft() {
        let mut form = PatientForm::new();
        fill(&mut form);
        form.on_selection_changed(None);
        assert_eq!(form.draft().pet_name, "Rex");
    }

    #[test]
    fn test_update_notifies_and_clears_selection() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::try_with_records(vec![stored("abc")]).unwrap();
        let notifier = CollectingNotifier::new();

        form.select_by_id(&mut store, "abc");
        form.set_field(Field::Symptoms, "fever");

        let outcome = form.submit(&mut store, &notifier).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Updated(_)));
        assert_eq!(outcome.record().id, "abc");
        assert!(store.selection().is_none());
        assert!(form.draft().is_blank());
        assert_eq!(notifier.drain()[0].title, UPDATED_MESSAGE);
    }

    #[test]
    fn test_update_of_missing_record_keeps_draft() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::new();
        let notifier = CollectingNotifier::new();

        form.select(&mut store, stored("gone"));
        let outcome = form.submit(&mut store, &notifier).unwrap();

        assert!(matches!(outcome, SubmitOutcome::UpdateMissed(_)));
        assert!(store.is_empty());
        assert!(store.selection().is_none());
        assert_eq!(form.draft().pet_name, "Luna");
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_error_flag_cleared_on_next_submit() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::new();

        assert!(form.submit(&mut store, &NoopNotifier).is_err());
        assert!(form.has_error());
        assert_eq!(form.error_message(), Some("All fields are required"));

        fill(&mut form);
        assert!(form.submit(&mut store, &NoopNotifier).is_ok());
        assert!(!form.has_error());
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn test_cancel_edit() {
        let mut form = PatientForm::new();
        let mut store = PatientStore::try_with_records(vec![stored("abc")]).unwrap();
        form.select_by_id(&mut store, "abc");

        form.cancel_edit(&mut store);
        assert_eq!(form.mode(&store), FormMode::Create);
        assert!(form.draft().is_blank());
        assert_eq!(store.len(), 1);
    }
}
