//! In-memory patient store with a selection slot.
//!
//! The collection is never mutated in place. Every successful mutation
//! installs a new snapshot and bumps [`PatientStore::revision`], so a front
//! end holding an older [`PatientStore::snapshot`] can tell it is stale with
//! `Arc::ptr_eq`.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Field, PatientDraft, PatientRecord, Selection};
use crate::validation::validate;

/// Reasons a preloaded patient list is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreloadError {
    #[error("Patient {id} is incomplete, missing: {}", field_keys(.missing))]
    Incomplete { id: String, missing: Vec<Field> },

    #[error("Patient record has an empty id")]
    EmptyId,

    #[error("Duplicate patient id: {0}")]
    DuplicateId(String),
}

fn field_keys(fields: &[Field]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

/// Working set of patient records plus the record selected for editing.
#[derive(Debug, Clone, Default)]
pub struct PatientStore {
    patients: Arc<Vec<PatientRecord>>,
    selection: Selection,
    revision: u64,
}

impl PatientStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with records (e.g. from a seed file).
    ///
    /// Every record must pass the same completeness check as the intake form
    /// and carry a non-empty id not used by any other record.
    pub fn try_with_records(records: Vec<PatientRecord>) -> Result<Self, PreloadError> {
        let mut seen = HashSet::new();
        for record in &records {
            if let Err(err) = validate(&PatientDraft::from_record(record)) {
                return Err(PreloadError::Incomplete {
                    id: record.id.clone(),
                    missing: err.missing,
                });
            }
            if record.id.is_empty() {
                return Err(PreloadError::EmptyId);
            }
            if !seen.insert(record.id.as_str()) {
                return Err(PreloadError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            patients: Arc::new(records),
            selection: None,
            revision: 0,
        })
    }

    /// Append a record. No duplicate-ID check is made.
    pub fn add(&mut self, record: PatientRecord) {
        tracing::debug!(id = %record.id, "adding patient");
        let mut next = Vec::with_capacity(self.patients.len() + 1);
        next.extend(self.patients.iter().cloned());
        next.push(record);
        self.install(next);
    }

    /// Replace the record whose ID equals `id`, keeping order.
    ///
    /// Returns `false` and leaves the collection untouched when no record
    /// matches.
    pub fn replace(&mut self, id: &str, record: PatientRecord) -> bool {
        if !self.contains(id) {
            tracing::warn!(id, "update skipped: no patient with this id");
            return false;
        }

        tracing::debug!(id, "replacing patient");
        let next = self
            .patients
            .iter()
            .map(|existing| {
                if existing.id == id {
                    record.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.install(next);
        true
    }

    /// Remove a record by ID, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: &str) -> Option<PatientRecord> {
        let Some(position) = self.patients.iter().position(|p| p.id == id) else {
            tracing::warn!(id, "remove skipped: no patient with this id");
            return None;
        };

        tracing::debug!(id, "removing patient");
        let mut next = self.patients.as_ref().clone();
        let removed = next.remove(position);
        self.install(next);

        if self.selection.as_ref().is_some_and(|s| s.id == id) {
            self.selection = None;
        }
        Some(removed)
    }

    /// Set or clear the selection slot.
    pub fn select(&mut self, selection: Selection) {
        match &selection {
            Some(record) => tracing::debug!(id = %record.id, "patient selected for editing"),
            None => tracing::debug!("selection cleared"),
        }
        self.selection = selection;
    }

    pub fn selection(&self) -> Option<&PatientRecord> {
        self.selection.as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&PatientRecord> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[PatientRecord] {
        &self.patients
    }

    /// Shared handle to the current collection.
    pub fn snapshot(&self) -> Arc<Vec<PatientRecord>> {
        Arc::clone(&self.patients)
    }

    /// Number of successful mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    fn install(&mut self, next: Vec<PatientRecord>) {
        self.patients = Arc::new(next);
        self.revision += 1;
    }
}
