//! Domain models for the patient tracker.

mod draft;
mod patient;

pub use draft::*;
pub use patient::*;

/// Which record, if any, is being edited.
pub type Selection = Option<PatientRecord>;
