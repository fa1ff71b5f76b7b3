//! Presentational pieces shared by front ends.

use crate::form::PatientForm;
use crate::models::{Field, InputKind};
use crate::store::PatientStore;
use crate::validation::REQUIRED_FIELDS_MESSAGE;

/// Page heading.
pub struct Header;

impl Header {
    pub const TITLE: &'static str = "Patient Tracking";
    pub const SUBTITLE: &'static str = "Veterinary";

    pub fn render() -> String {
        format!("{} {}", Self::TITLE, Self::SUBTITLE)
    }
}

/// Inline validation message.
pub struct ErrorBanner;

impl ErrorBanner {
    /// The message when `visible`, nothing otherwise.
    pub fn render(visible: bool) -> Option<&'static str> {
        visible.then_some(REQUIRED_FIELDS_MESSAGE)
    }
}

/// One input as a front end should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub value: String,
}

/// Snapshot of everything needed to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub error: Option<&'static str>,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
}

impl FormView {
    pub fn new(form: &PatientForm, store: &PatientStore) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                kind: field.input_kind(),
                value: form.draft().get(field).to_string(),
            })
            .collect();

        Self {
            heading: "Intake Form",
            tagline: "Add patients and manage them",
            error: form.error_message(),
            fields,
            submit_label: form.submit_label(store),
        }
    }
}
