//! Form draft models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PatientRecord;

/// The five content fields of a patient record, in form order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Field {
    PetName,
    OwnerName,
    Email,
    AdmissionDate,
    Symptoms,
}

/// How a field is rendered by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    MultiLine,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::PetName,
        Field::OwnerName,
        Field::Email,
        Field::AdmissionDate,
        Field::Symptoms,
    ];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::PetName => "Pet Name",
            Field::OwnerName => "Owner Name",
            Field::Email => "E-mail",
            Field::AdmissionDate => "Admission",
            Field::Symptoms => "Symptoms",
        }
    }

    /// Placeholder text for an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::PetName => "Name of the pet",
            Field::OwnerName => "Name of the owner",
            Field::Email => "Contact e-mail",
            Field::AdmissionDate => "YYYY-MM-DD",
            Field::Symptoms => "Describe the symptoms",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::PetName | Field::OwnerName => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::AdmissionDate => InputKind::Date,
            Field::Symptoms => InputKind::MultiLine,
        }
    }

    /// Short machine name, as accepted by [`Field::from_str`].
    pub fn key(self) -> &'static str {
        match self {
            Field::PetName => "pet",
            Field::OwnerName => "owner",
            Field::Email => "email",
            Field::AdmissionDate => "date",
            Field::Symptoms => "symptoms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pet" | "name" | "pet_name" | "petname" => Ok(Field::PetName),
            "owner" | "owner_name" | "ownername" => Ok(Field::OwnerName),
            "email" | "e-mail" => Ok(Field::Email),
            "date" | "admission" | "admission_date" | "admissiondate" => {
                Ok(Field::AdmissionDate)
            }
            "symptoms" => Ok(Field::Symptoms),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// The form's in-progress, unvalidated copy of a record's content fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub pet_name: String,
    pub owner_name: String,
    pub email: String,
    pub admission_date: String,
    pub symptoms: String,
}

impl PatientDraft {
    /// Copy a record's content fields into a fresh draft.
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            pet_name: record.pet_name.clone(),
            owner_name: record.owner_name.clone(),
            email: record.email.clone(),
            admission_date: record.admission_date.clone(),
            symptoms: record.symptoms.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PetName => &self.pet_name,
            Field::OwnerName => &self.owner_name,
            Field::Email => &self.email,
            Field::AdmissionDate => &self.admission_date,
            Field::Symptoms => &self.symptoms,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::PetName => &mut self.pet_name,
            Field::OwnerName => &mut self.owner_name,
            Field::Email => &mut self.email,
            Field::AdmissionDate => &mut self.admission_date,
            Field::Symptoms => &mut self.symptoms,
        };
        *slot = value.into();
    }

    /// Fields holding an empty string, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
