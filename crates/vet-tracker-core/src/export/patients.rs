//! Patient list export for hand-off to other tools.

use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;
use crate::store::PatientStore;

const CSV_HEADER: &str = "id,pet_name,owner_name,email,admission_date,symptoms\n";

/// Snapshot of the patient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientExport {
    /// Export timestamp
    pub exported_at: String,
    /// Records in store order
    pub patients: Vec<PatientRecord>,
    /// Total record count
    pub total: usize,
}

impl PatientExport {
    /// Capture the store's current records.
    pub fn from_store(store: &PatientStore) -> Self {
        let patients = store.records().to_vec();
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            total: patients.len(),
            patients,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);

        for patient in &self.patients {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                escape_csv(&patient.id),
                escape_csv(&patient.pet_name),
                escape_csv(&patient.owner_name),
                escape_csv(&patient.email),
                escape_csv(&patient.admission_date),
                escape_csv(&patient.symptoms),
            ));
        }

        csv
    }
}

/// Escape a field for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
