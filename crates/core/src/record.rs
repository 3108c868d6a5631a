use serde::Deserialize;

use crate::error::SummaryError;
use crate::language::Language;

/// Inbound summary request body, as sent by the health-record app
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub records: Option<Vec<MedicalRecord>>,
    pub allergies: Option<Vec<Allergy>>,
    pub profile: Option<PatientProfile>,
    pub language: Option<String>,
}

/// A single clinical record (visit, lab result, prescription, ...)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub record_type: String,
    pub title: String,
    pub diagnosis: Option<String>,
    pub medications: Option<String>,
    pub visit_date: Option<String>,
    pub is_critical: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Allergy {
    pub allergen: String,
    pub severity: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub full_name: Option<String>,
    pub blood_type: Option<String>,
    pub date_of_birth: Option<String>,
}

/// Validated input for prompt compilation.
///
/// `records` is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInput {
    pub records: Vec<MedicalRecord>,
    pub allergies: Vec<Allergy>,
    pub profile: PatientProfile,
    pub language: Option<Language>,
}

impl SummaryRequest {
    /// Parse a raw JSON body
    pub fn from_slice(body: &[u8]) -> Result<Self, SummaryError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Check the one hard precondition (at least one record) and fill defaults
    pub fn validate(self) -> Result<SummaryInput, SummaryError> {
        let records = match self.records {
            Some(records) if !records.is_empty() => records,
            _ => return Err(SummaryError::NoRecords),
        };

        Ok(SummaryInput {
            records,
            allergies: self.allergies.unwrap_or_default(),
            profile: self.profile.unwrap_or_default(),
            language: Language::from_code(self.language.as_deref()),
        })
    }
}

impl MedicalRecord {
    pub fn is_critical(&self) -> bool {
        self.is_critical.unwrap_or(false)
    }
}

/// Treat empty strings the same as missing fields
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
