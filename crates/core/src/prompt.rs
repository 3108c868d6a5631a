//! Renders validated summary input into the instruction sent to the model

use crate::language::Language;
use crate::record::{Allergy, MedicalRecord, PatientProfile, SummaryInput, present};

/// Only the earliest records are rendered; the rest are dropped silently
pub const MAX_PROMPT_RECORDS: usize = 20;

const PERSONA: &str = "You are a compassionate medical AI assistant helping migrants maintain their health records. Generate a comprehensive, easy-to-understand health summary.";

const OUTPUT_INSTRUCTIONS: &str = r#"Generate a structured health summary with these sections using ## headers:
## Health Overview
## Critical Alerts
## Current Medications Summary
## Missing Records & Gaps
## Preventive Care Recommendations
## Health Insights

Be concise, use bullet points, highlight critical items. Note any missing important records like annual checkups, vaccinations, or screenings. Use clear, accessible language suitable for patients."#;

const UNKNOWN: &str = "Unknown";

/// Build the full summary prompt.
///
/// Pure function of `input`: identical input always yields a byte-identical prompt.
pub fn compile_prompt(input: &SummaryInput) -> String {
    let language_note = input
        .language
        .map(Language::translation_note)
        .unwrap_or_default();

    let records = input
        .records
        .iter()
        .take(MAX_PROMPT_RECORDS)
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{PERSONA}{language_note}\n\nPatient Info:\n{profile}\n- {allergies}\n\nMedical Records ({total} total):\n{records}\n\n{OUTPUT_INSTRUCTIONS}",
        profile = render_profile(&input.profile),
        allergies = render_allergies(&input.allergies),
        total = input.records.len(),
    )
}

/// `- [type] title | Diagnosis: .. | Meds: .. | Date: .. [CRITICAL]`
fn render_record(record: &MedicalRecord) -> String {
    let mut line = format!("- [{}] {}", record.record_type, record.title);

    if let Some(diagnosis) = present(&record.diagnosis) {
        line.push_str(" | Diagnosis: ");
        line.push_str(diagnosis);
    }
    if let Some(medications) = present(&record.medications) {
        line.push_str(" | Meds: ");
        line.push_str(medications);
    }
    if let Some(visit_date) = present(&record.visit_date) {
        line.push_str(" | Date: ");
        line.push_str(visit_date);
    }
    if record.is_critical() {
        line.push_str(" [CRITICAL]");
    }

    line
}

fn render_allergies(allergies: &[Allergy]) -> String {
    if allergies.is_empty() {
        return "No known allergies".to_string();
    }

    let entries = allergies
        .iter()
        .map(|a| format!("{}({})", a.allergen, a.severity))
        .collect::<Vec<_>>()
        .join(", ");

    format!("Allergies: {entries}")
}

fn render_profile(profile: &PatientProfile) -> String {
    format!(
        "- Name: {}\n- Blood Type: {}\n- DOB: {}",
        present(&profile.full_name).unwrap_or(UNKNOWN),
        present(&profile.blood_type).unwrap_or(UNKNOWN),
        present(&profile.date_of_birth).unwrap_or(UNKNOWN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(record_type: &str, title: &str) -> MedicalRecord {
        MedicalRecord {
            record_type: record_type.to_string(),
            title: title.to_string(),
            diagnosis: None,
            medications: None,
            visit_date: None,
            is_critical: None,
        }
    }

    fn input(records: Vec<MedicalRecord>) -> SummaryInput {
        SummaryInput {
            records,
            allergies: Vec::new(),
            profile: PatientProfile::default(),
            language: None,
        }
    }

    fn record_lines(prompt: &str) -> Vec<&str> {
        prompt.lines().filter(|l| l.starts_with("- [")).collect()
    }

    #[test]
    fn minimal_record_renders_type_and_title_only() {
        assert_eq!(render_record(&record("Visit", "Checkup")), "- [Visit] Checkup");
    }

    #[test]
    fn full_record_renders_all_fragments_in_order() {
        let rec = MedicalRecord {
            diagnosis: Some("Type 2 diabetes".to_string()),
            medications: Some("Metformin 500mg".to_string()),
            visit_date: Some("2024-02-11".to_string()),
            is_critical: Some(true),
            ..record("Lab", "HbA1c")
        };

        assert_eq!(
            render_record(&rec),
            "- [Lab] HbA1c | Diagnosis: Type 2 diabetes | Meds: Metformin 500mg | Date: 2024-02-11 [CRITICAL]"
        );
    }

    #[test]
    fn missing_fields_leave_no_fragment() {
        let rec = MedicalRecord {
            medications: Some("Ibuprofen".to_string()),
            diagnosis: Some(String::new()),
            is_critical: Some(false),
            ..record("Prescription", "Pain relief")
        };

        let line = render_record(&rec);
        assert_eq!(line, "- [Prescription] Pain relief | Meds: Ibuprofen");
        assert!(!line.contains("Diagnosis:"));
        assert!(!line.contains("Date:"));
        assert!(!line.contains("[CRITICAL]"));
    }

    #[test]
    fn allergies_render_comma_joined() {
        let allergies = vec![
            Allergy {
                allergen: "Penicillin".to_string(),
                severity: "severe".to_string(),
            },
            Allergy {
                allergen: "Peanuts".to_string(),
                severity: "mild".to_string(),
            },
        ];

        assert_eq!(
            render_allergies(&allergies),
            "Allergies: Penicillin(severe), Peanuts(mild)"
        );
        assert_eq!(render_allergies(&[]), "No known allergies");
    }

    #[test]
    fn profile_defaults_to_unknown() {
        let profile = PatientProfile {
            full_name: Some("Ravi Kumar".to_string()),
            blood_type: Some(String::new()),
            date_of_birth: None,
        };

        assert_eq!(
            render_profile(&profile),
            "- Name: Ravi Kumar\n- Blood Type: Unknown\n- DOB: Unknown"
        );
    }

    #[test]
    fn caps_records_at_twenty_in_order() {
        let records = (0..25).map(|i| record("Visit", &format!("Visit {i}"))).collect();
        let prompt = compile_prompt(&input(records));

        let expected: Vec<String> = (0..20).map(|i| format!("- [Visit] Visit {i}")).collect();
        assert_eq!(record_lines(&prompt), expected);
        assert!(prompt.contains("Medical Records (25 total):"));
    }

    #[test]
    fn compilation_is_deterministic() {
        let a = input(vec![record("Visit", "Checkup"), record("Lab", "CBC")]);
        let b = a.clone();

        assert_eq!(compile_prompt(&a), compile_prompt(&b));
    }

    #[test]
    fn localization_note_follows_language() {
        let mut tamil = input(vec![record("Visit", "Checkup")]);
        tamil.language = Some(Language::Tamil);
        let prompt = compile_prompt(&tamil);
        assert!(prompt.contains("Please include a Tamil translation after each section."));
        assert!(!prompt.contains("Malayalam"));

        let mut malayalam = input(vec![record("Visit", "Checkup")]);
        malayalam.language = Some(Language::Malayalam);
        let prompt = compile_prompt(&malayalam);
        assert!(prompt.contains("Please include a Malayalam translation after each section."));
        assert!(!prompt.contains("Tamil"));

        let prompt = compile_prompt(&input(vec![record("Visit", "Checkup")]));
        assert!(!prompt.contains("translation"));
    }

    #[test]
    fn golden_prompt_for_minimal_input() {
        let prompt = compile_prompt(&input(vec![record("Visit", "Checkup")]));

        let expected = format!(
            "{PERSONA}\n\nPatient Info:\n- Name: Unknown\n- Blood Type: Unknown\n- DOB: Unknown\n- No known allergies\n\nMedical Records (1 total):\n- [Visit] Checkup\n\n{OUTPUT_INSTRUCTIONS}"
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn template_lists_all_sections() {
        let prompt = compile_prompt(&input(vec![record("Visit", "Checkup")]));

        for header in [
            "## Health Overview",
            "## Critical Alerts",
            "## Current Medications Summary",
            "## Missing Records & Gaps",
            "## Preventive Care Recommendations",
            "## Health Insights",
        ] {
            assert!(prompt.contains(header), "missing {header}");
        }
        assert!(prompt.ends_with("suitable for patients."));
    }
}
