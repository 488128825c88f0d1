//! Upload validation for admin-supplied datasets. Uploads are checked
//! and stored for review; they do not feed the live catalog or question
//! bank.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::profile::RiasecType;

const PREVIEW_RECORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    Careers,
    SkillsFramework,
    CoachingExercises,
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "careers" => Ok(DatasetKind::Careers),
            "skills-framework" => Ok(DatasetKind::SkillsFramework),
            "coaching-exercises" => Ok(DatasetKind::CoachingExercises),
            other => Err(format!(
                "Unknown dataset kind '{other}', expected careers, \
                 skills-framework, or coaching-exercises"
            )),
        }
    }
}

/// What the admin sees after an upload: pass/fail, per-record problems,
/// and a short preview of what was parsed.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub record_count: usize,
    pub preview: Vec<Value>,
}

/// Validates an uploaded JSON document for the given dataset kind.
/// The document must be a non-empty JSON array; per-record checks vary
/// by kind. Errors fail the upload, warnings do not.
pub fn validate_dataset(kind: DatasetKind, raw: &[u8]) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let records: Vec<Value> = match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Array(records)) => records,
        Ok(_) => {
            errors.push("Document must be a JSON array of records".to_string());
            Vec::new()
        }
        Err(e) => {
            errors.push(format!("Invalid JSON: {e}"));
            Vec::new()
        }
    };

    if errors.is_empty() && records.is_empty() {
        errors.push("Dataset contains no records".to_string());
    }

    for (index, record) in records.iter().enumerate() {
        match kind {
            DatasetKind::Careers => check_career(index, record, &mut errors, &mut warnings),
            DatasetKind::SkillsFramework => check_skill(index, record, &mut errors, &mut warnings),
            DatasetKind::CoachingExercises => {
                check_exercise(index, record, &mut errors, &mut warnings)
            }
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        record_count: records.len(),
        preview: records.into_iter().take(PREVIEW_RECORDS).collect(),
    }
}

fn check_career(index: usize, record: &Value, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    for field in ["title", "description", "primaryType"] {
        if non_empty_str(record, field).is_none() {
            errors.push(format!("Record {index}: missing field '{field}'"));
        }
    }

    if let Some(primary) = non_empty_str(record, "primaryType") {
        if parse_riasec(primary).is_none() {
            errors.push(format!(
                "Record {index}: '{primary}' is not a RIASEC type"
            ));
        }
    }

    match record.get("requiredSkills").and_then(Value::as_array) {
        Some(skills) if !skills.is_empty() => {}
        _ => errors.push(format!(
            "Record {index}: 'requiredSkills' must be a non-empty array"
        )),
    }

    for field in ["salaryRange", "growthOutlook", "education"] {
        if non_empty_str(record, field).is_none() {
            warnings.push(format!("Record {index}: field '{field}' is empty"));
        }
    }
}

fn check_skill(index: usize, record: &Value, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    if non_empty_str(record, "name").is_none() {
        errors.push(format!("Record {index}: missing field 'name'"));
    }
    if non_empty_str(record, "category").is_none() {
        warnings.push(format!("Record {index}: field 'category' is empty"));
    }
}

fn check_exercise(
    index: usize,
    record: &Value,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    for field in ["question", "category"] {
        if non_empty_str(record, field).is_none() {
            errors.push(format!("Record {index}: missing field '{field}'"));
        }
    }
    if non_empty_str(record, "purpose").is_none() {
        warnings.push(format!("Record {index}: field 'purpose' is empty"));
    }
}

fn non_empty_str<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn parse_riasec(s: &str) -> Option<RiasecType> {
    RiasecType::ALL
        .into_iter()
        .find(|t| t.label().eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parses_kebab_case() {
        assert_eq!(
            "skills-framework".parse::<DatasetKind>().unwrap(),
            DatasetKind::SkillsFramework
        );
        assert!("resumes".parse::<DatasetKind>().is_err());
    }

    #[test]
    fn test_valid_careers_upload_passes_with_warnings() {
        let doc = json!([{
            "title": "Field Biologist",
            "description": "Study ecosystems in the field",
            "primaryType": "investigative",
            "requiredSkills": ["Analytical Thinking", "Adaptability"]
        }]);
        let report = validate_dataset(DatasetKind::Careers, doc.to_string().as_bytes());

        assert!(report.valid);
        assert_eq!(report.record_count, 1);
        assert!(report.errors.is_empty());
        // salaryRange, growthOutlook, education absent
        assert_eq!(report.warnings.len(), 3);
        assert_eq!(report.preview.len(), 1);
    }

    #[test]
    fn test_bad_primary_type_fails() {
        let doc = json!([{
            "title": "Oracle",
            "description": "Sees the future",
            "primaryType": "mystical",
            "requiredSkills": ["Foresight"]
        }]);
        let report = validate_dataset(DatasetKind::Careers, doc.to_string().as_bytes());

        assert!(!report.valid);
        assert!(report.errors[0].contains("mystical"));
    }

    #[test]
    fn test_non_array_document_fails() {
        let report = validate_dataset(DatasetKind::Careers, b"{\"title\": \"one\"}");
        assert!(!report.valid);
        assert_eq!(report.record_count, 0);
    }

    #[test]
    fn test_malformed_json_fails_without_panicking() {
        let report = validate_dataset(DatasetKind::SkillsFramework, b"not json at all");
        assert!(!report.valid);
        assert!(report.errors[0].starts_with("Invalid JSON"));
    }

    #[test]
    fn test_preview_is_capped_at_three_records() {
        let doc = json!([
            {"name": "Communication"},
            {"name": "Leadership"},
            {"name": "Teamwork"},
            {"name": "Creativity"},
            {"name": "Adaptability"}
        ]);
        let report = validate_dataset(DatasetKind::SkillsFramework, doc.to_string().as_bytes());

        assert!(report.valid);
        assert_eq!(report.record_count, 5);
        assert_eq!(report.preview.len(), 3);
    }
}
