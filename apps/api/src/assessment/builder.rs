//! Validation and scoring of raw assessment submissions before they land
//! on the profile.

use std::collections::{BTreeMap, HashMap};

use crate::data::questions::{MAX_RAW_SUM, RIASEC_QUESTIONS};
use crate::errors::AppError;
use crate::models::profile::{RiasecScores, RiasecType};

pub const MIN_WORK_VALUES: usize = 3;
const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Turns a complete set of question ratings into per-dimension scores.
///
/// Every question in the bank must be answered with a 1-5 rating and
/// unknown question ids are rejected. Each dimension's raw sum is
/// rescaled to 0-100: round(raw / 20 * 100).
pub fn score_riasec(answers: &HashMap<String, u8>) -> Result<RiasecScores, AppError> {
    for (id, rating) in answers {
        if RIASEC_QUESTIONS.iter().all(|q| q.id != id) {
            return Err(AppError::Validation(format!("Unknown question id: {id}")));
        }
        if !RATING_RANGE.contains(rating) {
            return Err(AppError::Validation(format!(
                "Rating for {id} must be between 1 and 5, got {rating}"
            )));
        }
    }

    let mut raw_sums: HashMap<RiasecType, u32> = HashMap::new();
    for question in &RIASEC_QUESTIONS {
        let rating = answers.get(question.id).ok_or_else(|| {
            AppError::Validation(format!("Missing answer for question {}", question.id))
        })?;
        *raw_sums.entry(question.riasec_type).or_default() += u32::from(*rating);
    }

    let mut scores = RiasecScores::default();
    for riasec_type in RiasecType::ALL {
        let raw = raw_sums.get(&riasec_type).copied().unwrap_or(0);
        let scaled = (f64::from(raw) / f64::from(MAX_RAW_SUM) * 100.0).round() as u8;
        scores.set(riasec_type, scaled);
    }
    Ok(scores)
}

/// Checks a skills submission: at least one skill, every confidence 1-5.
/// Skill labels are free-form, so uploads or future frameworks do not
/// need a code change here.
pub fn validate_confidence(
    confidence: &BTreeMap<String, u8>,
) -> Result<(), AppError> {
    if confidence.is_empty() {
        return Err(AppError::Validation(
            "At least one skill confidence rating is required".to_string(),
        ));
    }
    for (skill, rating) in confidence {
        if !RATING_RANGE.contains(rating) {
            return Err(AppError::Validation(format!(
                "Confidence for '{skill}' must be between 1 and 5, got {rating}"
            )));
        }
    }
    Ok(())
}

/// Checks a work-values submission: at least three distinct values.
/// Selection order is preserved, it is meaningful downstream.
pub fn validate_values(values: &[String]) -> Result<(), AppError> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if seen.contains(&value.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate work value: {value}"
            )));
        }
        seen.push(value);
    }
    if values.len() < MIN_WORK_VALUES {
        return Err(AppError::Validation(format!(
            "Select at least {MIN_WORK_VALUES} work values"
        )));
    }
    Ok(())
}
