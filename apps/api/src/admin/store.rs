use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::admin::validation::{DatasetKind, ValidationReport};

/// Metadata for one accepted upload. The raw payload is not retained,
/// only the validation outcome an admin needs for review.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedDataset {
    pub id: Uuid,
    pub kind: DatasetKind,
    pub filename: String,
    pub size_bytes: usize,
    pub record_count: usize,
    pub warnings: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct DatasetStore {
    inner: Arc<RwLock<Vec<UploadedDataset>>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &self,
        kind: DatasetKind,
        filename: String,
        size_bytes: usize,
        report: &ValidationReport,
    ) -> UploadedDataset {
        let dataset = UploadedDataset {
            id: Uuid::new_v4(),
            kind,
            filename,
            size_bytes,
            record_count: report.record_count,
            warnings: report.warnings.clone(),
            uploaded_at: Utc::now(),
        };

        self.inner
            .write()
            .expect("dataset store lock poisoned")
            .push(dataset.clone());
        dataset
    }

    /// Most recent first.
    pub fn list(&self) -> Vec<UploadedDataset> {
        let mut datasets = self
            .inner
            .read()
            .expect("dataset store lock poisoned")
            .clone();
        datasets.reverse();
        datasets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_report() -> ValidationReport {
        ValidationReport {
            valid: true,
            errors: vec![],
            warnings: vec!["Record 0: field 'category' is empty".to_string()],
            record_count: 2,
            preview: vec![],
        }
    }

    #[test]
    fn test_record_then_list_newest_first() {
        let store = DatasetStore::new();
        store.record(
            DatasetKind::Careers,
            "careers.json".to_string(),
            512,
            &passing_report(),
        );
        store.record(
            DatasetKind::SkillsFramework,
            "skills.json".to_string(),
            256,
            &passing_report(),
        );

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].filename, "skills.json");
        assert_eq!(listed[1].kind, DatasetKind::Careers);
        assert_eq!(listed[0].warnings.len(), 1);
    }
}
