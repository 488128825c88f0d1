use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::admin::store::UploadedDataset;
use crate::admin::validation::{validate_dataset, DatasetKind, ValidationReport};
use crate::errors::AppError;
use crate::llm_client::LlmSettings;
use crate::state::AppState;

/// LLM settings as shown to admins. The key itself is never echoed back,
/// only whether one is set.
#[derive(Debug, Serialize)]
pub struct LlmConfigView {
    pub endpoint: String,
    pub model: String,
    pub api_key_set: bool,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl From<&LlmSettings> for LlmConfigView {
    fn from(settings: &LlmSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key_set: settings.api_key.is_some(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

/// Partial update; omitted fields keep their current value. An empty
/// `api_key` string clears the key.
#[derive(Debug, Deserialize)]
pub struct LlmConfigUpdate {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// GET /api/v1/admin/llm-config
pub async fn handle_get_llm_config(State(state): State<AppState>) -> Json<LlmConfigView> {
    let settings = state
        .llm_settings
        .read()
        .expect("LLM settings lock poisoned");
    Json(LlmConfigView::from(&*settings))
}

/// PUT /api/v1/admin/llm-config
pub async fn handle_update_llm_config(
    State(state): State<AppState>,
    Json(update): Json<LlmConfigUpdate>,
) -> Result<Json<LlmConfigView>, AppError> {
    if let Some(endpoint) = &update.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(AppError::Validation(
                "Endpoint must be an http(s) URL".to_string(),
            ));
        }
    }
    if let Some(model) = &update.model {
        if model.trim().is_empty() {
            return Err(AppError::Validation("Model must not be empty".to_string()));
        }
    }
    if let Some(max_tokens) = update.max_tokens {
        if max_tokens == 0 {
            return Err(AppError::Validation(
                "max_tokens must be at least 1".to_string(),
            ));
        }
    }
    if let Some(temperature) = update.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AppError::Validation(
                "temperature must be between 0 and 2".to_string(),
            ));
        }
    }

    let mut settings = state
        .llm_settings
        .write()
        .expect("LLM settings lock poisoned");

    if let Some(endpoint) = update.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(model) = update.model {
        settings.model = model;
    }
    if let Some(api_key) = update.api_key {
        settings.api_key = Some(api_key).filter(|k| !k.is_empty());
    }
    if let Some(max_tokens) = update.max_tokens {
        settings.max_tokens = max_tokens;
    }
    if let Some(temperature) = update.temperature {
        settings.temperature = temperature;
    }

    info!(
        endpoint = %settings.endpoint,
        model = %settings.model,
        "LLM configuration updated"
    );
    Ok(Json(LlmConfigView::from(&*settings)))
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub dataset: Option<UploadedDataset>,
    pub report: ValidationReport,
}

/// POST /api/v1/admin/datasets
///
/// Multipart upload with a `kind` field and a `file` part. The document
/// is validated; only passing uploads are recorded.
pub async fn handle_upload_dataset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut kind: Option<DatasetKind> = None;
    let mut filename = String::from("upload.json");
    let mut payload: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        // field.text()/bytes() consume the field, so copy the name out first
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("kind") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable kind field: {e}")))?;
                kind = Some(value.parse().map_err(AppError::Validation)?);
            }
            Some("file") => {
                if let Some(name) = field.file_name() {
                    filename = name.to_string();
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file field: {e}")))?;
                payload = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| AppError::Validation("Missing 'kind' field".to_string()))?;
    let payload =
        payload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let report = validate_dataset(kind, &payload);
    if !report.valid {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(UploadResponse {
                dataset: None,
                report,
            }),
        ));
    }

    let dataset = state
        .datasets
        .record(kind, filename, payload.len(), &report);
    info!(
        dataset_id = %dataset.id,
        kind = ?dataset.kind,
        records = dataset.record_count,
        "dataset accepted"
    );
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            dataset: Some(dataset),
            report,
        }),
    ))
}

/// GET /api/v1/admin/datasets
pub async fn handle_list_datasets(State(state): State<AppState>) -> Json<Vec<UploadedDataset>> {
    Json(state.datasets.list())
}
