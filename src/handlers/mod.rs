//! HTTP handlers for the generation gateway.

use crate::error::AppError;
use crate::services::extract::Attachment;
use crate::services::prompt;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// A file part read out of a multipart form.
struct UploadedFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Read the optional `prompt` field and the file part from a multipart
/// form. The prompt defaults to the empty string when absent.
async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(String, Option<UploadedFile>), AppError> {
    let mut prompt = String::new();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        match field.name() {
            Some("prompt") => {
                prompt = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?
                    .to_vec();
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    Ok((prompt, file))
}

/// Run a plain generation request and wrap the result under `field`.
async fn run_plain(
    state: &AppState,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
    field: &'static str,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    tracing::info!(endpoint = field, prompt_len = req.prompt.len(), "Generating");

    let text = state
        .provider
        .generate(&req.prompt, None, &GenerationParams::default())
        .await?;

    Ok(Json(json!({ field: text })))
}

pub async fn generate_srs(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    run_plain(&state, payload, "srs").await
}

pub async fn generate_brd(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    run_plain(&state, payload, "brd").await
}

pub async fn generate_frs(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    run_plain(&state, payload, "frs").await
}

pub async fn generate_user_stories(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    run_plain(&state, payload, "userStories").await
}

/// Structured-document generation from a JSON prompt.
pub async fn generate_doc(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    tracing::info!(prompt_len = req.prompt.len(), "Generating structured document");

    let assembled = prompt::assemble(Some(prompt::DOC_PREAMBLE), &req.prompt, None);
    let text = state
        .provider
        .generate(&assembled, None, &GenerationParams::structured_document())
        .await?;

    Ok(Json(json!({ "doc": text })))
}

/// Structured-document generation from an uploaded image.
pub async fn generate_doc_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let (user_prompt, file) = read_upload(&mut multipart).await?;
    let file = file.ok_or_else(|| AppError::Validation("Missing file part".to_string()))?;

    tracing::info!(
        file_name = %file.file_name,
        content_type = %file.content_type,
        size = file.bytes.len(),
        "Generating document from image"
    );

    let attachment = Attachment::image(file.bytes, file.content_type)?;
    let assembled = prompt::assemble(Some(prompt::DOC_PREAMBLE), &user_prompt, None);
    let text = state
        .provider
        .generate(
            &assembled,
            attachment.image_part(),
            &GenerationParams::structured_document(),
        )
        .await?;

    Ok(Json(json!({ "doc": text })))
}

/// Structured-document generation from an uploaded PDF or DOCX file.
pub async fn generate_doc_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let (user_prompt, file) = read_upload(&mut multipart).await?;
    let file = file.ok_or_else(|| AppError::Validation("Missing file part".to_string()))?;

    tracing::info!(
        file_name = %file.file_name,
        size = file.bytes.len(),
        "Generating document from uploaded file"
    );

    let attachment = Attachment::document(&file.file_name, file.bytes)?;
    let extracted = attachment.extracted_text()?;
    let assembled = prompt::assemble(
        Some(prompt::DOC_PREAMBLE),
        &user_prompt,
        extracted.as_deref(),
    );
    let text = state
        .provider
        .generate(&assembled, None, &GenerationParams::structured_document())
        .await?;

    Ok(Json(json!({ "doc": text })))
}

/// List the model identifiers the remote service reports.
pub async fn list_models(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let models = state.provider.list_models().await?;
    Ok(Json(json!({ "models": models })))
}

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "LLM Service" }))
}
