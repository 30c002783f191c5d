//! `POST /api/prompts/improve`: validate, improve, persist, respond.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

use super::AppState;
use crate::brain::BriefMetadata;
use crate::error::AppError;
use crate::models::{ImprovePromptRequest, NewPrompt, Prompt};

/// Message returned with every 500.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to improve prompt. Please try again.";

/// Stored prompt as returned to the client
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptData {
    pub id: i64,
    pub original_prompt: String,
    pub improved_prompt: String,
    pub metadata: BriefMetadata,
}

impl From<Prompt> for PromptData {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            original_prompt: prompt.original_prompt,
            improved_prompt: prompt.improved_prompt,
            metadata: prompt.metadata.0,
        }
    }
}

/// Success envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ImproveResponse {
    pub success: bool,
    pub data: PromptData,
}

/// 500 envelope. `error` is `null` unless debug mode is on.
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
    pub error: Option<String>,
}

/// 422 body: first message plus every message keyed by field
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationFailure {
    fn from(errors: &ValidationErrors) -> Self {
        let errors: BTreeMap<String, Vec<String>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("The {} field is invalid ({}).", field, e.code),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        let message = errors
            .values()
            .flat_map(|messages| messages.first())
            .next()
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        Self { message, errors }
    }
}

/// Error type for the prompt handlers
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be extracted as JSON
    Rejected(JsonRejection),
    /// Validation or runtime failure
    Failed { error: AppError, debug: bool },
}

impl ApiError {
    fn failed(error: impl Into<AppError>, debug: bool) -> Self {
        ApiError::Failed {
            error: error.into(),
            debug,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rejected(rejection) => {
                let body = ValidationFailure {
                    message: rejection.body_text(),
                    errors: BTreeMap::new(),
                };
                (rejection.status(), Json(body)).into_response()
            }
            ApiError::Failed {
                error: AppError::Validation(errors),
                ..
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationFailure::from(&errors)),
            )
                .into_response(),
            ApiError::Failed { error, debug } => {
                error!(error = %error, "failed to improve prompt");
                let body = FailureResponse {
                    success: false,
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                    error: debug.then(|| error.to_string()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Improve a user's rough website idea into a structured brief and store it.
pub async fn improve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImprovePromptRequest>, JsonRejection>,
) -> Result<Json<ImproveResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::Rejected)?;
    request
        .validate()
        .map_err(|e| ApiError::failed(e, state.debug))?;

    let brief = state.improver.improve(request.trimmed_prompt());

    let prompt = state
        .store
        .save(NewPrompt::from(brief))
        .await
        .map_err(|e| ApiError::failed(e, state.debug))?;

    info!(id = prompt.id, category = %prompt.metadata.category, "prompt improved");

    Ok(Json(ImproveResponse {
        success: true,
        data: PromptData::from(prompt),
    }))
}
