//! Axum route handlers for the Diagnosis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::diagnosis::assembler::build_user_message;
use crate::diagnosis::models::{DiagnosisProfile, EquipmentContext, SymptomSet};
use crate::diagnosis::prompts;
use crate::errors::AppError;
use crate::state::AppState;

/// Upper bound the original form widget applied to equipment age.
const MAX_AGE_YEARS: u8 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    #[serde(default)]
    pub profile: DiagnosisProfile,
    #[serde(default)]
    pub equipment: EquipmentContext,
    #[serde(default)]
    pub symptoms: SymptomSet,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    pub profile: DiagnosisProfile,
    pub model: &'static str,
    pub diagnosis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/diagnosis
///
/// Assembles the prompt from the submitted fields and makes one completion
/// call. An empty description is rejected before the backend is touched;
/// any backend failure comes back as a single visible error and the user
/// may resubmit.
pub async fn handle_diagnose(
    State(state): State<AppState>,
    Json(request): Json<DiagnoseRequest>,
) -> Result<Json<DiagnoseResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "Por favor, descreva o problema antes de solicitar a análise.".to_string(),
        ));
    }

    if request.equipment.age_years > MAX_AGE_YEARS {
        return Err(AppError::Validation(format!(
            "age_years must be between 0 and {MAX_AGE_YEARS}"
        )));
    }

    let system = prompts::system_prompt(request.profile);
    let params = prompts::params(request.profile);
    let user = build_user_message(
        request.profile,
        &request.equipment,
        &request.symptoms,
        &request.description,
    );

    let diagnosis = state
        .llm
        .complete(system, &user, params)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(DiagnoseResponse {
        profile: request.profile,
        model: params.model,
        diagnosis,
    }))
}
