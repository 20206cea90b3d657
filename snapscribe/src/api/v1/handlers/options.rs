use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;
use crate::ocr::LanguageOption;
use crate::preprocess::{PreprocessOption, ACCEPTED_EXTENSIONS};

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChoice {
    pub label: String,
    pub code: String,
}

/// Everything a client needs to build the upload form.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsData {
    pub preset: String,
    pub preprocess_options: Vec<PreprocessOption>,
    pub languages: Vec<LanguageChoice>,
    pub accepted_extensions: Vec<String>,
}

/// `GET /api/v1/options`
#[utoipa::path(
    get,
    path = "/api/v1/options",
    tag = "recognize",
    operation_id = "options.list",
    responses(
        (status = 200, description = "Selectable options for the active preset", body = OptionsData),
    )
)]
pub async fn list_options(State(state): State<AppState>) -> ApiResponse<OptionsData> {
    let preset = state.config.ocr.preset;

    ApiResponse::success(OptionsData {
        preset: preset.to_string(),
        preprocess_options: PreprocessOption::ALL.to_vec(),
        languages: LanguageOption::available(preset)
            .iter()
            .map(|lang| LanguageChoice {
                label: lang.label().to_string(),
                code: lang.code().to_string(),
            })
            .collect(),
        accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    })
}
