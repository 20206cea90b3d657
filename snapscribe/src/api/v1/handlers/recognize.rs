use axum::extract::State;

use crate::api::extractors::RecognizeForm;
use crate::api::state::AppState;
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::error::SnapscribeError;
use crate::presenter::RenderModel;

/// `POST /api/v1/recognize`
///
/// Accepts a multipart form with a `file` field and optional `preprocess`
/// (`None`, `Grayscale`, `Threshold`, `Blur`) and `language` (label or
/// provider code) fields. A failed OCR call still returns 200 with the
/// error inside `outcome`, next to both images.
#[utoipa::path(
    post,
    path = "/api/v1/recognize",
    tag = "recognize",
    operation_id = "recognize",
    request_body(content_type = "multipart/form-data", content = String, description = "Image upload with optional preprocess and language fields"),
    responses(
        (status = 200, description = "Images and OCR outcome", body = RenderModel),
        (status = 400, description = "Invalid form or undecodable image", body = ApiError),
    )
)]
pub async fn recognize(
    State(state): State<AppState>,
    form: Result<RecognizeForm, SnapscribeError>,
) -> ApiResponse<RenderModel> {
    let (upload, options) = match form.and_then(|f| f.into_parts(state.config.ocr.preset)) {
        Ok(parts) => parts,
        Err(e) => return ApiResponse::from(e),
    };

    match state.pipeline.handle(upload, options).await {
        Ok(model) => ApiResponse::success(model),
        Err(e) => ApiResponse::from(e),
    }
}
