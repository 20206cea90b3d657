use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::handlers;
use super::response;
use crate::presenter;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snapscribe API",
        version = "1.0.0",
        description = "Upload an image, optionally preprocess it, and extract its text through OCR.space.",
    ),
    paths(
        handlers::health::health_check,
        handlers::options::list_options,
        handlers::recognize::recognize,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Recognition
        crate::preprocess::PreprocessOption,
        crate::ocr::LanguageOption,
        presenter::RenderModel,
        presenter::RenderedImage,
        presenter::Outcome,
        handlers::options::OptionsData,
        handlers::options::LanguageChoice,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::OcrStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "recognize", description = "Image preprocessing and text extraction"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
