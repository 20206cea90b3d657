use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::api::extractors::RecognizeForm;
use crate::api::state::AppState;
use crate::error::SnapscribeError;
use crate::presenter::html;

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(html::render_form(state.config.ocr.preset))
}

/// `POST /recognize`
///
/// HTML counterpart of the JSON endpoint. OCR failures are shown inline on
/// the result page; only requests that yield no image get an error page.
pub async fn recognize_page(
    State(state): State<AppState>,
    form: Result<RecognizeForm, SnapscribeError>,
) -> Response {
    let result = match form.and_then(|f| f.into_parts(state.config.ocr.preset)) {
        Ok((upload, options)) => state.pipeline.handle(upload, options).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(model) => Html(html::render_result(&model)).into_response(),
        Err(e) => error_page(e),
    }
}

fn error_page(err: SnapscribeError) -> Response {
    let (status, message) = match &err {
        SnapscribeError::Validation(msg) | SnapscribeError::Decode(msg) => {
            (StatusCode::BAD_REQUEST, msg.clone())
        }
        SnapscribeError::OcrService(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        SnapscribeError::Configuration(_) | SnapscribeError::Internal(_) => {
            tracing::error!(error = %err, "Internal error while rendering result page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    };

    (status, Html(html::render_error_page(&message))).into_response()
}
