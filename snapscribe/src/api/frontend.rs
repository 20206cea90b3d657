use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "frontend/assets"]
struct FrontendAssets;

pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let target = path.trim_start_matches('/');

    if target.is_empty() || target.contains("..") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    response_for_file(target).unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
}

fn response_for_file(path: &str) -> Option<Response> {
    let file = FrontendAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut response = Response::new(Body::from(file.data.into_owned()));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.as_ref()).ok()?,
    );
    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded_with_css_mime() {
        let response = response_for_file("style.css").expect("style.css should be embedded");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }

    #[test]
    fn missing_asset_is_none() {
        assert!(response_for_file("nope.js").is_none());
    }

    #[tokio::test]
    async fn traversal_is_rejected() {
        let response = serve_asset(Path("../Cargo.toml".to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
