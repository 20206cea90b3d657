mod common;

use image::DynamicImage;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use snapscribe::config::{OcrPreset, RecognitionSource};
use snapscribe::error::SnapscribeError;
use snapscribe::ocr::{LanguageOption, OcrSpaceClient};

use common::{errored_body, file_part, form_field, ocr_config, parsed_body, OCR_PATH};

async fn client_for(server: &MockServer, preset: OcrPreset) -> OcrSpaceClient {
    OcrSpaceClient::new(&ocr_config(
        &server.uri(),
        preset,
        RecognitionSource::Original,
    ))
    .expect("client")
}

fn image() -> DynamicImage {
    DynamicImage::new_rgb8(16, 8)
}

#[tokio::test]
async fn concatenates_parsed_text_in_order_and_trims() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(parsed_body(&["foo ", "bar"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    let text = client.recognize(&image(), "eng").await.unwrap();

    assert_eq!(text, "foo bar");
}

#[tokio::test]
async fn empty_parsed_text_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(parsed_body(&["  \r\n"])))
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    let text = client.recognize(&image(), "eng").await.unwrap();

    assert_eq!(text, "");
}

#[tokio::test]
async fn processing_error_carries_first_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(errored_body(Some(&["bad image", "other detail"]))),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    let err = client.recognize(&image(), "eng").await.unwrap_err();

    assert!(matches!(err, SnapscribeError::OcrService(_)));
    assert_eq!(err.to_string(), "bad image");
}

#[tokio::test]
async fn processing_error_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(errored_body(None)))
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    let err = client.recognize(&image(), "eng").await.unwrap_err();

    assert_eq!(err.to_string(), "Unknown error.");
}

#[tokio::test]
async fn invalid_json_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    let err = client.recognize(&image(), "eng").await.unwrap_err();

    assert!(matches!(err, SnapscribeError::OcrService(ref msg) if msg.contains("parse")));
}

#[tokio::test]
async fn http_error_status_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("The API key is invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    let err = client.recognize(&image(), "eng").await.unwrap_err();

    match err {
        SnapscribeError::OcrService(msg) => {
            assert!(msg.contains("403"), "{msg}");
            assert!(msg.contains("The API key is invalid"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn enhanced_preset_sends_all_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(parsed_body(&["ok"])))
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Enhanced).await;
    client
        .recognize(&image(), LanguageOption::Spanish.code())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    assert_eq!(form_field(request, "isOverlayRequired").as_deref(), Some("false"));
    assert_eq!(form_field(request, "apikey").as_deref(), Some("test-key"));
    assert_eq!(form_field(request, "language").as_deref(), Some("spa"));
    assert_eq!(form_field(request, "detectOrientation").as_deref(), Some("true"));
    assert_eq!(form_field(request, "scale").as_deref(), Some("true"));
    assert_eq!(form_field(request, "OCREngine").as_deref(), Some("2"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\"; filename=\"image.png\""));
    assert!(body.contains("Content-Type: image/png"));

    let png = file_part(request).expect("file part");
    let decoded = image::load_from_memory(&png).expect("uploaded file is a PNG");
    assert_eq!((decoded.width(), decoded.height()), (16, 8));
}

#[tokio::test]
async fn basic_preset_omits_enhanced_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OCR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(parsed_body(&["ok"])))
        .mount(&server)
        .await;

    let client = client_for(&server, OcrPreset::Basic).await;
    client.recognize(&image(), "fre").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    assert_eq!(form_field(request, "language").as_deref(), Some("fre"));
    assert_eq!(form_field(request, "apikey").as_deref(), Some("test-key"));
    assert_eq!(form_field(request, "detectOrientation"), None);
    assert_eq!(form_field(request, "scale"), None);
    assert_eq!(form_field(request, "OCREngine"), None);
}
