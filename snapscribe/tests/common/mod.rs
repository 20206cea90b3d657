#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::json;
use wiremock::Request;

use snapscribe::config::{OcrConfig, OcrPreset, RecognitionSource};

pub const OCR_PATH: &str = "/parse/image";

pub fn ocr_config(server_uri: &str, preset: OcrPreset, source: RecognitionSource) -> OcrConfig {
    OcrConfig {
        api_key: "test-key".to_string(),
        endpoint: format!("{server_uri}{OCR_PATH}"),
        preset,
        recognition_source: source,
        timeout_secs: 5,
    }
}

/// A small colour image with a dark band, encoded in `format`.
pub fn sample_image_bytes(format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(48, 24, |x, y| {
        if (8..16).contains(&y) && x > 4 && x < 44 {
            Rgb([20, 30, 40])
        } else {
            Rgb([230, 225, 210])
        }
    });
    let mut output = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut output), format)
        .expect("encode sample image");
    output
}

pub fn parsed_body(texts: &[&str]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = texts
        .iter()
        .map(|text| {
            json!({
                "TextOverlay": { "Lines": [], "HasOverlay": false },
                "FileParseExitCode": 1,
                "ParsedText": text,
                "ErrorMessage": "",
                "ErrorDetails": ""
            })
        })
        .collect();

    json!({
        "ParsedResults": results,
        "OCRExitCode": 1,
        "IsErroredOnProcessing": false,
        "ProcessingTimeInMilliseconds": "312",
        "SearchablePDFURL": "Searchable PDF not generated as it was not requested."
    })
}

pub fn errored_body(messages: Option<&[&str]>) -> serde_json::Value {
    match messages {
        Some(messages) => json!({
            "OCRExitCode": 3,
            "IsErroredOnProcessing": true,
            "ErrorMessage": messages,
            "ProcessingTimeInMilliseconds": "0"
        }),
        None => json!({
            "OCRExitCode": 3,
            "IsErroredOnProcessing": true,
            "ProcessingTimeInMilliseconds": "0"
        }),
    }
}

/// Value of the multipart text field `name`, if present.
pub fn form_field(request: &Request, name: &str) -> Option<String> {
    let body = String::from_utf8_lossy(&request.body);
    let marker = format!("name=\"{name}\"\r\n\r\n");
    let start = body.find(&marker)? + marker.len();
    let end = body[start..].find("\r\n")?;
    Some(body[start..start + end].to_string())
}

/// Raw bytes of the uploaded `file` part.
pub fn file_part(request: &Request) -> Option<Vec<u8>> {
    let body = &request.body;
    let header_end = find(body, b"filename=\"image.png\"")?;
    let data_start = header_end + find(&body[header_end..], b"\r\n\r\n")? + 4;
    let data_len = find(&body[data_start..], b"\r\n--")?;
    Some(body[data_start..data_start + data_len].to_vec())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
