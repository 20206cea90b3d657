use std::time::Duration;

use image::DynamicImage;
use reqwest::{multipart, Client};
use tracing::debug;

use crate::config::{OcrConfig, OcrPreset};
use crate::error::{Result, SnapscribeError};
use crate::preprocess::encode_png;

use super::types::OcrSpaceResponse;

const UPLOAD_FILE_NAME: &str = "image.png";
const UPLOAD_MIME: &str = "image/png";

/// Client for the OCR.space `parse/image` endpoint.
///
/// One call is one multipart POST; there are no retries.
#[derive(Clone, Debug)]
pub struct OcrSpaceClient {
    client: Client,
    config: OcrConfig,
}

impl OcrSpaceClient {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SnapscribeError::Configuration(
                "API key required for OCR.space".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SnapscribeError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn preset(&self) -> OcrPreset {
        self.config.preset
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Encode `image` as PNG and recognize it.
    pub async fn recognize(&self, image: &DynamicImage, language_code: &str) -> Result<String> {
        let png = encode_png(image)?;
        self.recognize_png(png, language_code).await
    }

    /// Recognize already-encoded PNG bytes.
    ///
    /// Every failure mode (transport, HTTP status, malformed JSON, a
    /// provider-side processing error) comes back as
    /// [`SnapscribeError::OcrService`].
    pub async fn recognize_png(&self, png: Vec<u8>, language_code: &str) -> Result<String> {
        let form = self.build_form(png, language_code)?;

        debug!(
            endpoint = %self.config.endpoint,
            preset = %self.config.preset,
            language = language_code,
            "Sending OCR request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SnapscribeError::OcrService(format!(
                        "OCR request timed out after {} seconds",
                        self.config.timeout_secs
                    ))
                } else {
                    SnapscribeError::OcrService(format!("OCR request failed: {e}"))
                }
            })?;

        let status = response.status();
        debug!("OCR response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SnapscribeError::OcrService(format!(
                "OCR service returned {status}: {}",
                body.trim()
            )));
        }

        let parsed: OcrSpaceResponse = response
            .json()
            .await
            .map_err(|e| SnapscribeError::OcrService(format!("Failed to parse OCR response: {e}")))?;

        if parsed.is_errored_on_processing {
            return Err(SnapscribeError::OcrService(parsed.first_error()));
        }

        Ok(parsed.text())
    }

    fn build_form(&self, png: Vec<u8>, language_code: &str) -> Result<multipart::Form> {
        let file_part = multipart::Part::bytes(png)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME)
            .map_err(|e| SnapscribeError::Internal(format!("Invalid MIME type: {e}")))?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("isOverlayRequired", "false")
            .text("apikey", self.config.api_key.clone())
            .text("language", language_code.to_string());

        if self.config.preset == OcrPreset::Enhanced {
            form = form
                .text("detectOrientation", "true")
                .text("scale", "true")
                .text("OCREngine", "2");
        }

        Ok(form)
    }
}
