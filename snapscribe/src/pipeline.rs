use image::DynamicImage;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::{OcrConfig, RecognitionSource};
use crate::error::{Result, SnapscribeError};
use crate::ocr::{LanguageOption, OcrSpaceClient};
use crate::preprocess::{self, PreprocessOption};
use crate::presenter::{Outcome, RenderModel, RenderedImage};

/// One uploaded file as received from the form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

/// Options selected alongside the upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecognizeOptions {
    pub preprocess: PreprocessOption,
    pub language: LanguageOption,
}

struct Prepared {
    original: DynamicImage,
    processed: DynamicImage,
    original_view: RenderedImage,
    processed_view: RenderedImage,
}

/// Request handler turning one submission into a [`RenderModel`].
///
/// Holds no per-request state: every call starts from the upload it is given.
#[derive(Clone, Debug)]
pub struct Pipeline {
    client: OcrSpaceClient,
    recognition_source: RecognitionSource,
}

impl Pipeline {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        Ok(Self {
            client: OcrSpaceClient::new(config)?,
            recognition_source: config.recognition_source,
        })
    }

    pub fn client(&self) -> &OcrSpaceClient {
        &self.client
    }

    pub fn recognition_source(&self) -> RecognitionSource {
        self.recognition_source
    }

    /// Decode, filter, recognize and assemble the render model.
    ///
    /// Only an undecodable upload fails the call, since there is nothing to
    /// display. OCR failures are folded into the returned model.
    pub async fn handle(&self, upload: Upload, options: RecognizeOptions) -> Result<RenderModel> {
        let request_id = Uuid::new_v4().to_string();
        self.recognize_upload(request_id, upload, options).await
    }

    #[instrument(
        name = "recognize",
        skip_all,
        fields(
            request_id = %request_id,
            preprocess = %options.preprocess,
            language = options.language.code(),
        )
    )]
    async fn recognize_upload(
        &self,
        request_id: String,
        upload: Upload,
        options: RecognizeOptions,
    ) -> Result<RenderModel> {
        info!(
            file_name = upload.file_name.as_deref().unwrap_or("<unnamed>"),
            bytes = upload.bytes.len(),
            "Processing upload"
        );

        let preprocess_option = options.preprocess;
        let prepared = tokio::task::spawn_blocking(move || prepare(&upload.bytes, preprocess_option))
            .await
            .map_err(|e| SnapscribeError::Internal(format!("Preprocessing task panicked: {e}")))??;

        let target = match self.recognition_source {
            RecognitionSource::Original => &prepared.original,
            RecognitionSource::Processed => &prepared.processed,
        };

        let result = self.client.recognize(target, options.language.code()).await;
        match &result {
            Ok(text) => info!(chars = text.chars().count(), "OCR completed"),
            Err(e) => warn!(error = %e, "OCR failed"),
        }

        Ok(RenderModel {
            request_id,
            original: prepared.original_view,
            processed: prepared.processed_view,
            preprocess: options.preprocess,
            language: options.language.code().to_string(),
            outcome: Outcome::from_result(result),
        })
    }
}

fn prepare(bytes: &[u8], option: PreprocessOption) -> Result<Prepared> {
    let original = preprocess::decode_upload(bytes)?;
    let processed = preprocess::apply(&original, option);

    Ok(Prepared {
        original_view: RenderedImage::from_image(&original)?,
        processed_view: RenderedImage::from_image(&processed)?,
        original,
        processed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OcrPreset, DEFAULT_OCR_ENDPOINT};

    fn config(source: RecognitionSource) -> OcrConfig {
        OcrConfig {
            api_key: "test-key".to_string(),
            endpoint: DEFAULT_OCR_ENDPOINT.to_string(),
            preset: OcrPreset::Enhanced,
            recognition_source: source,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_pipeline_keeps_recognition_source() {
        let pipeline = Pipeline::new(&config(RecognitionSource::Processed)).unwrap();
        assert_eq!(pipeline.recognition_source(), RecognitionSource::Processed);
    }

    #[tokio::test]
    async fn test_undecodable_upload_fails_before_network() {
        let pipeline = Pipeline::new(&config(RecognitionSource::Original)).unwrap();
        let upload = Upload {
            bytes: b"%PDF-1.7 not an image".to_vec(),
            file_name: Some("doc.pdf".to_string()),
        };

        let result = pipeline.handle(upload, RecognizeOptions::default()).await;
        assert!(matches!(result, Err(SnapscribeError::Decode(_))));
    }

    #[test]
    fn test_prepare_applies_filter() {
        let png = preprocess::encode_png(&DynamicImage::new_rgb8(10, 6)).unwrap();
        let prepared = prepare(&png, PreprocessOption::Threshold).unwrap();

        assert_eq!(prepared.original_view.channels, 3);
        assert_eq!(prepared.processed_view.channels, 1);
        assert_eq!(prepared.processed.width(), 10);
        assert_eq!(prepared.processed.height(), 6);
    }
}
