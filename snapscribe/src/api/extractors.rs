use axum::extract::{FromRequest, Multipart, Request};

use crate::config::OcrPreset;
use crate::error::{Result, SnapscribeError};
use crate::ocr::LanguageOption;
use crate::pipeline::{RecognizeOptions, Upload};
use crate::preprocess::PreprocessOption;

/// The upload form: a `file` part plus optional `preprocess` and `language`
/// text fields. Unknown fields are ignored.
#[derive(Debug, Clone)]
pub struct RecognizeForm {
    pub upload: Upload,
    pub preprocess: Option<String>,
    pub language: Option<String>,
}

impl RecognizeForm {
    /// Validate the option fields against what `preset` offers.
    ///
    /// An unknown preprocessing option is rejected; an unknown language
    /// resolves to English.
    pub fn into_parts(self, preset: OcrPreset) -> Result<(Upload, RecognizeOptions)> {
        let preprocess = match self.preprocess.as_deref().map(str::trim) {
            None | Some("") => PreprocessOption::None,
            Some(value) => value.parse()?,
        };
        let language = LanguageOption::resolve(preset, self.language.as_deref().unwrap_or(""));

        Ok((
            self.upload,
            RecognizeOptions {
                preprocess,
                language,
            },
        ))
    }
}

impl<S> FromRequest<S> for RecognizeForm
where
    S: Send + Sync,
{
    type Rejection = SnapscribeError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| SnapscribeError::Validation(e.body_text()))?;

        let mut upload: Option<Upload> = None;
        let mut preprocess: Option<String> = None;
        let mut language: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| SnapscribeError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field.bytes().await.map_err(|e| {
                        SnapscribeError::Validation(format!("Failed to read file: {e}"))
                    })?;
                    upload = Some(Upload {
                        bytes: bytes.to_vec(),
                        file_name,
                    });
                }
                "preprocess" => {
                    preprocess = Some(field.text().await.map_err(|e| {
                        SnapscribeError::Validation(format!("Invalid preprocess value: {e}"))
                    })?);
                }
                "language" => {
                    language = Some(field.text().await.map_err(|e| {
                        SnapscribeError::Validation(format!("Invalid language value: {e}"))
                    })?);
                }
                other => {
                    tracing::debug!(field = other, "Ignoring unknown form field");
                }
            }
        }

        let upload = upload.ok_or_else(|| {
            SnapscribeError::Validation("Missing required field: file".to_string())
        })?;

        Ok(Self {
            upload,
            preprocess,
            language,
        })
    }
}
