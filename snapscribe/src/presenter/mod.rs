//! Result presentation
//!
//! A [`RenderModel`] is everything one submission produces: both images, the
//! options that were used, and either the extracted text or an error. It is
//! returned as JSON by the API and rendered to HTML by [`html`].

pub mod html;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::DynamicImage;
use serde::Serialize;

use crate::error::Result;
use crate::preprocess::{channel_count, encode_png, PreprocessOption};

/// An image ready to be shown in a browser.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    /// `data:image/png;base64,...`
    pub data_url: String,
}

impl RenderedImage {
    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        let png = encode_png(img)?;
        Ok(Self {
            width: img.width(),
            height: img.height(),
            channels: channel_count(img),
            data_url: format!("data:image/png;base64,{}", STANDARD.encode(png)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Text {
        text: String,
        /// Script that copies `text` to the clipboard. Absent when there is
        /// nothing to copy.
        #[serde(rename = "copyScript", skip_serializing_if = "Option::is_none")]
        copy_script: Option<String>,
    },
    Error {
        message: String,
    },
}

impl Outcome {
    pub fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(text) => {
                let copy_script = (!text.is_empty()).then(|| clipboard_script(&text));
                Outcome::Text { text, copy_script }
            }
            Err(e) => Outcome::Error {
                message: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub request_id: String,
    pub original: RenderedImage,
    pub processed: RenderedImage,
    pub preprocess: PreprocessOption,
    /// Provider language code the image was recognized with.
    pub language: String,
    pub outcome: Outcome,
}

impl RenderModel {
    pub fn text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Text { text, .. } => Some(text),
            Outcome::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error { message } => Some(message),
            Outcome::Text { .. } => None,
        }
    }

    pub fn copy_script(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Text { copy_script, .. } => copy_script.as_deref(),
            Outcome::Error { .. } => None,
        }
    }
}

/// Escape backslash, backtick and double quote with a leading backslash so
/// the text can be embedded in a generated copy command. Every other
/// character is kept as is.
pub fn escape_for_clipboard(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the `navigator.clipboard.writeText` call for `text`.
///
/// The text goes into a template literal, so on top of
/// [`escape_for_clipboard`] interpolation openers are neutralized. Every `<`
/// is written as `\x3C`: inside an HTML `<script>` element a literal `<!--`
/// or `<script` would change how the parser finds the closing tag.
pub fn clipboard_script(text: &str) -> String {
    let literal = escape_for_clipboard(text)
        .replace("${", "\\${")
        .replace('<', "\\x3C");
    format!("navigator.clipboard.writeText(`{literal}`)")
}
