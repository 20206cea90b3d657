use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SnapscribeError};

pub const DEFAULT_OCR_ENDPOINT: &str = "https://api.ocr.space/parse/image";

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Like [`parse_env_or`], but a value that is present and unparseable is an
/// error instead of a silent fallback.
fn parse_env_strict<T: FromStr<Err = SnapscribeError>>(var: &str, default: T) -> Result<T> {
    match env::var(var) {
        Ok(val) if !val.trim().is_empty() => val.parse(),
        _ => Ok(default),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct OcrConfig {
    pub api_key: String,
    pub endpoint: String,
    pub preset: OcrPreset,
    pub recognition_source: RecognitionSource,
    pub timeout_secs: u64,
}

// Hand-written so the provider secret never ends up in logs.
impl fmt::Debug for OcrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcrConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("preset", &self.preset)
            .field("recognition_source", &self.recognition_source)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Which set of OCR.space form fields is sent with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrPreset {
    /// Plain request: overlay flag, key and language only.
    Basic,
    /// Adds orientation detection, upscaling and engine 2.
    Enhanced,
}

impl FromStr for OcrPreset {
    type Err = SnapscribeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "enhanced" => Ok(Self::Enhanced),
            other => Err(SnapscribeError::Configuration(format!(
                "Unknown OCR preset '{other}', expected 'basic' or 'enhanced'"
            ))),
        }
    }
}

impl fmt::Display for OcrPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Enhanced => write!(f, "enhanced"),
        }
    }
}

/// Which of the two images is submitted for recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionSource {
    /// The uploaded image as decoded; the filter only affects the preview.
    Original,
    /// The image after the selected filter has been applied.
    Processed,
}

impl FromStr for RecognitionSource {
    type Err = SnapscribeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "processed" => Ok(Self::Processed),
            other => Err(SnapscribeError::Configuration(format!(
                "Unknown recognition source '{other}', expected 'original' or 'processed'"
            ))),
        }
    }
}

impl fmt::Display for RecognitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Processed => write!(f, "processed"),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// `OCR_SPACE_API_KEY` is mandatory: without it no request can be served,
    /// so its absence is reported as [`SnapscribeError::Configuration`].
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OCR_SPACE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SnapscribeError::Configuration(
                    "OCR_SPACE_API_KEY is not set; the OCR provider key is required".to_string(),
                )
            })?;

        Ok(Self {
            server: ServerConfig {
                host: env::var("SNAPSCRIBE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("SNAPSCRIBE_PORT", 8080),
            },
            ocr: OcrConfig {
                api_key,
                endpoint: env::var("OCR_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_OCR_ENDPOINT.to_string()),
                preset: parse_env_strict("OCR_PRESET", OcrPreset::Enhanced)?,
                recognition_source: parse_env_strict(
                    "OCR_RECOGNITION_SOURCE",
                    RecognitionSource::Original,
                )?,
                timeout_secs: parse_env_or("OCR_TIMEOUT", 60),
            },
        })
    }
}
