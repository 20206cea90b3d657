//! OCR (Optical Character Recognition) Module
//!
//! Text extraction is delegated to the OCR.space web API. The client is built
//! from an explicit [`OcrConfig`](crate::config::OcrConfig) carrying the API
//! key; nothing here reads the environment.
//!
//! # Wire contract
//!
//! Each recognition is a single `multipart/form-data` POST with a `file` part
//! (`image.png`, `image/png`) and the form fields selected by the configured
//! [`OcrPreset`](crate::config::OcrPreset). The JSON reply is decoded into
//! [`OcrSpaceResponse`]; a set `IsErroredOnProcessing` flag becomes an error
//! carrying the provider's first message, otherwise the `ParsedText` of every
//! result is concatenated and trimmed.
//!
//! # Usage
//!
//! ```rust,ignore
//! let client = OcrSpaceClient::new(&config.ocr)?;
//! let text = client.recognize(&image, LanguageOption::French.code()).await?;
//! ```

mod client;
mod language;
mod types;

pub use client::OcrSpaceClient;
pub use language::LanguageOption;
pub use types::{OcrSpaceResponse, ParsedResult};
