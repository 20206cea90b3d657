//! Snapscribe: upload an image, optionally clean it up with one of four
//! filters, and read its text through the OCR.space API.
//!
//! The crate is split leaf-first:
//!
//! - [`preprocess`]: decoding uploads and the None/Grayscale/Threshold/Blur filters
//! - [`ocr`]: the OCR.space multipart client and its typed response
//! - [`presenter`]: the render model, clipboard escaping and HTML pages
//! - [`pipeline`]: one submission in, one [`presenter::RenderModel`] out
//! - [`api`]: the axum router serving the pages and the JSON API

pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
pub mod pipeline;
pub mod preprocess;
pub mod presenter;
