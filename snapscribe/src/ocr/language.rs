use serde::{Deserialize, Serialize};

use crate::config::OcrPreset;

/// Recognition language offered in the UI, mapped to an OCR.space code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum LanguageOption {
    #[default]
    English,
    French,
    Spanish,
    German,
}

const ENHANCED_LANGUAGES: &[LanguageOption] = &[
    LanguageOption::English,
    LanguageOption::French,
    LanguageOption::Spanish,
    LanguageOption::German,
];

const BASIC_LANGUAGES: &[LanguageOption] = &[LanguageOption::English, LanguageOption::French];

impl LanguageOption {
    /// Provider language code sent as the `language` form field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::French => "fre",
            Self::Spanish => "spa",
            Self::German => "ger",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::German => "German",
        }
    }

    /// Languages selectable under `preset`.
    pub fn available(preset: OcrPreset) -> &'static [LanguageOption] {
        match preset {
            OcrPreset::Basic => BASIC_LANGUAGES,
            OcrPreset::Enhanced => ENHANCED_LANGUAGES,
        }
    }

    /// Resolve a form value (label or provider code, any case) against the
    /// languages `preset` offers. Anything unmapped resolves to English.
    pub fn resolve(preset: OcrPreset, value: &str) -> LanguageOption {
        let value = value.trim();
        Self::available(preset)
            .iter()
            .copied()
            .find(|lang| {
                lang.label().eq_ignore_ascii_case(value) || lang.code().eq_ignore_ascii_case(value)
            })
            .unwrap_or_default()
    }
}
