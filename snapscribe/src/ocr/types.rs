use serde::{Deserialize, Deserializer};

pub(crate) const UNKNOWN_ERROR: &str = "Unknown error.";

/// Response body of `POST /parse/image`.
///
/// Only the fields the client reads are modelled; everything is optional
/// because the service omits fields freely depending on the outcome.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrSpaceResponse {
    #[serde(default)]
    pub is_errored_on_processing: bool,
    #[serde(default, deserialize_with = "string_or_list")]
    pub error_message: Option<Vec<String>>,
    #[serde(default)]
    pub parsed_results: Option<Vec<ParsedResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    #[serde(default)]
    pub parsed_text: Option<String>,
}

impl OcrSpaceResponse {
    /// The first provider error message, or a generic fallback.
    pub fn first_error(&self) -> String {
        self.error_message
            .as_ref()
            .and_then(|messages| messages.first())
            .map(|msg| msg.trim())
            .filter(|msg| !msg.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }

    /// All `ParsedText` values joined in order, trimmed at both ends.
    pub fn text(&self) -> String {
        self.parsed_results
            .iter()
            .flatten()
            .filter_map(|result| result.parsed_text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

/// OCR.space reports `ErrorMessage` either as a list or as a bare string.
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => None,
        Some(OneOrMany::One(msg)) => Some(vec![msg]),
        Some(OneOrMany::Many(msgs)) => Some(msgs),
    })
}
