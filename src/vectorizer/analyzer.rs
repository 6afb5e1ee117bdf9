use serde::{Deserialize, Serialize};

/// Text analysis settings fitted together with the vocabulary.
/// The query side must use the same settings the corpus was built with,
/// so they travel inside the model artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// lowercase every token before lookup
    pub lowercase: bool,
    /// tokens shorter than this (in chars) are dropped
    pub min_token_len: usize,
    /// tf = 1 + ln(count) instead of the raw count
    pub sublinear_tf: bool,
    /// row normalization applied after weighting
    pub norm: Norm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L2,
    None,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_len: 2,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

/// Split text into word tokens.
/// Any char that is not alphanumeric or `_` is a separator,
/// so "all-purpose flour" yields ["all", "purpose", "flour"].
///
/// # Arguments
/// * `text` - raw document text
/// * `options` - fitted analyzer settings
///
/// # Returns
/// * `Vec<String>` - tokens in document order
pub fn analyze(text: &str, options: &AnalyzerOptions) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|tok| tok.chars().count() >= options.min_token_len)
        .map(|tok| {
            if options.lowercase {
                tok.to_lowercase()
            } else {
                tok.to_string()
            }
        })
        .collect()
}
