//! Core types for passgen

use serde::{Deserialize, Serialize};

/// Default number of words per password and of suggestions per run
pub const DEFAULT_COUNT: usize = 3;

/// Largest word or suggestion count the command line accepts
pub const MAX_COUNT: usize = 1024;

/// How suggestions are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Banner plus a table of spaced, joined and mixed case suggestions
    #[default]
    Table,
    /// A single password and nothing else
    Quiet,
    /// JSON array of suggestions
    Json,
}

/// Resolved generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Words per password
    pub word_count: usize,
    /// Passwords to suggest
    pub suggestion_count: usize,
    /// Strip the spaces between words (quiet mode)
    pub separator_removed: bool,
    /// Randomise letter case (quiet mode)
    pub case_mixed: bool,
    pub mode: OutputMode,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_COUNT,
            suggestion_count: DEFAULT_COUNT,
            separator_removed: false,
            case_mixed: false,
            mode: OutputMode::Table,
        }
    }
}

impl GenerationRequest {
    /// Replace zero counts with the default of 3
    pub fn normalized(mut self) -> Self {
        if self.word_count == 0 {
            tracing::debug!(fallback = DEFAULT_COUNT, "Word count of zero reset to default");
            self.word_count = DEFAULT_COUNT;
        }
        if self.suggestion_count == 0 {
            tracing::debug!(fallback = DEFAULT_COUNT, "Suggestion count of zero reset to default");
            self.suggestion_count = DEFAULT_COUNT;
        }
        self
    }

    /// Characters in a password once the spaces are removed
    pub fn password_length(&self) -> usize {
        self.word_count.saturating_mul(crate::pool::WORD_LENGTH)
    }
}

/// One suggested password in its three presentations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Words joined by single spaces
    pub spaced: String,
    /// Same words with the spaces removed
    pub joined: String,
    /// `joined` with randomised letter case
    pub mixed_case: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::default();
        assert_eq!(request.word_count, 3);
        assert_eq!(request.suggestion_count, 3);
        assert_eq!(request.mode, OutputMode::Table);
        assert_eq!(request.password_length(), 9);
    }

    #[test]
    fn test_normalized_resets_zero_counts() {
        let request = GenerationRequest {
            word_count: 0,
            suggestion_count: 0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(request.word_count, 3);
        assert_eq!(request.suggestion_count, 3);

        let request = GenerationRequest {
            word_count: 5,
            suggestion_count: 1,
            ..Default::default()
        }
        .normalized();
        assert_eq!(request.word_count, 5);
        assert_eq!(request.suggestion_count, 1);
    }

    #[test]
    fn test_password_length_saturates() {
        let request = GenerationRequest {
            word_count: usize::MAX / 2,
            ..Default::default()
        };
        assert_eq!(request.password_length(), usize::MAX);
    }

    #[test]
    fn test_suggestion_json_shape() {
        let suggestion = Suggestion {
            spaced: "fox hen".to_string(),
            joined: "foxhen".to_string(),
            mixed_case: "FoXhEn".to_string(),
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["spaced"], "fox hen");
        assert_eq!(json["mixed_case"], "FoXhEn");
        assert_eq!(serde_json::to_value(OutputMode::Quiet).unwrap(), "quiet");
    }
}
