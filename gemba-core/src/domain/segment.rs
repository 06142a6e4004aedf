use serde::{Deserialize, Serialize};

use super::language::LanguagePair;

/// A source sentence and the candidate translation under evaluation.
///
/// Construction trims leading and trailing whitespace from both sides, so
/// every pair held by the crate is prompt-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPair {
    pub source: String,
    pub hypothesis: String,
}

impl SegmentPair {
    pub fn new(source: &str, hypothesis: &str) -> Self {
        Self {
            source: source.trim().to_string(),
            hypothesis: hypothesis.trim().to_string(),
        }
    }
}

/// One row of a bulk scoring request.
///
/// Field names follow the column layout the annotation service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub source_seg: String,
    pub target_seg: String,
    pub source_lang: String,
    pub target_lang: String,
    pub prompt: String,
}

impl ScoringRequest {
    pub fn new(pair: SegmentPair, languages: &LanguagePair, prompt: impl Into<String>) -> Self {
        Self {
            source_seg: pair.source,
            target_seg: pair.hypothesis,
            source_lang: languages.source.clone(),
            target_lang: languages.target.clone(),
            prompt: prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_pair_trims_both_sides() {
        let pair = SegmentPair::new("  I like pie ", "\tSaya suka pie\n");
        assert_eq!(pair.source, "I like pie");
        assert_eq!(pair.hypothesis, "Saya suka pie");
    }

    #[test]
    fn test_scoring_request_takes_labels_from_language_pair() {
        let languages = LanguagePair::new("English", "Czech");
        let row = ScoringRequest::new(
            SegmentPair::new("a sentence", "věta"),
            &languages,
            "rendered prompt",
        );
        assert_eq!(row.source_lang, "English");
        assert_eq!(row.target_lang, "Czech");
        assert_eq!(row.source_seg, "a sentence");
        assert_eq!(row.target_seg, "věta");
        assert_eq!(row.prompt, "rendered prompt");
    }
}
