//! Lexicon Sentiment Scorer
//!
//! Counts positive and negative lexicon hits in a review, scales the net
//! count by review length and clips the result to [-1, 1].

use super::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Net hit ratio is multiplied by this before clipping
pub const SCORE_SCALE: f64 = 10.0;

/// Scores strictly above this are Positive, strictly below its negation Negative
pub const NEUTRAL_BAND: f64 = 0.1;

/// Three-way sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a score; exactly +/-0.1 stays Neutral
    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if score < -NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// One-line reading of the label for a game review
    pub fn interpretation(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "This review expresses satisfaction with the game.",
            SentimentLabel::Negative => "This review expresses dissatisfaction with the game.",
            SentimentLabel::Neutral => "This review is balanced or mixed.",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a single review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Clipped score (-1.0 to 1.0)
    pub score: f64,
    pub label: SentimentLabel,
    /// Positive lexicon entries found
    pub positive_hits: usize,
    /// Negative lexicon entries found
    pub negative_hits: usize,
    /// Whitespace-delimited tokens in the review
    pub word_count: usize,
}

impl ReviewAnalysis {
    fn empty() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            positive_hits: 0,
            negative_hits: 0,
            word_count: 0,
        }
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Sentiment scorer over a borrowed lexicon
#[derive(Debug, Clone, Copy)]
pub struct LexiconScorer<'a> {
    lexicon: &'a Lexicon,
}

impl LexiconScorer<'static> {
    /// Scorer over the built-in review lexicon
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl Default for LexiconScorer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> LexiconScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Score a review in [-1, 1]
    pub fn score(&self, text: &str) -> f64 {
        self.analyze(text).score
    }

    /// Score and classify a review, keeping the counts behind the score
    pub fn analyze(&self, text: &str) -> ReviewAnalysis {
        let lower = text.to_lowercase();

        let word_count = lower.split(is_word_separator).filter(|w| !w.is_empty()).count();
        if word_count == 0 {
            return ReviewAnalysis::empty();
        }

        // Whole-text substring search, so punctuation stuck to a word still matches
        let positive_hits = self.lexicon.positive_hits(&lower);
        let negative_hits = self.lexicon.negative_hits(&lower);

        let net = positive_hits as f64 - negative_hits as f64;
        let ratio = net / word_count.max(1) as f64;
        let score = (ratio * SCORE_SCALE).clamp(-1.0, 1.0);

        tracing::debug!(
            positive_hits,
            negative_hits,
            word_count,
            score,
            "Scored review"
        );

        ReviewAnalysis {
            score,
            label: SentimentLabel::from_score(score),
            positive_hits,
            negative_hits,
            word_count,
        }
    }

    /// Batch analyze multiple reviews
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ReviewAnalysis> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_score() {
        assert_eq!(SentimentLabel::from_score(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.5), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_label_interpretation() {
        assert!(SentimentLabel::Positive.interpretation().contains("satisfaction"));
        assert!(SentimentLabel::Negative.interpretation().contains("dissatisfaction"));
        assert!(SentimentLabel::Neutral.interpretation().contains("mixed"));
    }

    #[test]
    fn test_analysis_counts() {
        let scorer = LexiconScorer::builtin();
        let result = scorer.analyze("Great graphics but laggy and slow");
        assert_eq!(result.positive_hits, 1);
        assert_eq!(result.negative_hits, 2);
        assert_eq!(result.word_count, 6);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_uppercase_text_matches() {
        let scorer = LexiconScorer::builtin();
        let result = scorer.analyze("AWESOME");
        assert_eq!(result.positive_hits, 1);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let scorer = LexiconScorer::builtin();
        let result = scorer.analyze(" \t\n  ");
        assert_eq!(result, ReviewAnalysis::empty());
    }

    #[test]
    fn test_custom_lexicon_scorer() {
        let lexicon = Lexicon::new(["epic"], ["meh"]).unwrap();
        let scorer = LexiconScorer::new(&lexicon);

        // Built-in words carry no weight here
        let result = scorer.analyze("amazing but meh");
        assert_eq!(result.positive_hits, 0);
        assert_eq!(result.negative_hits, 1);
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_batch_analyze() {
        let scorer = LexiconScorer::default();
        let results = scorer.analyze_batch(&["Great game!", "Terrible port", ""]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].label, SentimentLabel::Positive);
        assert_eq!(results[1].label, SentimentLabel::Negative);
        assert_eq!(results[2].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_analysis_serialization() {
        let result = LexiconScorer::builtin().analyze("fun");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"label\":\"Positive\""));
        assert!(json.contains("\"word_count\":1"));
    }
}
