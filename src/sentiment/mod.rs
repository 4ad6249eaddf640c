//! Review Sentiment Module
//!
//! Rule-based sentiment scoring for video game reviews.
//! Key features:
//! - Fixed positive/negative lexicon, matched by substring containment
//! - Scores clipped to [-1.0, 1.0]
//! - Three-way Positive / Negative / Neutral labels
//! - Batch scoring with summary statistics

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{LexiconScorer, ReviewAnalysis, SentimentLabel, NEUTRAL_BAND, SCORE_SCALE};
pub use lexicon::{Lexicon, NEGATIVE_WORDS, POSITIVE_WORDS};

use serde::{Deserialize, Serialize};


/// Score a review against the built-in lexicon
pub fn score(text: &str) -> f64 {
    LexiconScorer::builtin().score(text)
}

/// Map a score to its label
pub fn classify(score: f64) -> SentimentLabel {
    SentimentLabel::from_score(score)
}

/// Score and classify a review against the built-in lexicon
pub fn analyze(text: &str) -> ReviewAnalysis {
    LexiconScorer::builtin().analyze(text)
}

/// Aggregate view over a batch of analyzed reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub count: usize,
    /// Mean score (0.0 for an empty batch)
    pub mean_score: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl BatchSummary {
    /// Label of the mean score
    pub fn overall_label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.mean_score)
    }
}

/// Summarize a batch of analyses
pub fn summarize(results: &[ReviewAnalysis]) -> BatchSummary {
    let mut summary = BatchSummary {
        count: results.len(),
        mean_score: 0.0,
        positive: 0,
        negative: 0,
        neutral: 0,
    };

    if results.is_empty() {
        return summary;
    }

    for result in results {
        match result.label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Negative => summary.negative += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
        }
    }

    summary.mean_score = results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64;
    summary
}
