//! Video Game Review Sentiment Analyzer
//!
//! Rule-based sentiment scoring for game reviews using fixed word lists.

pub mod config;
pub mod error;
pub mod samples;
pub mod sentiment;


pub use error::{Result, ReviewError};
pub use sentiment::{analyze, classify, score, Lexicon, LexiconScorer, ReviewAnalysis, SentimentLabel};
