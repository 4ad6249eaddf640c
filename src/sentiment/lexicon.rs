//! Review Lexicon
//!
//! Positive and negative word lists for video game reviews. Entries are
//! lowercase and the two lists never share a word.

use crate::error::{ReviewError, Result};
use lazy_static::lazy_static;
use std::collections::HashSet;

/// Built-in positive words
pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "excellent",
    "fantastic",
    "great",
    "love",
    "perfect",
    "wonderful",
    "brilliant",
    "outstanding",
    "superb",
    "incredible",
    "best",
    "good",
    "nice",
    "fun",
    "enjoy",
    "like",
    "recommend",
    "beautiful",
    "cool",
    "impressive",
    "solid",
    "smooth",
    "addictive",
    "engaging",
    "immersive",
];

/// Built-in negative words
pub const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "bad",
    "worst",
    "hate",
    "boring",
    "stupid",
    "waste",
    "disappointing",
    "frustrating",
    "annoying",
    "broken",
    "buggy",
    "glitchy",
    "poor",
    "weak",
    "lame",
    "sucks",
    "trash",
    "garbage",
    "overpriced",
    "expensive",
    "slow",
    "laggy",
    "confusing",
    "difficult",
];

lazy_static! {
    static ref BUILTIN: Lexicon = Lexicon {
        positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
    };
}

/// A pair of disjoint word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// The built-in review lexicon, shared for the life of the process
    pub fn builtin() -> &'static Lexicon {
        &*BUILTIN
    }

    /// Build a lexicon from caller-supplied word lists.
    ///
    /// Words are trimmed and lowercased. Duplicates within a list collapse to
    /// one entry, since hits are counted per entry. Blank words and words
    /// present in both lists are rejected.
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive = normalize_words(positive, "positive")?;
        let negative = normalize_words(negative, "negative")?;

        let positive_set: HashSet<&str> = positive.iter().map(String::as_str).collect();
        if let Some(shared) = negative.iter().find(|w| positive_set.contains(w.as_str())) {
            return Err(ReviewError::Lexicon(format!(
                "'{}' appears in both positive and negative word lists",
                shared
            )));
        }

        Ok(Self { positive, negative })
    }

    pub fn positive_words(&self) -> &[String] {
        &self.positive
    }

    pub fn negative_words(&self) -> &[String] {
        &self.negative
    }

    /// Number of positive entries contained in already-lowercased text
    pub fn positive_hits(&self, lowered: &str) -> usize {
        count_contained(&self.positive, lowered)
    }

    /// Number of negative entries contained in already-lowercased text
    pub fn negative_hits(&self, lowered: &str) -> usize {
        count_contained(&self.negative, lowered)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Counts entries, not occurrences, and matches inside longer words.
fn count_contained(words: &[String], lowered: &str) -> usize {
    words.iter().filter(|w| lowered.contains(w.as_str())).count()
}

fn normalize_words<I, S>(words: I, side: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() {
            return Err(ReviewError::Lexicon(format!(
                "blank entry in {} word list",
                side
            )));
        }
        if seen.insert(word.clone()) {
            out.push(word);
        }
    }

    Ok(out)
}
