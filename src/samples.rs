//! Built-in sample reviews for demos and smoke checks

/// A named example review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReview {
    pub name: &'static str,
    pub text: &'static str,
}

const SAMPLES: &[SampleReview] = &[
    SampleReview {
        name: "Positive Review",
        text: "This game is absolutely amazing! The graphics are stunning and the gameplay is incredibly fun. I love the storyline and the characters are well-developed. Highly recommended!",
    },
    SampleReview {
        name: "Negative Review",
        text: "This game is terrible. The graphics are awful, the controls are buggy, and the story is boring. Don't waste your money on this garbage.",
    },
    SampleReview {
        name: "Neutral Review",
        text: "The game is okay. It has some good features but also some issues. The graphics are decent and the gameplay is average.",
    },
    SampleReview {
        name: "Mixed Review",
        text: "Great graphics and sound, but the gameplay is frustrating and the story is confusing. Some parts are fun, others are annoying.",
    },
    SampleReview {
        name: "Positive Example",
        text: "This game is absolutely fantastic! Amazing graphics, great storyline, and addictive gameplay. Best purchase ever!",
    },
    SampleReview {
        name: "Negative Example",
        text: "Terrible game. Boring, buggy, and overpriced. Complete waste of money and time. Avoid at all costs!",
    },
    SampleReview {
        name: "Neutral Example",
        text: "The game is okay. Some parts are good, others not so much. Average graphics and gameplay.",
    },
];

/// All samples in display order
pub fn all() -> &'static [SampleReview] {
    SAMPLES
}

/// Look up a sample by name, ignoring case
pub fn find(name: &str) -> Option<&'static SampleReview> {
    let name = name.trim();
    SAMPLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{analyze, SentimentLabel};

    #[test]
    fn test_all_samples() {
        assert_eq!(all().len(), 7);
        assert_eq!(all()[0].name, "Positive Review");
    }

    #[test]
    fn test_find_ignores_case() {
        let sample = find("mixed review").unwrap();
        assert_eq!(sample.name, "Mixed Review");
        assert!(find("  NEGATIVE EXAMPLE ").is_some());
        assert!(find("Unknown").is_none());
    }

    #[test]
    fn test_sample_labels() {
        let label = |name: &str| analyze(find(name).unwrap().text).label;

        assert_eq!(label("Positive Review"), SentimentLabel::Positive);
        assert_eq!(label("Negative Review"), SentimentLabel::Negative);
        assert_eq!(label("Mixed Review"), SentimentLabel::Negative);
        assert_eq!(label("Positive Example"), SentimentLabel::Positive);
        assert_eq!(label("Negative Example"), SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_samples_score_positive() {
        // Only "good" hits, and these reviews are short enough for it to dominate
        let review = analyze(find("Neutral Review").unwrap().text);
        assert_eq!(review.score, (1.0 / 22.0) * 10.0);
        assert_eq!(review.label, SentimentLabel::Positive);

        let example = analyze(find("Neutral Example").unwrap().text);
        assert_eq!(example.score, 0.625);
    }
}
