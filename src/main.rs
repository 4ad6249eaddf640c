//! Video Game Review Sentiment Analyzer
//!
//! Scores reviews from the command line, a file, or stdin.

use anyhow::Context;
use clap::{Parser, Subcommand};
use review_sentiment::{
    config::{Config, OutputFormat},
    samples,
    sentiment::{summarize, BatchSummary, Lexicon, LexiconScorer, ReviewAnalysis},
    ReviewError,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Analyze the sentiment of video game reviews")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to review-sentiment.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single review
    Analyze {
        /// Review text (reads stdin when neither text nor --file is given)
        text: Option<String>,
        /// Read the review from a text file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Analyze one review per line of a text file
    Batch {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Analyze the built-in sample reviews
    Samples {
        /// Only analyze the sample with this name
        name: Option<String>,
    },
    /// Show the word lists in use
    Lexicon,
}

#[derive(Serialize)]
struct NamedAnalysis<'a> {
    name: &'a str,
    text: &'a str,
    #[serde(flatten)]
    analysis: ReviewAnalysis,
}

#[derive(Serialize)]
struct BatchReport<'a> {
    reviews: Vec<NamedAnalysis<'a>>,
    summary: BatchSummary,
}

struct Printer {
    format: OutputFormat,
    precision: usize,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let lexicon = config.lexicon.build()?;
    if !config.lexicon.is_builtin() {
        tracing::info!(
            "Using custom lexicon: {} positive / {} negative words",
            lexicon.positive_words().len(),
            lexicon.negative_words().len()
        );
    }

    let printer = Printer {
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
        precision: config.output.precision,
    };
    let scorer = LexiconScorer::new(&lexicon);

    match cli.command {
        Commands::Analyze { text, file } => analyze_review(&scorer, &printer, text, file.as_deref()),
        Commands::Batch { file } => analyze_file(&scorer, &printer, &file),
        Commands::Samples { name } => analyze_samples(&scorer, &printer, name.as_deref()),
        Commands::Lexicon => show_lexicon(&lexicon, &printer),
    }
}

fn analyze_review(
    scorer: &LexiconScorer<'_>,
    printer: &Printer,
    text: Option<String>,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let review = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read review from {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read review from stdin")?;
            buf
        }
    };

    if review.trim().is_empty() {
        return Err(ReviewError::EmptyInput.into());
    }

    let analysis = scorer.analyze(&review);
    tracing::info!("Analyzed review: {} ({:.3})", analysis.label, analysis.score);

    match printer.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => printer.print_analysis(&analysis),
    }
    Ok(())
}

fn analyze_file(scorer: &LexiconScorer<'_>, printer: &Printer, path: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read reviews from {}", path.display()))?;

    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        tracing::warn!("No reviews found in {}", path.display());
    }

    let names: Vec<String> = lines.iter().map(|(i, _)| format!("line {}", i + 1)).collect();
    let reviews: Vec<NamedAnalysis<'_>> = lines
        .iter()
        .zip(&names)
        .map(|((_, text), name)| NamedAnalysis {
            name,
            text,
            analysis: scorer.analyze(text),
        })
        .collect();

    printer.print_report(reviews)
}

fn analyze_samples(
    scorer: &LexiconScorer<'_>,
    printer: &Printer,
    name: Option<&str>,
) -> anyhow::Result<()> {
    let selected: Vec<&samples::SampleReview> = match name {
        Some(name) => match samples::find(name) {
            Some(sample) => vec![sample],
            None => {
                let known: Vec<&str> = samples::all().iter().map(|s| s.name).collect();
                anyhow::bail!("Unknown sample '{}'. Available: {}", name, known.join(", "));
            }
        },
        None => samples::all().iter().collect(),
    };

    let reviews = selected
        .into_iter()
        .map(|sample| NamedAnalysis {
            name: sample.name,
            text: sample.text,
            analysis: scorer.analyze(sample.text),
        })
        .collect();

    printer.print_report(reviews)
}

fn show_lexicon(lexicon: &Lexicon, printer: &Printer) -> anyhow::Result<()> {
    match printer.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "positive": lexicon.positive_words(),
                "negative": lexicon.negative_words(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!("\n📗 Positive words ({}):", lexicon.positive_words().len());
            println!("  {}", lexicon.positive_words().join(", "));
            println!("\n📕 Negative words ({}):", lexicon.negative_words().len());
            println!("  {}", lexicon.negative_words().join(", "));
        }
    }
    Ok(())
}

impl Printer {
    fn print_analysis(&self, analysis: &ReviewAnalysis) {
        let icon = match analysis.label {
            review_sentiment::SentimentLabel::Positive => "✅",
            review_sentiment::SentimentLabel::Negative => "❌",
            review_sentiment::SentimentLabel::Neutral => "⚖️",
        };

        println!("\n🎮 Sentiment Analysis\n");
        println!(
            "Score: {:.*} ({})",
            self.precision, analysis.score, analysis.label
        );
        println!(
            "Hits: {} positive / {} negative in {} words",
            analysis.positive_hits, analysis.negative_hits, analysis.word_count
        );
        println!("\n{} {}", icon, analysis.label.interpretation());
    }

    fn print_report(&self, reviews: Vec<NamedAnalysis<'_>>) -> anyhow::Result<()> {
        let analyses: Vec<ReviewAnalysis> = reviews.iter().map(|r| r.analysis.clone()).collect();
        let summary = summarize(&analyses);

        if self.format == OutputFormat::Json {
            let report = BatchReport { reviews, summary };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{:<20} {:>8} {:>9}  Review", "Name", "Score", "Label");
        println!("{}", "-".repeat(80));

        for review in &reviews {
            let preview = if review.text.chars().count() > 40 {
                format!("{}...", review.text.chars().take(37).collect::<String>())
            } else {
                review.text.to_string()
            };
            println!(
                "{:<20} {:>8.*} {:>9}  {}",
                review.name,
                self.precision,
                review.analysis.score,
                review.analysis.label.as_str(),
                preview
            );
        }

        println!("{}", "-".repeat(80));
        println!(
            "{} reviews | mean {:.*} ({}) | {} positive / {} negative / {} neutral",
            summary.count,
            self.precision,
            summary.mean_score,
            summary.overall_label(),
            summary.positive,
            summary.negative,
            summary.neutral
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "review-sentiment",
            "analyze",
            "--config",
            "custom.toml",
            "Great game",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Analyze { text: Some(_), file: None }));
    }

    #[test]
    fn test_config_flag_before_subcommand() {
        let cli = Cli::try_parse_from(["review-sentiment", "-c", "custom.toml", "--json", "lexicon"])
            .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Lexicon));
    }

    #[test]
    fn test_analyze_text_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "review-sentiment",
            "analyze",
            "--file",
            "review.txt",
            "Great game",
        ]);
        assert!(result.is_err());
    }
}
