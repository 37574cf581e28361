//! lexscore CLI
//!
//! Scores the lexical quality of every record in a text dataset and
//! attaches the score as a per-example weight for noisy-label-aware
//! training pipelines.

mod config;
mod progress;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lexscore_core::{LexicalQualityScorer, ScoreBreakdown, ScorerConfig, WordListDictionary};
use lexscore_formats::{JsonlReader, JsonlWriter, Record};

use config::ScoreJobConfig;
use progress::ProgressReporter;

#[derive(Parser)]
#[command(name = "lexscore")]
#[command(version, about = "Lexical quality weighting for text datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output the run summary in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every record and attach a per-example quality weight
    Score {
        /// Input file (JSONL, optionally gzip-compressed)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; required unless --dry-run
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field holding the text to score
        #[arg(short, long, default_value = "text")]
        field: String,

        /// Field name for the attached weight
        #[arg(long, default_value = "quality_weight")]
        weight_field: String,

        /// Also attach the four sub-scores (null when undefined)
        #[arg(long)]
        breakdown: bool,

        /// Weight for records whose quality cannot be assessed
        #[arg(long, default_value = "1.0")]
        undefined_weight: f64,

        /// Word-per-line dictionary file (defaults to the embedded list)
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Job config file (YAML or TOML); overrides the flags above
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Score and report without writing output
        #[arg(long)]
        dry_run: bool,
    },

    /// Score a dataset and print weight distribution statistics
    Stats {
        /// Input file (JSONL, optionally gzip-compressed)
        #[arg(short, long)]
        input: PathBuf,

        /// Field holding the text to score
        #[arg(short, long, default_value = "text")]
        field: String,

        /// Word-per-line dictionary file (defaults to the embedded list)
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Score {
            input,
            output,
            field,
            weight_field,
            breakdown,
            undefined_weight,
            dictionary,
            config,
            dry_run,
        } => {
            let job = match config {
                Some(path) => ScoreJobConfig::load(&path)?,
                None => {
                    let job = ScoreJobConfig {
                        field,
                        weight_field,
                        breakdown,
                        undefined_weight,
                        dictionary,
                    };
                    job.validate()?;
                    job
                }
            };
            score_dataset(input, output, job, dry_run, cli.json)
        }
        Commands::Stats {
            input,
            field,
            dictionary,
        } => print_stats(input, field, dictionary),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Build a scorer from job options, loading a dictionary file when given
fn build_scorer(undefined_weight: f64, dictionary: Option<&PathBuf>) -> Result<LexicalQualityScorer> {
    let scorer = LexicalQualityScorer::new(ScorerConfig { undefined_weight });
    match dictionary {
        Some(path) => {
            let dict = WordListDictionary::from_file(path)
                .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
            info!("Using dictionary {} ({} words)", path.display(), dict.len());
            Ok(scorer.with_dictionary(Arc::new(dict)))
        }
        None => Ok(scorer),
    }
}

/// Read all records, tracking progress by input bytes
fn read_records(input: &PathBuf) -> Result<Vec<Record>> {
    let mut reader = JsonlReader::open(input)
        .with_context(|| format!("Failed to open input: {}", input.display()))?;

    let reporter = ProgressReporter::new(reader.total_bytes());
    let mut records = Vec::new();

    while let Some(result) = reader.next() {
        let record = result?;
        records.push(record);
        if records.len() % 1000 == 0 {
            reporter.update(reader.bytes_processed(), records.len());
        }
    }
    reporter.finish();

    info!("Read {} records from {}", records.len(), input.display());
    Ok(records)
}

fn score_dataset(
    input: PathBuf,
    output: Option<PathBuf>,
    job: ScoreJobConfig,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    if output.is_none() && !dry_run {
        anyhow::bail!("--output is required unless --dry-run is set");
    }

    info!("Scoring dataset");
    info!("  Input: {:?}", input);
    info!("  Field: {}", job.field);
    info!("  Weight field: {}", job.weight_field);

    let scorer = build_scorer(job.undefined_weight, job.dictionary.as_ref())?;
    let mut records = read_records(&input)?;

    // Tool handles are shared across the pool; each record is independent
    let breakdowns: Vec<Option<ScoreBreakdown>> = records
        .par_iter()
        .map(|record| record.text(&job.field).map(|text| scorer.breakdown(text)))
        .collect();

    let total = records.len();
    let mut missing_field = 0;
    let mut undefined = 0;
    let mut weight_sum = 0.0;

    for (record, breakdown) in records.iter_mut().zip(&breakdowns) {
        let weight = match breakdown {
            Some(b) => {
                if b.aggregate.is_none() {
                    undefined += 1;
                }
                b.aggregate.unwrap_or(job.undefined_weight)
            }
            None => {
                missing_field += 1;
                job.undefined_weight
            }
        };
        weight_sum += weight;
        record.set_number(&job.weight_field, weight);

        if job.breakdown {
            if let Some(b) = breakdown {
                attach_breakdown(record, b);
            }
        }
    }

    let mean_weight = if total > 0 {
        Some(weight_sum / total as f64)
    } else {
        None
    };

    let mut written = 0;
    if let (Some(output), false) = (&output, dry_run) {
        let mut writer = JsonlWriter::create(output)
            .with_context(|| format!("Failed to create output: {}", output.display()))?;
        for record in &records {
            writer.write_record(record)?;
        }
        written = writer.finish()?;
        info!("Wrote {} records to {}", written, output.display());
    }

    if json_output {
        let report = serde_json::json!({
            "input": input.to_string_lossy(),
            "output": output.as_ref().map(|p| p.to_string_lossy().to_string()),
            "total_records": total,
            "records_written": written,
            "missing_field": missing_field,
            "undefined_score": undefined,
            "mean_weight": mean_weight,
            "undefined_weight": job.undefined_weight,
            "dry_run": dry_run,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        progress::print_summary_report(
            &input,
            output.as_deref().filter(|_| !dry_run),
            total,
            missing_field,
            undefined,
            mean_weight,
        );
    }

    Ok(())
}

/// Attach the four sub-scores next to the weight field (null = undefined)
fn attach_breakdown(record: &mut Record, breakdown: &ScoreBreakdown) {
    if let Value::Object(map) = &mut record.data {
        let axes = [
            ("quality_spelling", breakdown.spelling),
            ("quality_grammar", breakdown.grammar),
            ("quality_coherence", breakdown.coherence),
            ("quality_readability", breakdown.readability),
        ];
        for (name, score) in axes {
            let value = score.map(Value::from).unwrap_or(Value::Null);
            map.insert(name.to_string(), value);
        }
    }
}

fn print_stats(input: PathBuf, field: String, dictionary: Option<PathBuf>) -> Result<()> {
    let scorer = build_scorer(1.0, dictionary.as_ref())?;
    let records = read_records(&input)?;

    let scores: Vec<Option<Option<f64>>> = records
        .par_iter()
        .map(|record| {
            record
                .text(&field)
                .map(|text| scorer.assess_text_quality(text))
        })
        .collect();

    let total = records.len();
    let missing_field = scores.iter().filter(|s| s.is_none()).count();
    let defined: Vec<f64> = scores.iter().copied().flatten().flatten().collect();
    let undefined = total - missing_field - defined.len();

    println!("Dataset: {}", input.display());
    println!("  Records:         {}", total);
    println!("  Missing field:   {}", missing_field);
    println!("  Undefined score: {}", undefined);

    if defined.is_empty() {
        println!("  No defined scores.");
        return Ok(());
    }

    let mean = defined.iter().sum::<f64>() / defined.len() as f64;
    let min = defined.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = defined.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!("  Mean:            {:.4}", mean);
    println!("  Min:             {:.4}", min);
    println!("  Max:             {:.4}", max);

    // Ten-bucket histogram over [0,1]
    let mut buckets = [0usize; 10];
    for score in &defined {
        let idx = ((score * 10.0) as usize).min(9);
        buckets[idx] += 1;
    }
    let largest = buckets.iter().copied().max().unwrap_or(1).max(1);

    println!("  Distribution:");
    for (i, count) in buckets.iter().enumerate() {
        let lo = i as f64 / 10.0;
        let hi = lo + 0.1;
        let width = (count * 40) / largest;
        println!(
            "    [{:.1}, {:.1}{} {:>6}  {}",
            lo,
            hi,
            if i == 9 { "]" } else { ")" },
            count,
            "#".repeat(width)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attach_breakdown_uses_null_for_undefined() {
        let mut record = Record::new(json!({"text": "hi"}), 1);
        let breakdown = ScoreBreakdown {
            spelling: Some(0.9),
            grammar: Some(1.0),
            coherence: None,
            readability: Some(0.5),
            aggregate: Some(0.8),
        };
        attach_breakdown(&mut record, &breakdown);
        assert_eq!(record.data["quality_spelling"], json!(0.9));
        assert_eq!(record.data["quality_coherence"], Value::Null);
    }

    #[test]
    fn test_build_scorer_with_missing_dictionary_fails() {
        let path = PathBuf::from("/nonexistent/words.txt");
        assert!(build_scorer(1.0, Some(&path)).is_err());
    }

    #[test]
    fn test_cli_parses_score_command() {
        let cli = Cli::try_parse_from([
            "lexscore", "score", "--input", "in.jsonl", "--output", "out.jsonl",
            "--breakdown", "--undefined-weight", "0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Score {
                breakdown,
                undefined_weight,
                ..
            } => {
                assert!(breakdown);
                assert_eq!(undefined_weight, 0.5);
            }
            _ => panic!("expected score command"),
        }
    }
}
