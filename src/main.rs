// Command-line front end for the address extraction pipeline.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use thikana::ml::{dataset, AddressGenerator, ExtractorEvaluator};
use thikana::utils::AddressError;
use thikana::AddressExtractor;

#[derive(Parser)]
#[command(name = "thikana", about = "Heuristic Indian address extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract addresses from a text file (or stdin when no file is given)
    Extract {
        file: Option<PathBuf>,
        /// Minimum confidence score for reported matches
        #[arg(long, default_value_t = thikana::address_extractor::DEFAULT_MIN_CONFIDENCE)]
        min_confidence: f64,
        /// Emit matches as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Generate a synthetic labeled address dataset
    Generate {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "address_dataset.json")]
        output: PathBuf,
    },
    /// Score the extractor against a labeled dataset
    Evaluate {
        #[arg(long)]
        dataset: PathBuf,
    },
}

fn main() -> Result<(), AddressError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            file,
            min_confidence,
            json,
        } => extract(file, min_confidence, json),
        Command::Generate {
            count,
            seed,
            output,
        } => generate(count, seed, &output),
        Command::Evaluate { dataset } => evaluate(&dataset),
    }
}

fn extract(file: Option<PathBuf>, min_confidence: f64, json: bool) -> Result<(), AddressError> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let extractor = AddressExtractor::new();
    let matches = extractor.extract_addresses_with_confidence(&text, min_confidence);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!("\n===============================================");
    println!("         ADDRESS EXTRACTION REPORT");
    println!("===============================================\n");
    println!("Matches found: {}\n", matches.len());

    for (i, m) in matches.iter().enumerate() {
        println!("MATCH {}:", i + 1);
        println!("  Formatted: {}", extractor.format_address(m));
        println!("  Region: {}", m.region);
        println!("  Confidence: {:.2}", m.confidence_score);
        println!("  Components:");
        for (name, value) in m.components.iter() {
            println!("    {}: {}", name, value);
        }
        println!();
    }

    Ok(())
}

fn generate(count: usize, seed: Option<u64>, output: &PathBuf) -> Result<(), AddressError> {
    let mut generator = match seed {
        Some(seed) => AddressGenerator::seeded(seed),
        None => AddressGenerator::new(),
    };
    let records = generator.generate(count);
    dataset::save_records(&records, output)?;

    println!("Generated {} records to {:?}", records.len(), output);
    println!("\nSample records:");
    for record in records.iter().take(3) {
        println!("  {}", record.text.replace('\n', " / "));
    }

    Ok(())
}

fn evaluate(path: &PathBuf) -> Result<(), AddressError> {
    let records = dataset::load_records(path)?;
    let extractor = AddressExtractor::new();
    let report = ExtractorEvaluator::evaluate(&extractor, &records)?;

    println!("\nExtractor Evaluation Results:");
    println!("{}", "=".repeat(50));
    println!("Records evaluated: {}", records.len());
    println!("\nOverall Scores:");
    println!("Precision: {:.2}%", report.overall.precision() * 100.0);
    println!("Recall: {:.2}%", report.overall.recall() * 100.0);
    println!("F1-Score: {:.2}%", report.overall.f1() * 100.0);

    println!("\nPer-Field Scores:");
    for (field, score) in &report.per_field {
        println!("\n{}:", field);
        println!("  Precision: {:.2}%", score.precision() * 100.0);
        println!("  Recall: {:.2}%", score.recall() * 100.0);
        println!("  F1-Score: {:.2}%", score.f1() * 100.0);
    }

    Ok(())
}
