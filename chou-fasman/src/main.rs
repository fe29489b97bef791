use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chou_fasman_rs::{
    DEFAULT_STEPS, Record, Score, Table, Weights, evaluate, io::labeled, optimize, read_records,
    read_weights, try_predict, write_predictions, write_weights,
};
use clap::{Parser, Subcommand};
use tracing::info;

/// Predict protein secondary structure with the Chou-Fasman rules
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score predictions against a labeled data file
    Evaluate {
        /// Labeled records
        data: PathBuf,

        /// Weight file, one coefficient per line. Unit weights if omitted
        #[arg(short, long)]
        weights: Option<PathBuf>,
    },
    /// Tune the weights on a training file
    Optimize {
        /// Labeled training records
        train: PathBuf,

        /// Labeled records to score the tuned weights on
        #[arg(short, long)]
        test: Option<PathBuf>,

        /// Number of step resolutions, from 0.1 down to 10^-steps
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: u32,

        /// Where to write the tuned weights
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Predict the structure of every record in a file
    Predict {
        /// Records, labels are ignored
        input: PathBuf,

        /// Weight file, one coefficient per line. Unit weights if omitted
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Where to write predictions. Stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_records(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

fn load_weights(path: Option<&Path>) -> Result<Weights> {
    let Some(path) = path else {
        return Ok(Weights::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_weights(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

fn print_score(title: &str, score: Score) {
    let rate = score
        .percent()
        .map_or_else(|| "n/a".to_owned(), |p| format!("{p}%"));

    println!("{title:<24}{:>8}", score.hits);
    println!("{:<24}{:>8}", "Number of amino acids:", score.total);
    println!("{:<24}{rate:>8}", "Success rate:");
}

fn score_file(path: &Path, table: &Table) -> Result<Score> {
    let (sequences, truths) = labeled(load_records(path)?);
    evaluate(table, &sequences, &truths).with_context(|| format!("scoring {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Evaluate { data, weights } => {
            let table = Table::build(&load_weights(weights.as_deref())?);
            let score = score_file(&data, &table)?;
            print_score("Total score:", score);
        }
        Command::Optimize {
            train,
            test,
            steps,
            output,
        } => {
            let (sequences, truths) = labeled(load_records(&train)?);
            info!(records = sequences.len(), steps, "optimizing");
            let optimized = optimize(&sequences, &truths, steps)
                .with_context(|| format!("optimizing on {}", train.display()))?;

            println!("Optimized weights:");
            println!("{}", optimized.weights);
            println!();
            print_score("Best optimized score:", optimized.score);

            if let Some(test) = test {
                let score = score_file(&test, &Table::build(&optimized.weights))?;
                println!();
                print_score("Final score in test run:", score);
            }

            if let Some(output) = output {
                let file = File::create(&output)
                    .with_context(|| format!("creating {}", output.display()))?;
                let mut writer = BufWriter::new(file);
                write_weights(&mut writer, &optimized.weights)?;
                writer.flush()?;
            }
        }
        Command::Predict {
            input,
            weights,
            output,
        } => {
            let table = Table::build(&load_weights(weights.as_deref())?);
            let records = load_records(&input)?;
            let predictions = records
                .iter()
                .map(|r| try_predict(&r.residues, &table))
                .collect::<chou_fasman_rs::Result<Vec<_>>>()?;

            match output {
                Some(output) => {
                    let file = File::create(&output)
                        .with_context(|| format!("creating {}", output.display()))?;
                    write_predictions(BufWriter::new(file), &records, &predictions)?;
                }
                None => write_predictions(std::io::stdout().lock(), &records, &predictions)?,
            }
        }
    }

    Ok(())
}
