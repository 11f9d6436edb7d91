use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use mml_core::{percussion, tokenize};
use mml_percussion::{convert_source, logging, ConvertOptions};

#[derive(Parser, Debug)]
#[command(name = "mml-percussion")]
#[command(about = "Convert melodic MML voices into percussion MML", long_about = None)]
struct Cli {
    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log intermediate conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert up to three comma-separated voices
    Convert {
        /// MML source (default: read --file, or stdin)
        #[arg(conflicts_with = "file")]
        mml: Option<String>,

        /// Read the MML source from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Remove volume commands (v<n>) before converting
        #[arg(long)]
        strip_volume: bool,

        /// Remove tempo commands (t<n>) before converting
        #[arg(long)]
        strip_tempo: bool,

        /// JSON file with conversion options; flags are added on top
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show how a single voice is tokenized
    Tokens {
        /// One MML voice
        mml: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = TokenFormat::Debug)]
        format: TokenFormat,
    },
    /// Print the note to percussion table
    Table,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TokenFormat {
    Debug,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Convert {
            mml,
            file,
            strip_volume,
            strip_tempo,
            config,
            format,
            output,
        } => {
            let source = read_source(mml, file)?;

            let base = match &config {
                Some(path) => ConvertOptions::from_file(path)?,
                None => ConvertOptions::default(),
            };
            let options = base.merge(ConvertOptions {
                strip_volume,
                strip_tempo,
            });
            tracing::debug!("options: {:?}", options);

            let result = convert_source(&source, &options);
            let rendered = match format {
                OutputFormat::Text => result.to_string(),
                OutputFormat::Json => result.to_json()?,
            };

            if let Some(path) = output {
                fs::write(&path, format!("{}\n", rendered))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!("output saved to {}", path.display());
            } else {
                println!("{}", rendered);
            }
            Ok(())
        }
        Commands::Tokens { mml, format } => {
            let lexemes = tokenize(&mml);
            match format {
                TokenFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&lexemes)?);
                }
                TokenFormat::Debug => {
                    for lexeme in &lexemes {
                        println!("{:>8}  {:<8} {}", lexeme.span.to_string(), lexeme.raw, lexeme.token);
                    }
                }
            }
            Ok(())
        }
        Commands::Table => {
            for (note, mapped) in percussion::entries() {
                println!("n{} -> n{}", note, mapped);
            }
            Ok(())
        }
    }
}

fn read_source(mml: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(mml) = mml {
        return Ok(mml);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read MML from stdin")?;
    Ok(source)
}
