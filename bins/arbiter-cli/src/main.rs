mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arbiter-cli")]
#[command(about = "Arbiter CLI - Run solutions against test cases on the remote judge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a solution file against test cases
    Run {
        /// Path to the solution source file
        #[arg(short, long)]
        source: PathBuf,

        /// Language name (javascript, python, java, cpp)
        #[arg(short, long)]
        language: String,

        /// JSON file holding an array of {input, expected_output} objects
        #[arg(short, long)]
        tests: Option<PathBuf>,

        /// Problem JSON file; its test cases are used
        #[arg(short, long)]
        problem: Option<PathBuf>,

        /// Print the verdict as JSON instead of a summary
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List enabled languages and their environment ids
    Languages,

    /// Print the starter template for a language
    Template {
        /// Language name
        #[arg(short, long)]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            source,
            language,
            tests,
            problem,
            json,
        } => {
            commands::run_submission(&source, &language, tests.as_deref(), problem.as_deref(), json)
                .await?;
        }
        Commands::Languages => {
            commands::list_languages()?;
        }
        Commands::Template { language } => {
            commands::print_template(&language)?;
        }
    }

    Ok(())
}
