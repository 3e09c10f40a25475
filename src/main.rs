use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcq_quiz::config::ServerConfig;
use mcq_quiz::protocol::{UploadResponse, DEFAULT_ADDRESS, DEFAULT_MAX_UPLOAD_BYTES};
use mcq_quiz::{logging, parse_with, read_document_text, Grammar, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a quiz in the terminal
    Play {
        /// PDF, JSON or text file to load the questions from
        file: PathBuf,

        /// Number of questions to ask (0 asks all)
        #[arg(short, long)]
        count: Option<usize>,

        /// Option-line grammar
        #[arg(short, long, env = "MCQ_GRAMMAR", value_enum, default_value_t = Grammar::Positional)]
        grammar: Grammar,
    },

    /// Print the questions parsed from a file as JSON
    Parse {
        /// PDF or text file
        file: PathBuf,

        /// Option-line grammar
        #[arg(short, long, env = "MCQ_GRAMMAR", value_enum, default_value_t = Grammar::Positional)]
        grammar: Grammar,
    },

    /// Serve the HTTP upload endpoints
    Serve {
        /// The address to bind to
        #[arg(short, long, env = "MCQ_ADDRESS", default_value = DEFAULT_ADDRESS)]
        address: SocketAddr,

        /// Largest accepted upload, in bytes
        #[arg(long, env = "MCQ_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
        max_upload_bytes: usize,

        /// Option-line grammar
        #[arg(short, long, env = "MCQ_GRAMMAR", value_enum, default_value_t = Grammar::Positional)]
        grammar: Grammar,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Play {
            file,
            count,
            grammar,
        } => {
            logging::init("mcq_quiz=warn");
            Quiz::from_path(&file, grammar)?
                .with_question_limit(count)
                .run()?;
        }
        Command::Parse { file, grammar } => {
            logging::init("mcq_quiz=info");
            let text = read_document_text(&file)?;
            let response = UploadResponse {
                questions: parse_with(&text, &grammar),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Serve {
            address,
            max_upload_bytes,
            grammar,
        } => {
            logging::init("mcq_quiz=info");
            let config = ServerConfig {
                address,
                max_upload_bytes,
                grammar,
            };
            mcq_quiz::server::run(config).await?;
        }
    }

    Ok(())
}
