use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mindwell")]
#[command(about = "Depression risk scoring and safe chat replies", long_about = None)]
pub struct Cli {
    /// Scoring config to use instead of the user or built-in one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a JSON request of the form {"signals": [...]}
    Score {
        /// Request file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Wrap the assessment in a record for this session id
        #[arg(long)]
        session: Option<String>,
    },
    /// Answer one chat message with a vetted template
    Reply {
        #[arg(long)]
        message: String,
        /// Language tag (en, si, ta); detected from the script when omitted
        #[arg(long)]
        language: Option<String>,
        /// Scores of earlier messages in the conversation, oldest first
        #[arg(long, value_delimiter = ',')]
        history: Vec<f64>,
    },
    /// Print the PHQ-9 questions with their answer options
    Questions {
        #[arg(long, default_value = "en")]
        language: String,
    },
    /// Print the active scoring config, or validate a config file
    Config {
        #[arg(long)]
        check: Option<PathBuf>,
    },
}
