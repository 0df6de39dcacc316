//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for autostream-agent
#[derive(Parser, Debug)]
#[command(name = "autostream-agent")]
#[command(
    author,
    version,
    about = "AutoStream sales assistant: answers product questions and captures leads"
)]
#[command(long_about = r#"
AutoStream Agent is a conversational sales assistant for the AutoStream
video platform. It answers pricing and policy questions from a knowledge
base, classifies the intent of every message, and collects name, email and
platform from interested users.

Configuration files are loaded from (in priority order):
1. AUTOSTREAM_* environment variables (e.g. AUTOSTREAM_MODEL__NAME)
2. --config <path>          Explicit config file
3. ./autostream.toml        Project-level config
4. ~/.config/autostream-agent/config.toml   Global config

The API key is read from $GEMINI_API_KEY unless configured otherwise.

Example:
  autostream-agent
  autostream-agent "How much is the Pro plan?"
  autostream-agent --model gemini-2.5-pro --session demo
"#)]
pub struct Cli {
    /// Send a single message and exit (starts the chat loop when omitted)
    pub message: Option<String>,

    /// Model to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Session id (overrides config)
    #[arg(short, long, value_name = "ID")]
    pub session: Option<String>,

    /// Knowledge base JSON file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub kb: Option<PathBuf>,

    /// Write a JSONL conversation transcript to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the waiting spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
