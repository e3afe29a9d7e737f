//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Inference backend selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Hosted inference endpoint over HTTP
    Http,
    /// In-process echo worker (no model needed)
    Echo,
}

/// CLI arguments for streamchat
#[derive(Parser, Debug)]
#[command(name = "streamchat")]
#[command(author, version, about = "Chat with a hosted LLM, streaming replies as they are generated")]
#[command(long_about = r#"
streamchat opens a terminal chat against a hosted inference endpoint.
Replies stream in fragment by fragment; sending a new message while one is
still streaming makes the old reply stop updating the conversation.

Configuration files are loaded from (lowest to highest priority):
1. ~/.config/streamchat/config.toml   Global config
2. ./streamchat.toml                  Project-level config
3. --config <path>                    Explicit config file
4. STREAMCHAT_<SECTION>__<KEY>        Environment variables

Example:
  streamchat
  streamchat --endpoint https://my-app.example.com
  streamchat --ask "What is the capital of France?"
  streamchat --backend echo
"#)]
pub struct Cli {
    /// Send one prompt without streaming and print the completion
    #[arg(long, value_name = "TEXT", conflicts_with = "ask")]
    pub prompt: Option<String>,

    /// Send one message and print the reply as it streams
    #[arg(long, value_name = "TEXT")]
    pub ask: Option<String>,

    /// Inference endpoint base URL (overrides inference.endpoint)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Inference backend (overrides inference.backend)
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Sampling temperature (overrides session.temperature)
    #[arg(short, long, value_name = "F")]
    pub temperature: Option<f32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and resolved values, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether the interactive TUI should start
    pub fn is_interactive(&self) -> bool {
        self.prompt.is_none() && self.ask.is_none()
    }
}
