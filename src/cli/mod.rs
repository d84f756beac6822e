//! CLI argument parsing for postsmith.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Generate a blog post for a randomly selected topic using a local model.
///
/// Posts are written as `<output-dir>/<category>/<date>-<slug>.md` with Hugo
/// frontmatter. When the model cannot be reached, a template post with
/// placeholder sections is written instead.
#[derive(Parser, Debug)]
#[command(name = "postsmith")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  postsmith --model llama3.2:latest        Generate a post with a specific model
  postsmith --model llama3:8b --list       List available topics")]
pub struct Cli {
    /// Model to generate with (e.g. llama3.2:latest, llama3:8b).
    #[arg(long)]
    pub model: String,

    /// List all configured topics and exit without generating.
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging and full error detail.
    #[arg(short, long)]
    pub verbose: bool,

    /// Topics/config file; created with defaults if missing.
    #[arg(long, default_value = "topics.yaml")]
    pub config: PathBuf,

    /// Output root directory (overrides `posts.output_dir`).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Endpoint base URL (overrides `endpoint.base_url`).
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
