//! CLI command definitions

use clap::{Parser, ValueEnum};
use scout_domain::{SuggestionContext, SuggestionRequest};
use std::path::PathBuf;

/// Output format for suggestion results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with score, availability and price columns
    Table,
    /// The raw response as JSON
    Json,
}

impl From<OutputFormat> for scout_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for domain-scout
#[derive(Parser, Debug)]
#[command(name = "domain-scout")]
#[command(author, version, about = "Suggest available, well-priced domain names for an idea")]
#[command(long_about = r#"
Domain Scout asks a language model for domain names matching your idea.

By default the model runs as an agent: it may check prices and availability
with tools before answering. --plain asks for a single list of names instead.

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./domain-scout.toml                      Project-level config
3. ~/.config/domain-scout/config.toml       Global config
Environment variables (AI_ENDPOINT, AI_API_KEY, AI_MODEL, PRICE_SERVICE_ADDR,
DOMAIN_SCOUT_*) override every file.

Example:
  domain-scout "specialty coffee roaster in Lisbon"
  domain-scout -n 5 -c preferred_tlds=.com,.pt -c location=Lisbon "coffee roaster"
  domain-scout --plain -o json "kids coding school"
"#)]
pub struct Cli {
    /// Free-text description of the project to name
    #[arg(required_unless_present = "show_config")]
    pub query: Option<String>,

    /// Number of suggestions to ask for (0 lets the model use its default)
    #[arg(short = 'n', long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_results: i64,

    /// Extra constraint, e.g. preferred_tlds=.com,.io (can be specified multiple times)
    #[arg(short, long = "context", value_name = "KEY=VALUE", value_parser = parse_context_pair)]
    pub context: Vec<(String, String)>,

    /// Single-shot generation without price or availability tools
    #[arg(long)]
    pub plain: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
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

impl Cli {
    /// Build the request from the query, count and `--context` pairs.
    ///
    /// Returns `None` when no query was given.
    pub fn request(&self) -> Option<SuggestionRequest> {
        let query = self.query.as_deref()?.trim();
        if query.is_empty() {
            return None;
        }

        let context: SuggestionContext = self
            .context
            .iter()
            .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
            .collect();

        Some(SuggestionRequest::new(query, self.max_results).with_context(context))
    }
}

fn parse_context_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
