//! CLI entrypoint for domain-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use scout_application::{
    AgentProgressNotifier, ConversationLogger, NoAgentProgress, NoConversationLogger,
    PriceStreamPort, SuggestDomainsUseCase, SuggestWithToolsUseCase,
};
use scout_domain::{AgentResponse, SuggestionRequest};
use scout_infrastructure::{
    AvailabilityCheckerTool, ConfigLoader, FileConfig, HttpPriceStreamProvider,
    JsonlConversationLogger, OpenAiCompatibleGateway, OpenAiSettings, PriceCheckerTool,
    ToolRegistry,
};
use scout_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for results
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("Config: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let Some(request) = cli.request() else {
        bail!("A query is required, e.g. domain-scout \"specialty coffee roaster\"");
    };
    let format = config.output.resolve_format(cli.output.map(Into::into));
    if !config.output.use_color(format) {
        colored::control::set_override(false);
    }

    info!("Starting domain-scout with model {}", config.llm.model);

    // Ctrl-C cancels the whole run
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling run");
                cancel.cancel();
            }
        }
    });

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiCompatibleGateway::new(OpenAiSettings {
        endpoint: config.llm.endpoint.clone(),
        api_key: config.llm.api_key.clone(),
        model: config.llm.model.clone(),
        temperature: Some(config.llm.temperature),
        timeout: Duration::from_secs(config.llm.timeout_seconds),
    })?);

    let outcome = if cli.plain {
        SuggestDomainsUseCase::new(gateway)
            .with_cancellation(cancel)
            .execute(&request)
            .await
    } else {
        let registry = Arc::new(build_tools(&config)?);
        let logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log {
            Some(path) => match JsonlConversationLogger::open(path) {
                Some(logger) => Arc::new(logger),
                None => Arc::new(NoConversationLogger),
            },
            None => Arc::new(NoConversationLogger),
        };
        let progress: Box<dyn AgentProgressNotifier> = if cli.quiet {
            Box::new(NoAgentProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

        SuggestWithToolsUseCase::new(gateway, registry)
            .with_cancellation(cancel)
            .with_conversation_logger(logger)
            .execute(&request, progress.as_ref())
            .await
    };

    match outcome {
        Ok(response) => {
            print_response(format, &request, &response);
            Ok(())
        }
        Err(e) if e.is_cancelled() => bail!("Cancelled"),
        Err(e) => Err(e).context(format!("No suggestions for '{}'", request.query())),
    }
}

/// Build the tool registry from config. The price tool needs a price service endpoint.
fn build_tools(config: &FileConfig) -> Result<ToolRegistry> {
    let lookup_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.availability.timeout_seconds))
        .build()
        .context("Failed to build availability HTTP client")?;

    let mut registry = ToolRegistry::new().register(AvailabilityCheckerTool::new(
        lookup_client,
        config.availability.lookup_url.clone(),
    ));

    match &config.pricing.endpoint {
        Some(endpoint) if !endpoint.trim().is_empty() => {
            let provider: Arc<dyn PriceStreamPort> = Arc::new(
                HttpPriceStreamProvider::new(reqwest::Client::new(), endpoint.trim())
                    .with_currency(config.pricing.currency.clone()),
            );
            registry = registry.register(PriceCheckerTool::new(provider));
        }
        _ => warn!("pricing.endpoint (PRICE_SERVICE_ADDR) is not set; price checks are disabled"),
    }

    Ok(registry)
}

fn print_response(
    format: scout_domain::OutputFormat,
    request: &SuggestionRequest,
    response: &AgentResponse,
) {
    info!(
        "Got {} suggestions for '{}'",
        response.domains.len(),
        request.query()
    );
    println!("{}", ConsoleFormatter::render(format, response));
}
