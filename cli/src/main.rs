//! CLI entrypoint for streamchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use streamchat_application::{ChatSession, ConversationLogger, InferenceService};
use streamchat_infrastructure::{
    ConfigLoader, EchoInference, FileConfig, FileLoggingConfig, HttpInferenceService,
    InferenceBackend, JsonlConversationLogger, SerializedInference,
};
use streamchat_presentation::{
    BackendArg, ChatLabels, Cli, ConsoleFormatter, TuiApp, stream_reply,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "streamchat.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    apply_cli_overrides(&mut config, &cli);

    if cli.show_config {
        ConfigLoader::print_config(&config, cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    config.validate().context("Invalid configuration")?;

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, cli.is_interactive(), &config.logging)?;
    info!(
        "Starting streamchat ({} backend, temperature {})",
        config.inference.backend, config.session.temperature
    );

    // === Dependency Injection ===
    match config.inference.backend {
        InferenceBackend::Echo => {
            let worker = SerializedInference::new(EchoInference::new(config.inference.echo_delay()));
            run(&cli, &config, worker).await
        }
        InferenceBackend::Http => {
            let endpoint = config.inference.endpoint.clone();
            match HttpInferenceService::connect(&endpoint, config.inference.api_token.clone()).await
            {
                Ok(service) => run(&cli, &config, service).await,
                Err(e) => {
                    warn!("Could not connect to {}: {}", endpoint, e);
                    if cli.is_interactive() {
                        TuiApp::<HttpInferenceService>::unavailable(e.to_string(), labels(&config))
                            .run()
                            .await?;
                        return Ok(ExitCode::FAILURE);
                    }
                    eprintln!(
                        "{}",
                        ConsoleFormatter::error(&format!(
                            "Could not connect to the model at {}: {}",
                            endpoint, e
                        ))
                    );
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// Command-line flags win over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.inference.endpoint = endpoint.clone();
    }
    if let Some(backend) = cli.backend {
        config.inference.backend = match backend {
            BackendArg::Http => InferenceBackend::Http,
            BackendArg::Echo => InferenceBackend::Echo,
        };
    }
    if let Some(temperature) = cli.temperature {
        config.session.temperature = temperature;
    }
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive runs log to a file.
fn init_logging(
    verbose: u8,
    interactive: bool,
    logging: &FileLoggingConfig,
) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    }

    let Some(log_dir) = logging.resolved_log_dir() else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Could not create log directory {}", log_dir.display()))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&log_dir, LOG_FILE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn conversation_logger(logging: &FileLoggingConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = logging.conversation_log.as_ref()?;
    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Some(Arc::new(logger))
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path.display(), e);
            None
        }
    }
}

fn labels(config: &FileConfig) -> ChatLabels {
    let endpoint = match config.inference.backend {
        InferenceBackend::Http => config.inference.endpoint.clone(),
        InferenceBackend::Echo => "offline echo".to_string(),
    };

    ChatLabels {
        app_name: config.deployment.app_name.clone(),
        model: config.deployment.model_file.clone(),
        endpoint,
        assistant_name: config.session.assistant_name.clone(),
        user_name: config.session.user_name.clone(),
    }
}

async fn run<S: InferenceService + 'static>(
    cli: &Cli,
    config: &FileConfig,
    service: S,
) -> Result<ExitCode> {
    let mut session = ChatSession::new(Arc::new(service), config.session.to_session_config());
    if let Some(logger) = conversation_logger(&config.logging) {
        session = session.with_conversation_logger(logger);
    }

    if let Some(text) = &cli.prompt {
        return match session.prompt(text).await {
            Ok(completion) => {
                println!("{}", completion);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                Ok(ExitCode::FAILURE)
            }
        };
    }

    if let Some(text) = &cli.ask {
        let mut stdout = io::stdout();
        let outcome = stream_reply(&session, text, &mut stdout).await?;
        println!();

        return Ok(match outcome.error {
            Some(error) if outcome.content.is_empty() => {
                eprintln!("{}", ConsoleFormatter::error(&error));
                ExitCode::FAILURE
            }
            Some(error) => {
                eprintln!("{}", ConsoleFormatter::interrupted(&error));
                ExitCode::FAILURE
            }
            None => ExitCode::SUCCESS,
        });
    }

    TuiApp::new(session, labels(config)).run().await?;
    Ok(ExitCode::SUCCESS)
}
