//! CLI entrypoint for AutoStream Agent
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use autostream_application::{
    BehaviorConfig, ConversationLogger, HandleMessageUseCase, NoConversationLogger,
    ProcessTurnUseCase,
};
use autostream_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, GeminiSettings, InMemorySessionRepository,
    JsonKnowledgeBaseLoader, JsonlConversationLogger, MockLeadCapture, Severity,
};
use autostream_presentation::{ChatRepl, Cli, ConsoleFormatter, ReplConfig, ThinkingSpinner};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    info!("Starting AutoStream Agent");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue),
            Severity::Error => error!("Config: {}", issue),
        }
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue);
    }

    // === Dependency Injection ===
    let api_key = config.model.resolve_api_key();
    if api_key.is_none() {
        bail!(
            "No API key found. Set ${} or model.api_key in the config file.",
            config.model.api_key_env
        );
    }
    let gateway = Arc::new(
        GeminiGateway::new(GeminiSettings {
            model: config.model.name.clone(),
            base_url: config.model.base_url.clone(),
            api_key,
            api_key_env: config.model.api_key_env.clone(),
            connect_timeout: Duration::from_secs(config.model.connect_timeout_secs),
        })
        .context("Failed to create model gateway")?,
    );

    let knowledge = JsonKnowledgeBaseLoader::new(ConfigLoader::expand_path(
        &config.knowledge.path,
    ))
    .load_or_init()
    .context("Failed to load knowledge base")?;

    let conversation_logger: Arc<dyn ConversationLogger> = match config
        .logging
        .transcript
        .as_deref()
        .map(ConfigLoader::expand_path)
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let (roles, _) = config.roles.to_role_mapping();
    let turn = ProcessTurnUseCase::new(gateway, Arc::new(knowledge))
        .with_retry_policy(config.retry.to_policy())
        .with_behavior(&BehaviorConfig::from_timeout_seconds(Some(
            config.model.timeout_secs,
        )))
        .with_role_mapping(roles)
        .with_conversation_logger(conversation_logger.clone());

    let use_case = Arc::new(
        HandleMessageUseCase::new(
            turn,
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(MockLeadCapture::new()),
        )
        .with_conversation_logger(conversation_logger),
    );

    let session = config.session.to_session_id()?;

    // Single message mode
    if let Some(message) = &cli.message {
        let spinner = (!cli.quiet).then(|| ThinkingSpinner::start("Thinking..."));
        let outcome = use_case.handle(&session, message).await?;
        if let Some(spinner) = spinner {
            spinner.finish();
        }
        println!("{}", ConsoleFormatter::turn(&outcome));
        return Ok(());
    }

    let repl_config = ReplConfig {
        show_spinner: config.repl.show_spinner && !cli.quiet,
        history_file: config
            .repl
            .history_file
            .as_deref()
            .map(ConfigLoader::expand_path)
            .or_else(ConfigLoader::default_history_path),
        ..ReplConfig::default()
    };

    ChatRepl::new(use_case, session)
        .with_config(repl_config)
        .run()
        .await?;

    Ok(())
}

/// Apply command line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(session) = &cli.session {
        config.session.id = session.clone();
    }
    if let Some(kb) = &cli.kb {
        config.knowledge.path = kb.to_string_lossy().into_owned();
    }
    if let Some(transcript) = &cli.transcript {
        config.logging.transcript = Some(transcript.to_string_lossy().into_owned());
    }
}

/// Initialize logging based on verbosity level.
///
/// Without `-v`, `RUST_LOG` is honoured and defaults to `warn`. When a log
/// file is configured, output goes there (daily rotation) instead of stderr.
fn init_logging(verbose: u8, file: Option<&str>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(file) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    };

    let (dir, prefix) = log_file_target(&ConfigLoader::expand_path(file));
    let appender = tracing_appender::rolling::daily(dir, prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Some(guard)
}

/// Directory and file-name prefix for the daily rolling log file.
fn log_file_target(path: &Path) -> (PathBuf, OsString) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let prefix = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "autostream-agent.log".into());
    (dir.to_path_buf(), prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "autostream-agent",
            "--model",
            "gemini-2.5-pro",
            "--session",
            "demo",
            "--kb",
            "data/kb.json",
            "--transcript",
            "out.jsonl",
        ]);
        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.model.name, "gemini-2.5-pro");
        assert_eq!(config.session.id, "demo");
        assert_eq!(config.knowledge.path, "data/kb.json");
        assert_eq!(config.logging.transcript.as_deref(), Some("out.jsonl"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::parse_from(["autostream-agent"]);
        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert!(config.logging.transcript.is_none());
    }

    #[test]
    fn test_log_file_target_splits_path() {
        let (dir, prefix) = log_file_target(Path::new("logs/agent.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(prefix, OsString::from("agent.log"));

        let (dir, prefix) = log_file_target(Path::new("agent.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(prefix, OsString::from("agent.log"));

        let (_, prefix) = log_file_target(Path::new("/"));
        assert_eq!(prefix, OsString::from("autostream-agent.log"));
    }
}
