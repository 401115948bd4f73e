//! CLI entrypoint for Virtual Teacher
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_application::{
    AnswerQuestionError, AnswerQuestionInput, AnswerQuestionUseCase, ConversationLogger,
    NoConversationLogger, NoProgress, PipelineProgress,
};
use tutor_domain::{Model, OutputFormat, Persona};
use tutor_infrastructure::{
    ConfigLoader, CredentialResolver, FileConfig, GroqModelClient, GroqSettings,
    JsonlConversationLogger, Severity,
};
use tutor_presentation::{Cli, ConsoleFormatter, ProgressReporter, Prompter, SimpleProgress};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
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

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let hint = error
                .downcast_ref::<AnswerQuestionError>()
                .and_then(|e| match e {
                    AnswerQuestionError::Service(service) => service.hint(),
                    _ => None,
                });
            eprintln!("{}", ConsoleFormatter::format_error(&format!("{error:#}"), hint));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("{}", ConsoleFormatter::format_error(&issue.message, None)),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("invalid configuration");
    }

    ConsoleFormatter::set_color_enabled(config.output.color);

    let use_case = build_use_case(&cli, &config)?;
    let persona = resolve_persona(&cli, &config);

    // === Question ===
    let mut prompter = Prompter::stdio();
    let question = match cli.question.clone() {
        Some(q) => q,
        None => prompter
            .ask_question()
            .context("failed to read the question")?,
    };

    let progress: Box<dyn PipelineProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(NoProgress)
    };

    let state = use_case
        .execute_with_progress(
            AnswerQuestionInput::new(question).with_persona(persona),
            progress.as_ref(),
        )
        .await?;

    // === Output ===
    let format = match cli.output.map(OutputFormat::from).or(config.output.format) {
        Some(format) => format,
        None => prompter
            .ask_format()
            .context("failed to read the output format choice")?,
    };

    println!("{}", ConsoleFormatter::format(&state, format)?);

    Ok(())
}

/// Resolve the credential, then build the client and the use case.
///
/// Fails before any client exists when no API key can be found.
fn build_use_case(cli: &Cli, config: &FileConfig) -> Result<AnswerQuestionUseCase> {
    let env_file = cli
        .env_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.provider.env_file));
    let (api_key, source) =
        CredentialResolver::new(config.provider.api_key_env.clone(), env_file)
            .with_configured_key(config.provider.api_key.clone())
            .resolve()?;
    info!("API key loaded from {:?}", source);

    let model = resolve_model(cli, config)?;
    let client = GroqModelClient::new(
        GroqSettings::new(api_key)
            .with_base_url(config.provider.base_url.clone())
            .with_model(model),
    )
    .context("failed to create model client")?;

    let logger: Arc<dyn ConversationLogger> = match cli
        .log_file
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from))
    {
        Some(path) => match JsonlConversationLogger::open(&path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    Ok(AnswerQuestionUseCase::new(Arc::new(client)).with_conversation_logger(logger))
}

fn resolve_persona(cli: &Cli, config: &FileConfig) -> Persona {
    cli.persona
        .map(Persona::from)
        .or(config.tutor.persona)
        .unwrap_or_default()
}

fn resolve_model(cli: &Cli, config: &FileConfig) -> Result<Model> {
    match cli.model.as_deref() {
        Some(name) if name.trim().is_empty() => bail!("model name cannot be empty"),
        Some(name) => {
            let Ok(model) = name.trim().parse::<Model>();
            Ok(model)
        }
        None => Ok(config.model.parse_model().0.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tutor_infrastructure::CredentialError;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const UNSET_VAR: &str = "VIRTUAL_TEACHER_TEST_UNSET_KEY";

    fn config_for(server: &MockServer, env_file: &std::path::Path) -> FileConfig {
        let mut config = FileConfig::default();
        config.provider.api_key_env = UNSET_VAR.to_string();
        config.provider.env_file = env_file.display().to_string();
        config.provider.base_url = server.uri();
        config
    }

    async fn mount_answer(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "x = 2"}}]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_request() {
        let server = MockServer::start().await;
        mount_answer(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&server, &dir.path().join("missing.env"));
        let cli = Cli::try_parse_from(["virtual-teacher", "2x + 3 = 7"]).unwrap();

        let error = build_use_case(&cli, &config).err().unwrap();

        assert!(matches!(
            error.downcast_ref::<CredentialError>(),
            Some(CredentialError::Missing { .. })
        ));
        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_env_file_credential_reaches_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer from-file"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "x = 2"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join("api_key.env");
        std::fs::write(&env_file, format!("{UNSET_VAR}=from-file\n")).unwrap();
        let config = config_for(&server, &env_file);
        let cli = Cli::try_parse_from(["virtual-teacher"]).unwrap();

        let use_case = build_use_case(&cli, &config).unwrap();
        let state = use_case.process("2x + 3 = 7").await.unwrap();

        assert_eq!(state.response(), Some("x = 2"));
    }

    #[tokio::test]
    async fn test_env_file_flag_overrides_config() {
        let server = MockServer::start().await;
        mount_answer(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join("other.env");
        std::fs::write(&env_file, format!("{UNSET_VAR}=from-flag\n")).unwrap();
        let config = config_for(&server, &dir.path().join("missing.env"));
        let cli = Cli::try_parse_from([
            "virtual-teacher",
            "--env-file",
            env_file.to_str().unwrap(),
        ])
        .unwrap();

        assert!(build_use_case(&cli, &config).is_ok());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_persona_precedence() {
        let mut config = FileConfig::default();
        config.tutor.persona = Some(Persona::Thorough);

        let cli = Cli::try_parse_from(["virtual-teacher"]).unwrap();
        assert_eq!(resolve_persona(&cli, &config), Persona::Thorough);

        let cli = Cli::try_parse_from(["virtual-teacher", "--persona", "concise"]).unwrap();
        assert_eq!(resolve_persona(&cli, &config), Persona::Concise);
    }

    #[test]
    fn test_empty_model_flag_is_rejected() {
        let cli = Cli::try_parse_from(["virtual-teacher", "-m", " "]).unwrap();
        assert!(resolve_model(&cli, &FileConfig::default()).is_err());
    }
}
