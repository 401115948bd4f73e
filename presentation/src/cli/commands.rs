//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tutor_domain::Persona;

/// Output format for the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The response (or error) as a single plain-text line
    Text,
    /// Pretty-printed JSON record
    Json,
}

impl From<OutputFormat> for tutor_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => tutor_domain::OutputFormat::Text,
            OutputFormat::Json => tutor_domain::OutputFormat::Json,
        }
    }
}

/// Tutor persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersonaArg {
    /// Step by step, minimum details
    Concise,
    /// Step by step, every detail
    Thorough,
}

impl From<PersonaArg> for Persona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Concise => Persona::Concise,
            PersonaArg::Thorough => Persona::Thorough,
        }
    }
}

/// CLI arguments for virtual-teacher
#[derive(Parser, Debug)]
#[command(name = "virtual-teacher")]
#[command(author, version, about = "Virtual math teacher - step-by-step answers from a hosted LLM")]
#[command(long_about = r#"
Virtual Teacher sends math questions to a hosted chat model and prints a
step-by-step explanation.

Questions without a digit or one of + - * / = are turned away before any
request is made.

The API key is read from $GROQ_API_KEY, then from ./api_key.env.

Configuration files are loaded from (in priority order):
1. TUTOR_* environment variables
2. --config <path>     Explicit config file
3. ./tutor.toml        Project-level config
4. ~/.config/virtual-teacher/config.toml   Global config

Example:
  virtual-teacher "How do I solve the equation: 2x + 3 = 7?"
  virtual-teacher -o json --persona thorough "Integrate x^2 from 0 to 3"
  virtual-teacher            # asks for the question and the output format
"#)]
pub struct Cli {
    /// The question to ask (prompted for when omitted)
    pub question: Option<String>,

    /// Output format (asked interactively when neither flag nor config sets it)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Persona wording for the system instruction
    #[arg(short, long, value_enum)]
    pub persona: Option<PersonaArg>,

    /// Model to ask
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Env file holding the API key
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Append a JSONL conversation transcript to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

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
