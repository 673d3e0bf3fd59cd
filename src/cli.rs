use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use safecalc::parser::DEFAULT_MAX_DEPTH;
use safecalc::{Evaluator, EvaluatorConfig, format_result};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// safecalc - Evaluate simple arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "safecalc")]
#[command(about = "Evaluate simple arithmetic expressions")]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, e.g. "(2 + 3) * 4"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Deepest parenthesis or sign nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: u32,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expression: String,
    pub log_level: LogLevel,
    pub evaluator: EvaluatorConfig,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            expression: args.expression,
            log_level: args.log_level,
            evaluator: EvaluatorConfig {
                max_depth: args.max_depth as usize,
            },
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    let evaluator = Evaluator::with_config(config.evaluator);
    let value = evaluator.evaluate(&config.expression)?;
    println!("{}", format_result(value));
    Ok(())
}
