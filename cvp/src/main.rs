use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use cvprompt::cli::Cli;
use cvprompt::config::Config;
use cvprompt::template::TEMPLATE;
use cvprompt::{Prompter, SCRIPT, collect, fill, present};

fn parse_level(s: &str) -> tracing::Level {
    match s.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            tracing::Level::WARN
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN. Stdout carries the
    // document, so logs go to stderr.
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn list_fields(config: &Config) {
    for q in &SCRIPT {
        let default = config.defaults.get(q.field).map(String::as_str).unwrap_or(q.default);
        let kind = if q.split { "list" } else { "text" };
        println!("{:<28} {:<5} {}", q.field, kind, default);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("cvprompt starting");

    if cli.list_fields {
        list_fields(&config);
        return Ok(());
    }

    let mut prompter = Prompter::stdio().accept_defaults(cli.accept_defaults);
    let answers = collect(&mut prompter, &config.defaults).context("Failed to collect answers")?;
    let doc = fill(&TEMPLATE, &answers).context("Failed to fill template")?;
    present(prompter.into_output(), &doc).context("Failed to print document")?;

    info!("cvprompt finished");
    Ok(())
}
