//! CLI argument parsing for cvprompt

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cvp")]
#[command(author, version, about = "Interactive generator for LaTeX CV tailoring prompts", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Answer every question with its default without reading input
    #[arg(short = 'y', long)]
    pub accept_defaults: bool,

    /// List the question fields with their defaults and exit
    #[arg(long)]
    pub list_fields: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["cvp"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.accept_defaults);
        assert!(!cli.list_fields);
    }

    #[test]
    fn test_parse_all_args() {
        let cli = Cli::try_parse_from(["cvp", "-c", "cfg.yml", "-l", "debug", "-y", "--list-fields"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.yml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.accept_defaults);
        assert!(cli.list_fields);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(Cli::try_parse_from(["cvp", "--bogus"]).is_err());
    }
}
