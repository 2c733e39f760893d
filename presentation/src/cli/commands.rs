//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for statehouse
#[derive(Parser, Debug)]
#[command(name = "statehouse")]
#[command(author, version, about = "Terminal assistant for New York State legislation")]
#[command(long_about = r#"
Statehouse answers questions about New York State legislation from your
terminal. Replies stream in live, and bill print numbers (S1528, A405B)
become links you can follow with --bill.

Modes:
  statehouse "question"     One-shot: ask, get the answer, exit
  statehouse --chat         Interactive chat with conversation history
  statehouse --bill S1528   Look up a bill in the Open Legislation API

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./statehouse.toml      Project-level config
3. ~/.config/statehouse/config.toml   Global config

Example:
  statehouse "What does S1528 change about drug pricing?"
  statehouse --chat -m gpt-4o
  statehouse --bill A405B
  statehouse --chat --export-html session.html
"#)]
pub struct Cli {
    /// The question to ask (not required with --chat or --bill)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Look up a bill by print number instead of asking a question
    #[arg(short, long, value_name = "PRINT_NO")]
    pub bill: Option<String>,

    /// Model to use for answers
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Write an HTML transcript of the session to this file on exit
    #[arg(long, value_name = "PATH")]
    pub export_html: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_one_shot_question() {
        let cli = Cli::try_parse_from(["statehouse", "what is S1528?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("what is S1528?"));
        assert!(!cli.chat);
        assert!(cli.bill.is_none());
    }

    #[test]
    fn parses_bill_lookup_with_flags() {
        let cli =
            Cli::try_parse_from(["statehouse", "--bill", "S1528", "--no-color", "-vv"]).unwrap();
        assert_eq!(cli.bill.as_deref(), Some("S1528"));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }
}
