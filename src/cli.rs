//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  adapt-ui                              Launch interactive TUI
  adapt-ui -p \"Create a learning plan\"  Single prompt, stream response to stdout
  adapt-ui -p -                         Read prompt from stdin
  adapt-ui config                       Show config paths and status
  adapt-ui components --schema          List components with their props schemas
  adapt-ui format notes.md              Render formatted text to the terminal
  adapt-ui format --json < notes.md     Print the formatted blocks as JSON
  adapt-ui completions bash             Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generative UI chat: type a prompt and the AI renders the right interface",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Provide a prompt to get an immediate AI response (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override model for single prompt mode
    #[arg(short = 'm', long, help = "Model ID (e.g. anthropic/claude-haiku-4.5)")]
    pub model: Option<String>,

    /// Disable streaming in prompt mode (wait for full response before printing)
    #[arg(
        long,
        help = "In prompt mode, wait for the full response instead of streaming"
    )]
    pub no_stream: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config paths, model, and API key status
    Config,
    /// List the UI components the model can render
    Components {
        /// Also print each component's props JSON schema
        #[arg(long)]
        schema: bool,
    },
    /// Format text with the message formatter (bold, numbered and bulleted lists)
    Format {
        /// Input file ('-' or omitted reads stdin)
        file: Option<PathBuf>,
        /// Print the formatted blocks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// The TUI owns the terminal only when no prompt or subcommand was given.
    pub fn is_tui(&self) -> bool {
        self.prompt.is_none() && self.command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_subcommand() {
        let args = Args::parse_from(["adapt-ui", "format", "--json", "notes.md"]);
        match args.command {
            Some(Commands::Format { file, json }) => {
                assert!(json);
                assert_eq!(file, Some(PathBuf::from("notes.md")));
            }
            _ => panic!("expected format subcommand"),
        }
    }

    #[test]
    fn log_level_from_flags() {
        assert_eq!(Args::parse_from(["adapt-ui"]).log_level(), "warn");
        assert_eq!(Args::parse_from(["adapt-ui", "-vv"]).log_level(), "debug");
        assert_eq!(Args::parse_from(["adapt-ui", "-q"]).log_level(), "error");
        assert!(Args::parse_from(["adapt-ui"]).is_tui());
        assert!(!Args::parse_from(["adapt-ui", "config"]).is_tui());
    }
}
