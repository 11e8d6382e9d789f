//! # AdaptUI - generative UI chat in the terminal
//!
//! Type a prompt and the model answers with formatted text plus, when it fits,
//! an interactive component (learning syllabus, interview roadmap, project ideas).
//!
//! ## Modes
//! - Interactive terminal UI (default)
//! - Single prompt mode with `-p` or `--prompt`
//! - Offline subcommands: `config`, `components`, `format`, `completions`

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Config) => {
            core::cli::run_config();
            return Ok(());
        }
        Some(Commands::Components { schema }) => {
            core::cli::run_components(schema);
            return Ok(());
        }
        Some(Commands::Format { ref file, json }) => {
            core::cli::run_format(file.as_deref(), json);
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    // Print user-friendly message; exit uses Display not Debug.
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Some(ref prompt) = args.prompt {
        return run::run_single_prompt(&args, prompt, &config).await;
    }

    run::launch_tui(config).await
}
