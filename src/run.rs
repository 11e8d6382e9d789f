//! Application run modes: logger init, single prompt, TUI launch.

use std::io::{self, Write};
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::generation::GenerationStage;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_file()
    {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run single prompt mode: send on an empty thread, print the reply and any component.
pub async fn run_single_prompt(
    args: &Args,
    prompt_arg: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let model = args.model.as_deref().unwrap_or(&config.model_id);

    let options = if args.no_stream {
        core::llm::ChatOptions::default()
    } else {
        core::llm::ChatOptions {
            on_stage: Some(Box::new(|stage: GenerationStage| {
                if stage.is_generating() && stage != GenerationStage::StreamingResponse {
                    let _ = writeln!(io::stderr(), "{}...", stage.label());
                }
            })),
            on_content_chunk: Some(Box::new(|s| {
                let _ = io::stdout().write_all(s.as_bytes());
                let _ = io::stdout().flush();
            })),
            ..Default::default()
        }
    };

    let reply = core::llm::send_thread_message(
        core::llm::ChatRequest {
            config,
            model,
            history: &[],
            prompt,
        },
        options,
    )
    .await?;

    // In streaming mode, content was already printed via on_content_chunk
    if args.no_stream {
        println!("{}", reply.content);
    } else {
        println!();
    }
    if let Some(component) = reply.component {
        println!();
        print!("{}", component);
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
