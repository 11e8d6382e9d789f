//! CLI-only commands: config info, component registry, text formatting.
//!
//! These run without opening the TUI and produce plain text output.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::core::app;
use crate::core::components::ComponentKind;
use crate::core::config::{self, ConfigError};
use crate::core::format::{self, RenderBlock, Span};
use crate::core::paths;

const BOLD_ON: &str = "\x1b[1m";
const BOLD_OFF: &str = "\x1b[22m";

/// Run the `config` command: display paths, model, and API key status.
pub fn run_config() {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    let (model, source) = config::model_source();
    let (base_url, api_key_status) = match config::load() {
        Ok(c) => (c.base_url, "set ✓"),
        Err(ConfigError::MissingApiKey) => (config::DEFAULT_BASE_URL.to_string(), "not set"),
    };

    println!("Version:  {} {}", app::NAME, app::VERSION);
    println!("Config:   {}", config_dir);
    println!("Log file: {}", log_file);
    println!("Base URL: {}", base_url);
    println!("Model:    {} ({})", model, source);
    println!("API key:  {}", api_key_status);
}

/// Run the `components` command: list registered components, optionally with schemas.
pub fn run_components(schema: bool) {
    for kind in ComponentKind::ALL {
        println!("{:<14}  {}", kind.name(), kind.description());
        if schema {
            match serde_json::to_string_pretty(&kind.props_schema()) {
                Ok(s) => println!("{}\n", s),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }
}

/// Run the `format` command: read text from a file (or stdin) and print the
/// formatted blocks, either as styled text or as JSON.
pub fn run_format(file: Option<&Path>, json: bool) {
    let text = match read_input(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let blocks = format::format(&text);

    if json {
        match serde_json::to_string_pretty(&blocks) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let ansi = io::stdout().is_terminal();
    for block in &blocks {
        println!("{}", render_block(block, ansi));
    }
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// One block as a terminal line. Bold uses ANSI when `ansi`, otherwise stays unmarked.
fn render_block(block: &RenderBlock, ansi: bool) -> String {
    let spans = render_spans(block.spans(), ansi);
    match block {
        RenderBlock::LineBreak => String::new(),
        RenderBlock::Paragraph { .. } => spans,
        RenderBlock::ListItem { marker, .. } => format!("  {} {}", marker.as_str(), spans),
    }
}

fn render_spans(spans: &[Span], ansi: bool) -> String {
    let mut out = String::new();
    for span in spans {
        if span.is_bold() && ansi {
            out.push_str(BOLD_ON);
            out.push_str(span.text());
            out.push_str(BOLD_OFF);
        } else {
            out.push_str(span.text());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_list_item_plain() {
        let blocks = format::format("1. **Hello** world\n\n- item");
        let lines: Vec<String> = blocks.iter().map(|b| render_block(b, false)).collect();
        assert_eq!(lines, vec!["  1. Hello world", "", "  • item"]);
    }

    #[test]
    fn render_bold_with_ansi() {
        let blocks = format::format("a **b** c");
        assert_eq!(render_block(&blocks[0], true), "a \x1b[1mb\x1b[22m c");
    }
}
