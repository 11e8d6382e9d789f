//! TUI constants: colors, timing, landing copy, and suggestion prompts.

use std::time::Duration;

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent: soft cyan (#7EC8E3) that pairs well with the green.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Liked marker color.
pub(super) const LIKED: Color = Color::Rgb(255, 105, 135);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// How long to wait for the second byte of an Esc+key (Option as meta) sequence.
pub(crate) const ESC_SEQUENCE_DRAIN_MS: u64 = 150;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height including borders.
pub(crate) const INPUT_LINES: u16 = 3;

/// How long the copy toast stays visible.
pub(crate) const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Width of the preview panel in split view, as a percentage.
pub(crate) const PREVIEW_PERCENT: u16 = 45;

pub(super) const LANDING_BADGE: &str = "AdaptUI v1.0";
pub(super) const LANDING_TITLE: &str = "AI-Powered Generative UI";
pub(super) const LANDING_SUBTITLE: &str = "Type a prompt and AI renders the right interface";
pub(super) const LANDING_PLACEHOLDER: &str =
    "Ask for a learning plan, interview prep, or a project idea...";
pub(super) const FOLLOW_UP_PLACEHOLDER: &str = "Ask a follow-up...";
pub(super) const GENERATING_STATUS: &str = "Generating UI...";
pub(super) const LANDING_FOOTER: &str = "Built with ratatui • Generative UI in the terminal";

pub(super) const BENEFITS: &[&str] = &[
    "No credit card required",
    "Free 14-day trial",
    "Cancel anytime",
];

/// (value, label) pairs shown under the landing hero.
pub(super) const STATS: &[(&str, &str)] = &[
    ("10K+", "Active Users"),
    ("99.9%", "Uptime"),
    ("24/7", "Support"),
];

/// Prompts sent as-is when picked on the landing screen.
pub(crate) const EXAMPLE_PROMPTS: &[&str] = &[
    "Help me prepare for interviews",
    "Suggest a project idea",
    "Create a learning plan",
];

/// Suggestion tile on the landing screen.
pub(crate) struct Tile {
    pub prompt: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub(crate) const TILES: &[Tile] = &[
    Tile {
        prompt: "I'm starting to learn Go",
        title: "Learn a language",
        subtitle: "Generate a syllabus and track progress",
    },
    Tile {
        prompt: "Prepare me for a frontend interview",
        title: "Interview Ready",
        subtitle: "Tips, checklist, and career prep",
    },
    Tile {
        prompt: "Give me some React project ideas",
        title: "Project Blueprint",
        subtitle: "Tech stacks and project inspiration",
    },
];

/// Number of selectable suggestions (example prompts, then tiles).
pub(crate) fn suggestion_count() -> usize {
    EXAMPLE_PROMPTS.len() + TILES.len()
}

/// Prompt text for suggestion `index` (example prompts first, then tiles).
pub(crate) fn suggestion_prompt(index: usize) -> Option<&'static str> {
    match index.checked_sub(EXAMPLE_PROMPTS.len()) {
        None => EXAMPLE_PROMPTS.get(index).copied(),
        Some(tile) => TILES.get(tile).map(|t| t.prompt),
    }
}

/// True if suggestion `index` is one of the example prompts (gated separately from tiles).
pub(crate) fn is_example_prompt(index: usize) -> bool {
    index < EXAMPLE_PROMPTS.len()
}

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames for the generating animation (braille pattern, 4 frames).
pub(super) const LOGO_THINKING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
