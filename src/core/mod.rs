pub mod app;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod format;
pub mod generation;
pub mod llm;
pub mod message;
pub mod paths;
pub mod thread;
