//! folio - a terminal portfolio and blog
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod content;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod theme;
pub mod ui;
