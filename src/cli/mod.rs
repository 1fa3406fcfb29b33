//! Command shell that collects, validates, and displays expenses.

pub mod commands;
pub mod core;
pub mod forms;
pub mod output;
mod shell;
pub mod table;

pub use shell::{run_cli, SCRIPT_MODE_ENV};
