//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Moneta workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Manage the style-pipeline configuration
    Style {
        #[command(subcommand)]
        action: StyleAction,
    },
}

/// Actions on the declarative style configuration.
#[derive(Debug, Subcommand)]
pub enum StyleAction {
    /// Validate the standard declaration (globs, tokens, plugins)
    Check {},
    /// Write the style-tool document (tailwind.config.json by default)
    Emit {
        /// Destination path for the generated document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
