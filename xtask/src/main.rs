#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::style;
use crate::models::args::{AppCommands, Cli, StyleAction};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Style { action } => match action {
            StyleAction::Check {} => style::check_style()?,
            StyleAction::Emit { output } => style::emit_style(output.as_deref())?,
        },
    }

    Ok(())
}
