// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rr: run shell scripts with retries

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod render;
mod which;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::bash::BashArgs;
use commands::script::ScriptArgs;
use commands::task::TaskArgs;
use commands::Context;
use exit_error::{ExitError, EXIT_SETUP};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rr",
    version,
    about = "Run a shell script, retrying failed attempts",
    styles = color::styles(),
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for generated scripts [env: RR_SCRATCH_DIR, AGENT_TEMPDIRECTORY]
    #[arg(long, value_name = "DIR", global = true)]
    scratch_dir: Option<PathBuf>,

    /// Output format for the final summary
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an inline or file script with a retry policy
    Script(ScriptArgs),
    /// Run a script once with bash
    Bash(BashArgs),
    /// Run a request described by a TOML task file
    Task(TaskArgs),
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = Context { scratch_dir: cli.scratch_dir, output: cli.output };
    match cli.command {
        Commands::Script(args) => commands::script::handle(args, &ctx).await,
        Commands::Bash(args) => commands::bash::handle(args, &ctx).await,
        Commands::Task(args) => commands::task::handle(args, &ctx).await,
    }
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.is_silent() {
                    eprintln!("{} {}", color::error("error:"), exit);
                }
                exit.code
            }
            None => {
                eprintln!("{} {:#}", color::error("error:"), e);
                EXIT_SETUP
            }
        };
        std::process::exit(code);
    }
}
