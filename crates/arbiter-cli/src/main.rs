//! arbiter — interactive driver for the deadlock-avoiding allocator.
//!
//! Takes the initial free pool from the command line and the
//! maximum-demand matrix from a text file, then reads `RQ` / `RL` / `*`
//! commands from stdin until EOF. Every command either fully commits or
//! leaves the engine state untouched; startup failures exit non-zero
//! before the loop starts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arbiter_core::ResourceVector;
use arbiter_engine::{ArbiterConfig, Ledger};
use clap::Parser;

mod command;
mod loader;
mod render;

use command::Command;

/// Deadlock-avoiding resource allocator with an interactive command loop.
#[derive(Parser)]
#[command(name = "arbiter", version)]
struct Cli {
    /// Initial available units, one per resource class.
    #[arg(required = true)]
    available: Vec<u32>,

    /// File holding the maximum-demand matrix: consumers × resource
    /// classes integers, row-major.
    #[arg(long, default_value = "resources.txt")]
    resources: PathBuf,

    /// Number of consumers described by the resources file.
    #[arg(long, default_value_t = 5)]
    consumers: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resource_count = cli.available.len();

    let maximum = loader::load_maximum(&cli.resources, cli.consumers, resource_count)
        .with_context(|| format!("loading {}", cli.resources.display()))?;
    let mut ledger = Ledger::new(ArbiterConfig {
        available: ResourceVector::from_slice(&cli.available),
        maximum,
    })
    .context("invalid startup configuration")?;

    println!("Initialized, ready to run.");
    run_loop(&mut ledger, resource_count)
}

/// Prompt, read, dispatch; one command fully settles before the next
/// line is read. EOF ends the loop cleanly.
fn run_loop(ledger: &mut Ledger, resources: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match command::parse(trimmed, resources) {
            Some(Command::Request(consumer, amounts)) => {
                match ledger.request(consumer, &amounts) {
                    Ok(()) => println!("SUCCESS."),
                    Err(err) => {
                        println!("{err}");
                        println!("DENIED.");
                    }
                }
            }
            Some(Command::Release(consumer, amounts)) => {
                match ledger.release(consumer, &amounts) {
                    Ok(()) => println!("SUCCESS."),
                    Err(err) => {
                        println!("{err}");
                        println!("DENIED.");
                    }
                }
            }
            Some(Command::Show) => print!("{}", render::state(&ledger.snapshot())),
            None => print!("{}", render::usage(resources)),
        }
    }
    Ok(())
}
