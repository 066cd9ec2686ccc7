// src/main.rs
use anyhow::Result;
use clap::Parser;

use glove_vocab::cli::{Args, run_with};
use glove_vocab::utils::init_logger;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let settings = args.settings()?;
    run_with(&args, &settings)?;
    Ok(())
}
