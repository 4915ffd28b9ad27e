//! Planwright CLI
//!
//! Command-line console for authoring package plans, their evaluation
//! rubrics and the scoring prompts compiled from them.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{read_seed_plans, Cli};
use log::info;
use planwright_core::{AssistantConfig, ConsoleBuilder, ListPlans};
use renderer::TerminalRenderer;
use session::Session;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        seed_file,
        no_color,
        command,
    } = Args::parse();

    let assistant_config =
        AssistantConfig::load(config.as_deref()).context("Failed to load assistant config")?;
    let seed_plans = match seed_file {
        Some(path) => read_seed_plans(&path)?,
        None => Vec::new(),
    };

    let console = ConsoleBuilder::new()
        .with_seed_plans(seed_plans)
        .with_assistant_config(assistant_config)
        .build()
        .context("Failed to initialize console")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(&console, &renderer);

    info!(
        "Planwright started with the {} assistant",
        console.assistant().name()
    );

    match command {
        Some(Validate(args)) => cli.validate(&args.file),
        Some(Compile(args)) => cli.compile(&args.file),
        Some(List(args)) => cli.list_plans(&args.into()).await,
        Some(Show(args)) => cli.show_plan(&args.into()).await,
        Some(Console) => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            Session::new(&console, &renderer).run(stdin).await
        }
        None => cli.list_plans(&ListPlans::default()).await,
    }
}
