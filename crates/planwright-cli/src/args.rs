//! Command-line argument definitions.
//!
//! Argument structs carry the clap-specific attributes and convert into the
//! core parameter types, so `planwright-core` stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Console
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use planwright_core::{models::EnabledFilter, Id, ListPlans};

/// Console for authoring package plans and their scoring rubrics
///
/// Plans live in memory for the duration of one run. Use `--seed-file` to
/// preload plans, and the `console` subcommand to create and edit plans
/// through the step-by-step wizard.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// Path to the assistant config file. Defaults to
    /// $XDG_CONFIG_HOME/planwright/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON array of plans to preload into the in-memory store
    #[arg(long, global = true)]
    pub seed_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a plan draft file against every wizard gate
    #[command(alias = "v")]
    Validate(DraftFileArgs),
    /// Compile a plan draft file into scoring instructions
    #[command(alias = "c")]
    Compile(DraftFileArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Start an interactive session with the plan wizard
    Console,
}

/// A plan draft (or saved plan) as JSON
#[derive(ClapArgs)]
pub struct DraftFileArgs {
    /// Path to the JSON file
    pub file: PathBuf,
}

/// List plans, optionally filtered
#[derive(ClapArgs)]
pub struct ListPlansArgs {
    /// Which plans to show by enabled flag
    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,
    /// Case-insensitive substring of the plan name
    #[arg(long)]
    pub search: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status.into(),
            search: val.search,
        }
    }
}

/// Show details of a specific plan
#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: String,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Command-line representation of the enabled filter
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Every plan
    All,
    /// Only enabled plans
    Enabled,
    /// Only disabled plans
    Disabled,
}

impl From<StatusArg> for EnabledFilter {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::All => EnabledFilter::All,
            StatusArg::Enabled => EnabledFilter::Enabled,
            StatusArg::Disabled => EnabledFilter::Disabled,
        }
    }
}
