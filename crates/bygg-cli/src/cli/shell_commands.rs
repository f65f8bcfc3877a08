//! Command grammar for lines typed into `byggkoll shell`.

use bygg_core::enums::WorkType;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// One shell line, parsed without a binary name.
#[derive(Debug, Parser)]
#[command(
    name = "byggkoll>",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ShellCommand {
    /// Log hours on a project.
    Add(AddArgs),
    /// Delete an entry by id.
    #[command(alias = "rm")]
    Remove {
        /// Entry id, e.g. ent-00000001.
        id: String,
    },
    /// List entries, most recent first.
    #[command(alias = "ls")]
    List,
    /// Filter entries by description, worker, or project name.
    Search {
        /// Search words; an empty search lists everything.
        term: Vec<String>,
    },
    /// Dashboard figures.
    Stats,
    /// Project catalog with accumulated hours.
    Projects,
    /// Start an AI analysis in the background.
    Analyze,
    /// Analysis state and the latest result.
    Status,
    /// Leave the shell.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Project id from the catalog (see `projects`).
    #[arg(short, long)]
    pub project: String,

    /// Hours worked.
    #[arg(long)]
    pub hours: f64,

    /// Work type: normal, overtime, travel, absence, change_order_work, or the Swedish label.
    #[arg(short = 't', long = "type", default_value = "normal")]
    pub work_type: WorkType,

    /// Work date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Worker name; defaults to the configured worker.
    #[arg(short, long)]
    pub worker: Option<String>,

    /// What was done.
    #[arg(required = true)]
    pub description: Vec<String>,
}
