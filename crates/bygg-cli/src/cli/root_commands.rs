use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List time entries, most recent first.
    Entries(EntriesArgs),
    /// Dashboard figures: totals, average, hours per project and work type.
    Stats,
    /// Project catalog with accumulated hours.
    Projects,
    /// Run one AI analysis over the current entries.
    Analyze,
    /// Print a JSON schema, or list registered schema names.
    Schema(SchemaArgs),
    /// Interactive session for logging and analysing hours.
    Shell,
}

#[derive(Clone, Debug, Args)]
pub struct EntriesArgs {
    /// Case-insensitive filter on description, worker, or project name.
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `ai_analysis`). Lists names when omitted.
    pub name: Option<String>,
}
