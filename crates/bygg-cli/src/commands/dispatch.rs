use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::Session;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    session: &mut Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Entries(args) => commands::entries::handle(&args, session, flags),
        Commands::Stats => commands::stats::handle(session, flags),
        Commands::Projects => commands::projects::handle(session, flags),
        Commands::Analyze => commands::analyze::handle(session, flags).await,
        Commands::Shell => commands::shell::handle(session, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
