use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Lab { action } => commands::lab::handle(&action, ctx, flags).await,
        Commands::Progress { action } => commands::progress::handle(&action, ctx, flags),
        Commands::Nav { action } => commands::nav::handle(&action, flags),
        Commands::Prompts(args) => commands::prompts::handle(&args, ctx, flags),
        Commands::Icon { .. } => unreachable!("icon is pre-dispatched in main"),
    }
}
