//! CLI commands for the stored session

use clap::Subcommand;

use super::AppContext;
use crate::error::FinReportResult;
use crate::session::SessionStore;

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show the signed-in user
    Show,

    /// Sign out by removing the stored session
    #[command(alias = "logout")]
    Clear,
}

/// Handle session commands
pub fn handle_session_command(ctx: &AppContext, cmd: SessionCommands) -> FinReportResult<()> {
    let store = SessionStore::new(&ctx.paths);

    match cmd {
        SessionCommands::Show => match store.current_user()? {
            Some(user) => {
                println!("Signed in as user {}", user.user_id);
                if let Some(name) = &user.name {
                    println!("  Name:  {}", name);
                }
                if let Some(email) = &user.email {
                    println!("  Email: {}", email);
                }
            }
            None => {
                println!("Not signed in.");
                if let Some(id) = ctx.settings.default_user_id {
                    println!("Reports will use the configured default user {}.", id);
                }
            }
        },
        SessionCommands::Clear => {
            if store.clear()? {
                println!("Signed out.");
            } else {
                println!("No session to clear.");
            }
        }
    }

    Ok(())
}
