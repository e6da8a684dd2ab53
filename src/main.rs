use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use finreport::cli::{
    handle_report_command, handle_session_command, AppContext, ReportCommands, SessionCommands,
};
use finreport::models::UserId;

#[derive(Parser)]
#[command(
    name = "finreport",
    version,
    about = "Monthly and yearly personal-finance reports",
    long_about = "finreport fetches your income, expense and savings totals for a month \
                  or a year from the report backend, prints them, and exports them as \
                  PDF, JSON, CSV or YAML."
)]
struct Cli {
    /// Report on this user instead of the signed-in one
    #[arg(long, global = true, env = "FINREPORT_USER_ID")]
    user_id: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Session commands
    #[command(subcommand)]
    Session(SessionCommands),

    /// Write default settings to the config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    finreport::logging::init(cli.verbose);

    let ctx = AppContext::load()?;
    let explicit_user = cli.user_id.map(UserId::new);

    match cli.command {
        Some(Commands::Report(cmd)) => {
            handle_report_command(&ctx, explicit_user, cmd)?;
        }
        Some(Commands::Session(cmd)) => {
            handle_session_command(&ctx, cmd)?;
        }
        Some(Commands::Init) => {
            if ctx.paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    ctx.paths.settings_file().display()
                );
            } else {
                ctx.settings.save(&ctx.paths)?;
                println!("Settings written to: {}", ctx.paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            let settings = &ctx.settings;
            println!("finreport Configuration");
            println!("=======================");
            println!("Config directory: {}", ctx.paths.base_dir().display());
            println!("Settings file:    {}", ctx.paths.settings_file().display());
            println!("Session file:     {}", ctx.paths.session_file().display());
            println!("Export directory: {}", settings.export_dir(&ctx.paths).display());
            println!();
            println!("Settings:");
            println!("  Backend URL:     {}", settings.api_base_url);
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Currency prefix: {:?}", settings.currency_prefix);
            println!("  Amount format:   {:?}", settings.amount_format);
            println!("  Date format:     {}", settings.date_format);
            match settings.default_user_id {
                Some(id) => println!("  Default user:    {}", id),
                None => println!("  Default user:    (none)"),
            }
        }
        None => {
            println!("finreport - personal-finance reports");
            println!();
            println!("Run 'finreport --help' for usage information.");
            println!("Run 'finreport report monthly --month 2025-01' to view a month.");
        }
    }

    Ok(())
}
