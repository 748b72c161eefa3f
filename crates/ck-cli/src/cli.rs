use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ck")]
#[command(about = "Command-line client for the chatkit backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides config and CK_API_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// User ID to operate as (defaults to the logged-in user)
    #[arg(long, global = true)]
    pub(crate) user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
