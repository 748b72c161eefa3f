use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SessionCommands {
    /// Create a hosted widget session
    Create,
    /// Refresh an expiring session secret
    Refresh {
        /// Current client secret
        #[arg(long)]
        client_secret: String,
    },
}
