use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AuthCommands {
    /// Register a new account and store the session
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Log in and store the session
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Check the stored token against the backend
    Verify,
    /// Drop the stored session and cached conversations
    Logout,
}
