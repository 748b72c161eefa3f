use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ChatCommands {
    /// Send a chat message
    Send {
        /// Message body
        message: String,
        /// Continue an existing conversation
        #[arg(long)]
        conversation_id: Option<String>,
    },
}
