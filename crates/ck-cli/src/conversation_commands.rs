use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConversationCommands {
    /// List conversations
    List {
        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
        /// Offset into the result set
        #[arg(long)]
        offset: Option<u32>,
        /// Sort field (e.g. updated_at)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Create a conversation
    Create {
        /// Conversation title
        #[arg(long)]
        title: Option<String>,
    },
    /// Get a conversation with its messages
    Get {
        /// Conversation ID
        id: String,
    },
    /// Rename a conversation
    Rename {
        /// Conversation ID
        id: String,
        /// New title
        #[arg(long)]
        title: String,
    },
    /// Delete a conversation
    Delete {
        /// Conversation ID
        id: String,
    },
}
