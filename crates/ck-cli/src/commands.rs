use crate::{
    auth_commands::AuthCommands, chat_commands::ChatCommands,
    conversation_commands::ConversationCommands, reminder_commands::ReminderCommands,
    session_commands::SessionCommands, task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Account operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Conversation operations
    Conversation {
        #[command(subcommand)]
        action: ConversationCommands,
    },

    /// Reminder operations
    Reminder {
        #[command(subcommand)]
        action: ReminderCommands,
    },

    /// Chat operations
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },

    /// Hosted widget session operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Check backend liveness
    Health,
}
