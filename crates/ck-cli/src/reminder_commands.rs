use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ReminderCommands {
    /// List reminders
    List,
    /// Create a reminder
    Create {
        /// Reminder title
        #[arg(long)]
        title: String,
        /// Fire time (RFC 3339)
        #[arg(long)]
        remind_at: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a reminder by ID
    Get {
        /// Reminder ID
        id: String,
    },
    /// Update a reminder
    Update {
        /// Reminder ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Fire time (RFC 3339)
        #[arg(long)]
        remind_at: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Push a reminder's fire time forward
    Snooze {
        /// Reminder ID
        id: String,
        /// New fire time (RFC 3339)
        #[arg(long)]
        remind_at: String,
    },
    /// Delete a reminder
    Delete {
        /// Reminder ID
        id: String,
    },
}
