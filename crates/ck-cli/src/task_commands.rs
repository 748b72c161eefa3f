use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TaskCommands {
    /// List tasks
    List,
    /// Create a task
    Create {
        /// Task title
        #[arg(long)]
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Due date (RFC 3339)
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Get a task by ID
    Get {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date (RFC 3339)
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: String,
    },
    /// Reopen a completed task
    Reopen {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}
