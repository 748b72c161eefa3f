//! ck - chatkit backend CLI
//!
//! A command-line client for the chat/task backend, sharing the same
//! integration layer the desktop UI uses.
//!
//! # Examples
//!
//! ```bash
//! # Log in and store the session
//! ck auth login --email ada@example.test --password secret
//!
//! # Create a task
//! ck task create --title "Buy milk" --due-date 2026-01-01T09:00:00Z
//!
//! # Send a chat message
//! ck chat send "What's on my plate today?"
//! ```

mod auth_commands;
mod chat_commands;
mod cli;
mod commands;
mod conversation_commands;
mod logger;
mod reminder_commands;
mod session_commands;
mod task_commands;

use crate::{
    auth_commands::AuthCommands, chat_commands::ChatCommands, cli::Cli, commands::Commands,
    conversation_commands::ConversationCommands, reminder_commands::ReminderCommands,
    session_commands::SessionCommands, task_commands::TaskCommands,
};

use std::process::ExitCode;
use std::sync::Arc;

use ck_auth::AuthStore;
use ck_client::{ApiClient, ClientResult, ConversationCache};
use ck_config::Config;
use ck_core::{ChatError, ChatRequest, ConversationMeta, FileStore, KeyValueStore, NoopStore};
use clap::Parser;
use log::warn;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(config.logging.level_filter(), config.logging.colored) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let storage: Arc<dyn KeyValueStore> = match config.storage_path() {
        Ok(path) => Arc::new(FileStore::new(path)),
        Err(e) => {
            warn!("No persistent storage available ({}), running stateless", e);
            Arc::new(NoopStore)
        }
    };

    let auth = AuthStore::new(storage.clone());
    let cache = ConversationCache::new(storage);

    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let client = ApiClient::new(&base_url, auth.clone());

    match run(&cli, &client, &auth, &cache).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(
    cli: &Cli,
    client: &ApiClient,
    auth: &AuthStore,
    cache: &ConversationCache,
) -> ClientResult<Value> {
    match &cli.command {
        // Account commands
        Commands::Auth { action } => match action {
            AuthCommands::Register {
                name,
                email,
                password,
            } => client.register(name, email, password).await,
            AuthCommands::Login { email, password } => client.login(email, password).await,
            AuthCommands::Verify => client.verify().await,
            AuthCommands::Logout => {
                if let Some(user) = auth.stored_user() {
                    cache.clear_user(&user.id);
                }
                client.logout();
                Ok(json!({"logged_out": true}))
            }
        },

        // Task commands
        Commands::Task { action } => {
            let user_id = resolve_user_id(cli, auth)?;
            match action {
                TaskCommands::List => client.list_tasks(&user_id).await,
                TaskCommands::Create {
                    title,
                    description,
                    due_date,
                } => {
                    client
                        .create_task(&user_id, title, description.as_deref(), due_date.as_deref())
                        .await
                }
                TaskCommands::Get { id } => client.get_task(&user_id, id).await,
                TaskCommands::Update {
                    id,
                    title,
                    description,
                    due_date,
                } => {
                    client
                        .update_task(
                            &user_id,
                            id,
                            title.as_deref(),
                            description.as_deref(),
                            due_date.as_deref(),
                        )
                        .await
                }
                TaskCommands::Complete { id } => {
                    client.set_task_completed(&user_id, id, true).await
                }
                TaskCommands::Reopen { id } => {
                    client.set_task_completed(&user_id, id, false).await
                }
                TaskCommands::Delete { id } => client.delete_task(&user_id, id).await,
            }
        }

        // Conversation commands
        Commands::Conversation { action } => {
            let user_id = resolve_user_id(cli, auth)?;
            match action {
                ConversationCommands::List {
                    limit,
                    offset,
                    sort,
                } => {
                    client
                        .list_conversations(&user_id, *limit, *offset, sort.as_deref())
                        .await
                }
                ConversationCommands::Create { title } => {
                    let value = client.create_conversation(&user_id, title.as_deref()).await?;
                    remember_conversation(cache, &user_id, &value);
                    Ok(value)
                }
                ConversationCommands::Get { id } => client.get_conversation(&user_id, id).await,
                ConversationCommands::Rename { id, title } => {
                    client.rename_conversation(&user_id, id, title).await
                }
                ConversationCommands::Delete { id } => {
                    client.delete_conversation(&user_id, id).await?;
                    cache.remove(id, &user_id);
                    Ok(json!({"deleted_id": id}))
                }
            }
        }

        // Chat commands
        Commands::Chat { action } => {
            let user_id = resolve_user_id(cli, auth)?;
            match action {
                ChatCommands::Send {
                    message,
                    conversation_id,
                } => {
                    let mut request = ChatRequest::new(user_id.clone(), message.clone());
                    if let Some(conversation_id) = conversation_id {
                        request = request.with_conversation(conversation_id.clone());
                    }

                    let value = client.send_message(&request).await?;
                    remember_conversation(cache, &user_id, &value);
                    Ok(value)
                }
            }
        }

        // Reminder commands
        Commands::Reminder { action } => {
            let user_id = resolve_user_id(cli, auth)?;
            match action {
                ReminderCommands::List => client.list_reminders(&user_id).await,
                ReminderCommands::Create {
                    title,
                    remind_at,
                    notes,
                } => {
                    client
                        .create_reminder(&user_id, title, remind_at, notes.as_deref())
                        .await
                }
                ReminderCommands::Get { id } => client.get_reminder(&user_id, id).await,
                ReminderCommands::Update {
                    id,
                    title,
                    remind_at,
                    notes,
                } => {
                    client
                        .update_reminder(
                            &user_id,
                            id,
                            title.as_deref(),
                            remind_at.as_deref(),
                            notes.as_deref(),
                        )
                        .await
                }
                ReminderCommands::Snooze { id, remind_at } => {
                    client.snooze_reminder(&user_id, id, remind_at).await
                }
                ReminderCommands::Delete { id } => client.delete_reminder(&user_id, id).await,
            }
        }

        // Hosted session commands
        Commands::Session { action } => match action {
            SessionCommands::Create => client.create_chatkit_session().await,
            SessionCommands::Refresh { client_secret } => {
                client.refresh_chatkit_session(client_secret).await
            }
        },

        Commands::Health => client.health().await,
    }
}

/// User scope for user-owned resources: explicit flag first, stored user next
fn resolve_user_id(cli: &Cli, auth: &AuthStore) -> ClientResult<String> {
    cli.user_id
        .clone()
        .or_else(|| auth.stored_user().map(|u| u.id))
        .ok_or_else(|| {
            ChatError::authentication("Not logged in. Run 'ck auth login' or pass --user-id.")
        })
}

/// Opportunistically mirror a conversation from a response into the cache
fn remember_conversation(cache: &ConversationCache, user_id: &str, value: &Value) {
    let conversation = value.get("conversation").unwrap_or(value);
    let id = conversation
        .get("id")
        .and_then(Value::as_str)
        .or_else(|| value.get("conversation_id").and_then(Value::as_str));
    let Some(id) = id else {
        return;
    };

    let title = conversation
        .get("title")
        .and_then(Value::as_str)
        .map(String::from);

    let mut meta = ConversationMeta::new(String::from(id), String::from(user_id), title);
    meta.last_message = value.get("reply").and_then(Value::as_str).map(String::from);

    cache.save(meta);
    cache.set_current(id);
    cache.set_last_conversation(user_id, id);
}
