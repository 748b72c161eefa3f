use std::sync::Arc;

use ck_auth::AuthStore;
use ck_core::validation::prepare_chat_request;
use ck_core::{ChatError, ChatRequest, FailureCause, StoredUser};
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::{Value, json};

pub type ClientResult<T> = ck_core::Result<T>;

/// Callback fired after a 401 response clears the stored credentials.
/// The host UI decides what "go to login" means.
pub type AuthFailureHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the chat/task backend REST API
pub struct ApiClient {
    pub base_url: String,
    auth: AuthStore,
    http: ReqwestClient,
    on_auth_failure: Option<AuthFailureHook>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8000")
    /// * `auth` - Credential store consulted for the bearer token
    pub fn new(base_url: &str, auth: AuthStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http: ReqwestClient::new(),
            on_auth_failure: None,
        }
    }

    pub fn with_auth_failure_hook(mut self, hook: AuthFailureHook) -> Self {
        self.on_auth_failure = Some(hook);
        self
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Build a request with the bearer token attached when present
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);

        if let Some(token) = self.auth.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    async fn send(&self, req: RequestBuilder) -> ClientResult<Response> {
        req.send().await.map_err(|e| {
            ChatError::from(FailureCause::Transport {
                message: e.to_string(),
            })
        })
    }

    /// Execute a request and parse the JSON body.
    ///
    /// Success payloads are returned as-is with no schema validation; the
    /// declared response shape is the backend's contract.
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = self.send(req).await?;

        if !response.status().is_success() {
            return Err(self.error_from_response(response).await);
        }

        response.json().await.map_err(|e| {
            ChatError::from(FailureCause::Transport {
                message: e.to_string(),
            })
        })
    }

    /// Execute a request whose success response carries no body
    async fn execute_no_content(&self, req: RequestBuilder) -> ClientResult<()> {
        let response = self.send(req).await?;

        if !response.status().is_success() {
            return Err(self.error_from_response(response).await);
        }

        Ok(())
    }

    /// Read a failed response into a typed error.
    ///
    /// A 401 clears the stored credentials and fires the auth-failure hook
    /// before the error is returned.
    async fn error_from_response(&self, response: Response) -> ChatError {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Received 401, clearing stored credentials");
            self.auth.clear();
            if let Some(ref hook) = self.on_auth_failure {
                hook();
            }
        }

        let body: Value = response.json().await.unwrap_or_else(|_| json!({}));

        let message = body
            .get("detail")
            .and_then(Value::as_str)
            .or_else(|| {
                body.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            })
            .map(String::from)
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });

        ChatError::from(FailureCause::Status {
            status: status.as_u16(),
            message: Some(message),
            body: Some(body),
        })
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Register a new account; stores the returned token and user on success
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let req = self.request(Method::POST, "/api/auth/register").json(&body);
        let value = self.execute(req).await?;
        self.remember_session(&value);
        Ok(value)
    }

    /// Log in; stores the returned token and user on success
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/api/auth/login").json(&body);
        let value = self.execute(req).await?;
        self.remember_session(&value);
        Ok(value)
    }

    /// Check whether the stored token is still accepted by the backend
    pub async fn verify(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, "/api/auth/verify");
        self.execute(req).await
    }

    /// Client-side logout: drop the stored token and user record
    pub fn logout(&self) {
        self.auth.clear();
    }

    /// Capture the token and user from an auth response, when both are present
    fn remember_session(&self, value: &Value) {
        let token = value.get("token").and_then(Value::as_str);
        let user = value
            .get("user")
            .cloned()
            .and_then(|u| serde_json::from_value::<StoredUser>(u).ok());

        match (token, user) {
            (Some(token), Some(user)) => self.auth.store_auth(token, &user),
            _ => debug!("Auth response carried no token/user pair, nothing stored"),
        }
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List a user's tasks
    pub async fn list_tasks(&self, user_id: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/{}/tasks", user_id));
        self.execute(req).await
    }

    /// Create a task
    pub async fn create_task(
        &self,
        user_id: &str,
        title: &str,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct CreateTaskRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            due_date: Option<&'a str>,
        }

        let body = CreateTaskRequest {
            title,
            description,
            due_date,
        };
        let req = self
            .request(Method::POST, &format!("/api/{}/tasks", user_id))
            .json(&body);
        self.execute(req).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, user_id: &str, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/{}/tasks/{}", user_id, id));
        self.execute(req).await
    }

    /// Replace a task's editable fields
    pub async fn update_task(
        &self,
        user_id: &str,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateTaskRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            due_date: Option<&'a str>,
        }

        let body = UpdateTaskRequest {
            title,
            description,
            due_date,
        };
        let req = self
            .request(Method::PUT, &format!("/api/{}/tasks/{}", user_id, id))
            .json(&body);
        self.execute(req).await
    }

    /// Toggle a task's completion flag
    pub async fn set_task_completed(
        &self,
        user_id: &str,
        id: &str,
        completed: bool,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct PatchTaskRequest {
            completed: bool,
        }

        let body = PatchTaskRequest { completed };
        let req = self
            .request(Method::PATCH, &format!("/api/{}/tasks/{}", user_id, id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a task
    pub async fn delete_task(&self, user_id: &str, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/{}/tasks/{}", user_id, id));
        self.execute(req).await
    }

    // =========================================================================
    // Conversation Operations
    // =========================================================================

    /// List a user's conversations, newest first by default
    pub async fn list_conversations(
        &self,
        user_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        sort: Option<&str>,
    ) -> ClientResult<Value> {
        let mut url = format!("/api/{}/conversations", user_id);

        // Build query string
        let mut params = vec![];
        if let Some(limit) = limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(offset) = offset {
            params.push(format!("offset={}", offset));
        }
        if let Some(sort) = sort {
            params.push(format!("sort={}", sort));
        }
        if !params.is_empty() {
            url.push_str(&format!("?{}", params.join("&")));
        }

        let req = self.request(Method::GET, &url);
        self.execute(req).await
    }

    /// Create a conversation
    pub async fn create_conversation(
        &self,
        user_id: &str,
        title: Option<&str>,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct CreateConversationRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
        }

        let body = CreateConversationRequest { title };
        let req = self
            .request(Method::POST, &format!("/api/{}/conversations", user_id))
            .json(&body);
        self.execute(req).await
    }

    /// Get a conversation with its messages
    pub async fn get_conversation(&self, user_id: &str, id: &str) -> ClientResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/api/{}/conversations/{}", user_id, id),
        );
        self.execute(req).await
    }

    /// Rename a conversation
    pub async fn rename_conversation(
        &self,
        user_id: &str,
        id: &str,
        title: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct RenameConversationRequest<'a> {
            title: &'a str,
        }

        let body = RenameConversationRequest { title };
        let req = self
            .request(
                Method::PUT,
                &format!("/api/{}/conversations/{}", user_id, id),
            )
            .json(&body);
        self.execute(req).await
    }

    /// Delete a conversation. The backend answers 204 with no body.
    pub async fn delete_conversation(&self, user_id: &str, id: &str) -> ClientResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/api/{}/conversations/{}", user_id, id),
        );
        self.execute_no_content(req).await
    }

    // =========================================================================
    // Chat Operations
    // =========================================================================

    /// Validate and sanitize the request, then post the message.
    ///
    /// Invalid requests are rejected locally without touching the network;
    /// the error carries the full list of validation failures.
    pub async fn send_message(&self, request: &ChatRequest) -> ClientResult<Value> {
        let (prepared, validation) = prepare_chat_request(request);
        if !validation.is_valid() {
            return Err(ChatError::validation_with_details(
                validation.errors.join("; "),
                json!(validation.errors),
            ));
        }

        let req = self
            .request(Method::POST, &format!("/api/{}/chat", prepared.user_id))
            .json(&prepared);
        self.execute(req).await
    }

    // =========================================================================
    // Reminder Operations
    // =========================================================================

    /// List a user's reminders
    pub async fn list_reminders(&self, user_id: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/{}/reminders", user_id));
        self.execute(req).await
    }

    /// Create a reminder
    pub async fn create_reminder(
        &self,
        user_id: &str,
        title: &str,
        remind_at: &str,
        notes: Option<&str>,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct CreateReminderRequest<'a> {
            title: &'a str,
            remind_at: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<&'a str>,
        }

        let body = CreateReminderRequest {
            title,
            remind_at,
            notes,
        };
        let req = self
            .request(Method::POST, &format!("/api/{}/reminders", user_id))
            .json(&body);
        self.execute(req).await
    }

    /// Get a reminder by ID
    pub async fn get_reminder(&self, user_id: &str, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/{}/reminders/{}", user_id, id));
        self.execute(req).await
    }

    /// Replace a reminder's editable fields
    pub async fn update_reminder(
        &self,
        user_id: &str,
        id: &str,
        title: Option<&str>,
        remind_at: Option<&str>,
        notes: Option<&str>,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateReminderRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            remind_at: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<&'a str>,
        }

        let body = UpdateReminderRequest {
            title,
            remind_at,
            notes,
        };
        let req = self
            .request(Method::PUT, &format!("/api/{}/reminders/{}", user_id, id))
            .json(&body);
        self.execute(req).await
    }

    /// Push a reminder's fire time forward
    pub async fn snooze_reminder(
        &self,
        user_id: &str,
        id: &str,
        remind_at: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct SnoozeReminderRequest<'a> {
            remind_at: &'a str,
        }

        let body = SnoozeReminderRequest { remind_at };
        let req = self
            .request(Method::PATCH, &format!("/api/{}/reminders/{}", user_id, id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a reminder
    pub async fn delete_reminder(&self, user_id: &str, id: &str) -> ClientResult<Value> {
        let req = self.request(
            Method::DELETE,
            &format!("/api/{}/reminders/{}", user_id, id),
        );
        self.execute(req).await
    }

    // =========================================================================
    // Hosted Session Operations
    // =========================================================================

    /// Create a hosted chat session for the embedded widget
    pub async fn create_chatkit_session(&self) -> ClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/chatkit/session")
            .json(&json!({}));
        self.execute(req).await
    }

    /// Refresh an expiring hosted session secret
    pub async fn refresh_chatkit_session(&self, client_secret: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct RefreshSessionRequest<'a> {
            client_secret: &'a str,
        }

        let body = RefreshSessionRequest { client_secret };
        let req = self.request(Method::POST, "/api/chatkit/refresh").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Backend liveness probe; requires no credentials
    pub async fn health(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, "/health");
        self.execute(req).await
    }
}
