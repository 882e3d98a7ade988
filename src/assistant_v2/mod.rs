// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Watson Assistant v2
//!
//! Runtime API for sending user input to an assistant, either within a
//! session (stateful) or with the caller carrying the context (stateless).
//!
//! ```rust,ignore
//! use watson::assistant_v2::{AssistantV2, CreateSessionOptions, MessageInput, MessageOptions};
//!
//! let assistant = AssistantV2::from_environment("2021-06-14")?;
//! let session = assistant
//!     .create_session(&CreateSessionOptions::new("assistant-id"))?
//!     .into_result();
//! let reply = assistant.message(
//!     &MessageOptions::new("assistant-id", &session.session_id)
//!         .input(MessageInput::text("Hello")),
//! )?;
//! ```

pub mod models;

pub use models::*;

use crate::core::common::sdk_headers;
use crate::core::{BaseService, DetailedResponse, JsonBody, RequestBuilder, ServiceOptions};
use crate::error::{require, Result};
use reqwest::Method;
use std::collections::HashMap;

pub const DEFAULT_SERVICE_NAME: &str = "conversation";
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.assistant.watson.cloud.ibm.com";
pub const DEFAULT_VERSION: &str = "2021-06-14";

const SERVICE_VERSION: &str = "V2";

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CreateSessionOptions {
    pub assistant_id: String,
    pub headers: HashMap<String, String>,
}

impl CreateSessionOptions {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(CreateSessionOptions {});

#[derive(Debug, Clone, Default)]
pub struct DeleteSessionOptions {
    pub assistant_id: String,
    pub session_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteSessionOptions {
    pub fn new(assistant_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            session_id: session_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteSessionOptions {});

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub assistant_id: String,
    pub session_id: String,
    pub input: Option<MessageInput>,
    pub context: Option<MessageContext>,
    pub user_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl MessageOptions {
    pub fn new(assistant_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            session_id: session_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(MessageOptions {
    input: MessageInput,
    context: MessageContext,
    user_id: String,
});

#[derive(Debug, Clone, Default)]
pub struct MessageStatelessOptions {
    pub assistant_id: String,
    pub input: Option<MessageInput>,
    pub context: Option<MessageContext>,
    pub user_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl MessageStatelessOptions {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(MessageStatelessOptions {
    input: MessageInput,
    context: MessageContext,
    user_id: String,
});

#[derive(Debug, Clone, Default)]
pub struct ListLogsOptions {
    pub assistant_id: String,
    /// Attribute to sort by; prefix with `-` for descending order
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListLogsOptions {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListLogsOptions {
    sort: String,
    filter: String,
    page_limit: i64,
    cursor: String,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    pub customer_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteUserDataOptions {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteUserDataOptions {});

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone)]
pub struct AssistantV2 {
    service: BaseService,
    version: String,
}

impl AssistantV2 {
    pub fn new(version: impl Into<String>, options: ServiceOptions) -> Result<Self> {
        let version = version.into();
        require("version", &version)?;
        Ok(Self {
            service: BaseService::new(options, DEFAULT_SERVICE_URL)?,
            version,
        })
    }

    /// Configure from `CONVERSATION_*` environment / credentials file entries
    pub fn from_environment(version: impl Into<String>) -> Result<Self> {
        let mut assistant = Self::new(
            version,
            ServiceOptions::from_environment(DEFAULT_SERVICE_NAME)?,
        )?;
        assistant.service.configure_service(DEFAULT_SERVICE_NAME)?;
        Ok(assistant)
    }

    pub fn service(&self) -> &BaseService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        operation_id: &str,
        headers: &HashMap<String, String>,
    ) -> Result<RequestBuilder> {
        let mut builder = self.service.new_request(
            method,
            path,
            params,
            sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id),
        )?;
        builder.add_headers(headers);
        builder.add_header("Accept", "application/json");
        builder.add_query("version", &self.version);
        Ok(builder)
    }

    /// Create a session; sessions expire after a period of inactivity
    pub fn create_session(
        &self,
        options: &CreateSessionOptions,
    ) -> Result<DetailedResponse<SessionResponse>> {
        require("assistant_id", &options.assistant_id)?;
        let builder = self.request(
            Method::POST,
            "/v2/assistants/{assistant_id}/sessions",
            &[("assistant_id", &options.assistant_id)],
            "CreateSession",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn delete_session(&self, options: &DeleteSessionOptions) -> Result<DetailedResponse<()>> {
        require("assistant_id", &options.assistant_id)?;
        require("session_id", &options.session_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v2/assistants/{assistant_id}/sessions/{session_id}",
            &[
                ("assistant_id", &options.assistant_id),
                ("session_id", &options.session_id),
            ],
            "DeleteSession",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    fn message_body(
        input: &Option<MessageInput>,
        context: &Option<MessageContext>,
        user_id: &Option<String>,
    ) -> Result<JsonBody> {
        let mut body = JsonBody::new();
        body.insert_opt("input", input)?;
        body.insert_opt("context", context)?;
        body.insert_opt("user_id", user_id)?;
        Ok(body)
    }

    /// Send user input to an assistant within a session
    pub fn message(&self, options: &MessageOptions) -> Result<DetailedResponse<MessageResponse>> {
        require("assistant_id", &options.assistant_id)?;
        require("session_id", &options.session_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/assistants/{assistant_id}/sessions/{session_id}/message",
            &[
                ("assistant_id", &options.assistant_id),
                ("session_id", &options.session_id),
            ],
            "Message",
            &options.headers,
        )?;
        builder.set_json_object(Self::message_body(
            &options.input,
            &options.context,
            &options.user_id,
        )?);
        self.service.request_json(&builder)
    }

    /// Send user input without a session; the caller keeps the context
    pub fn message_stateless(
        &self,
        options: &MessageStatelessOptions,
    ) -> Result<DetailedResponse<MessageResponseStateless>> {
        require("assistant_id", &options.assistant_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/assistants/{assistant_id}/message",
            &[("assistant_id", &options.assistant_id)],
            "MessageStateless",
            &options.headers,
        )?;
        builder.set_json_object(Self::message_body(
            &options.input,
            &options.context,
            &options.user_id,
        )?);
        self.service.request_json(&builder)
    }

    pub fn list_logs(&self, options: &ListLogsOptions) -> Result<DetailedResponse<LogCollection>> {
        require("assistant_id", &options.assistant_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v2/assistants/{assistant_id}/logs",
            &[("assistant_id", &options.assistant_id)],
            "ListLogs",
            &options.headers,
        )?;
        builder
            .add_query_opt("sort", options.sort.as_ref())
            .add_query_opt("filter", options.filter.as_ref())
            .add_query_opt("page_limit", options.page_limit)
            .add_query_opt("cursor", options.cursor.as_ref());
        self.service.request_json(&builder)
    }

    /// Delete all data associated with a customer ID
    pub fn delete_user_data(
        &self,
        options: &DeleteUserDataOptions,
    ) -> Result<DetailedResponse<()>> {
        require("customer_id", &options.customer_id)?;
        let mut builder = self.request(
            Method::DELETE,
            "/v2/user_data",
            &[],
            "DeleteUserData",
            &options.headers,
        )?;
        builder.add_query("customer_id", &options.customer_id);
        self.service.request_empty(&builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoAuthAuthenticator;
    use std::sync::Arc;

    fn assistant() -> AssistantV2 {
        AssistantV2::new(
            DEFAULT_VERSION,
            ServiceOptions::new(Arc::new(NoAuthAuthenticator)),
        )
        .unwrap()
    }

    #[test]
    fn test_message_requires_session() {
        let err = assistant()
            .message(&MessageOptions::new("a1", ""))
            .unwrap_err();
        assert!(err.to_string().contains("session_id"));
    }

    #[test]
    fn test_generic_discriminator() {
        let output: MessageOutput = serde_json::from_value(serde_json::json!({
            "generic": [
                {"response_type": "text", "text": "Hi there"},
                {"response_type": "pause", "time": 500, "typing": true},
                {"response_type": "option", "title": "Pick", "options": [
                    {"label": "A", "value": {"input": {"text": "a"}}}
                ]},
                {"response_type": "user_defined", "user_defined": {"k": 1}}
            ]
        }))
        .unwrap();

        assert_eq!(output.generic.len(), 4);
        assert_eq!(output.text(), vec!["Hi there"]);
        assert!(matches!(
            output.generic[1],
            RuntimeResponseGeneric::Pause { time: 500, typing: Some(true) }
        ));
        match &output.generic[2] {
            RuntimeResponseGeneric::OptionList { options, .. } => {
                assert_eq!(options[0].label, "A");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_response_type_keeps_message() {
        let response: MessageResponse = serde_json::from_value(serde_json::json!({
            "output": {
                "generic": [
                    {"response_type": "video", "source": "https://example.com/v.mp4"},
                    {"response_type": "text", "text": "Here is a video"}
                ],
                "intents": [{"intent": "show_video", "confidence": 0.9}]
            },
            "context": {"global": {"session_id": "s1"}}
        }))
        .unwrap();

        assert!(matches!(
            response.output.generic[0],
            RuntimeResponseGeneric::Unknown
        ));
        assert_eq!(response.output.text(), vec!["Here is a video"]);
        assert_eq!(response.output.intents[0].intent, "show_video");
        assert!(response.context.is_some());
    }

    #[test]
    fn test_message_input_text_helper() {
        let json = serde_json::to_value(MessageInput::text("hello")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message_type": "text", "text": "hello"})
        );
    }
}
