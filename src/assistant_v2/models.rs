// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Assistant v2 models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

// ============================================================================
// Message input
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageInput {
    /// `text` (default) or `search`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageInputOptions>,
}

impl MessageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message_type: Some("text".to_string()),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageInputOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<MessageInputOptionsSpelling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Return session context with the response (stateful messages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_context: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageInputOptionsSpelling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_correct: Option<bool>,
}

// ============================================================================
// Context
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<MessageContextGlobal>,
    /// Skill-specific context keyed by skill name (`main skill`, `actions skill`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageContextGlobal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<MessageContextGlobalSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageContextGlobalSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_user_input: Option<bool>,
}

// ============================================================================
// Runtime intents and entities
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeIntent {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeEntity {
    pub entity: String,
    /// Zero-based character offsets `[start, end)` in the input text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureGroup {
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

// ============================================================================
// Message output
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub output: MessageOutput,
    pub context: Option<MessageContext>,
    pub user_id: Option<String>,
}

/// Response to a stateless message; the full context is always returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponseStateless {
    pub output: MessageOutput,
    pub context: MessageContext,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageOutput {
    #[serde(default)]
    pub generic: Vec<RuntimeResponseGeneric>,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default)]
    pub actions: Vec<DialogNodeAction>,
    pub debug: Option<Value>,
    pub user_defined: Option<Map<String, Value>>,
    pub spelling: Option<MessageOutputSpelling>,
}

impl MessageOutput {
    /// Text of all `text` responses, in order
    pub fn text(&self) -> Vec<&str> {
        self.generic
            .iter()
            .filter_map(|g| match g {
                RuntimeResponseGeneric::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageOutputSpelling {
    pub text: Option<String>,
    pub original_text: Option<String>,
    pub suggested_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeAction {
    pub name: String,
    /// `client`, `server`, `cloud_function`, `web_action` or `webhook`
    #[serde(rename = "type")]
    pub action_type: Option<String>,
    pub parameters: Option<Map<String, Value>>,
    pub result_variable: String,
    pub credentials: Option<String>,
}

/// A response element, selected by its `response_type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum RuntimeResponseGeneric {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channels: Option<Vec<ResponseGenericChannel>>,
    },
    Pause {
        /// Milliseconds
        time: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        typing: Option<bool>,
    },
    Image {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt_text: Option<String>,
    },
    #[serde(rename = "option")]
    OptionList {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// `dropdown` or `button`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        preference: Option<String>,
        #[serde(default)]
        options: Vec<DialogNodeOutputOptionsElement>,
    },
    ConnectToAgent {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message_to_human_agent: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        agent_available: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        agent_unavailable: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transfer_info: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
    Suggestion {
        title: String,
        #[serde(default)]
        suggestions: Vec<DialogSuggestion>,
    },
    Search {
        header: String,
        #[serde(default)]
        primary_results: Vec<SearchResult>,
        #[serde(default)]
        additional_results: Vec<SearchResult>,
    },
    UserDefined {
        user_defined: Map<String, Value>,
    },
    ChannelTransfer {
        message_to_user: String,
        transfer_info: Value,
    },
    /// A response type this client does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseGenericChannel {
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElement {
    pub label: String,
    pub value: DialogNodeOutputOptionsElementValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElementValue {
    pub input: Option<MessageInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogSuggestion {
    pub label: String,
    pub value: DialogSuggestionValue,
    pub output: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogSuggestionValue {
    pub input: Option<MessageInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub result_metadata: SearchResultMetadata,
    pub body: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub highlight: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultMetadata {
    pub confidence: Option<f64>,
    pub score: Option<f64>,
}

// ============================================================================
// Logs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    pub input: Option<MessageInput>,
    pub context: Option<MessageContext>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogCollection {
    #[serde(default)]
    pub logs: Vec<Log>,
    pub pagination: LogPagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    pub log_id: String,
    pub request: MessageRequest,
    pub response: MessageResponse,
    pub assistant_id: String,
    pub session_id: String,
    pub skill_id: String,
    pub snapshot: String,
    pub request_timestamp: DateTime<Utc>,
    pub response_timestamp: DateTime<Utc>,
    pub language: String,
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPagination {
    pub next_url: Option<String>,
    pub matched: Option<i64>,
    pub next_cursor: Option<String>,
}
