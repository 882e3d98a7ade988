// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Assistant v1 models
//!
//! Workspace building blocks (intents, entities, dialog nodes,
//! counterexamples) serialize only the fields that are set, so the same
//! types are used both in requests and in responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Message
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl MessageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeIntent {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeEntity {
    pub entity: String,
    #[serde(default)]
    pub location: Vec<i64>,
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
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureGroup {
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

/// Conversation state, round-tripped between turns
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Context {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageContextMetadata>,
    /// Context variables set by dialog nodes or the application
    #[serde(flatten)]
    pub variables: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageContextMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<DialogNodeVisitedDetails>>,
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic: Vec<RuntimeResponseGeneric>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogNodeVisitedDetails {
    pub dialog_node: Option<String>,
    pub title: Option<String>,
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogMessage {
    /// `info`, `error` or `warn`
    pub level: String,
    pub msg: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub input: MessageInput,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    pub alternate_intents: Option<bool>,
    pub context: Context,
    pub output: OutputData,
    pub actions: Option<Vec<DialogNodeAction>>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    pub input: Option<MessageInput>,
    pub intents: Option<Vec<RuntimeIntent>>,
    pub entities: Option<Vec<RuntimeEntity>>,
    pub alternate_intents: Option<bool>,
    pub context: Option<Context>,
    pub output: Option<OutputData>,
    pub user_id: Option<String>,
}

/// A response element, selected by its `response_type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum RuntimeResponseGeneric {
    Text {
        text: String,
    },
    Pause {
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
    },
    #[serde(rename = "option")]
    OptionList {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
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
        topic: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dialog_node: Option<String>,
    },
    Suggestion {
        title: String,
        #[serde(default)]
        suggestions: Vec<Value>,
    },
    /// A response type this client does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogNodeOutputOptionsElement {
    pub label: String,
    pub value: DialogNodeOutputOptionsElementValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogNodeOutputOptionsElementValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
}

// ============================================================================
// Workspaces
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    pub description: Option<String>,
    pub language: String,
    pub workspace_id: Option<String>,
    pub dialog_nodes: Option<Vec<DialogNode>>,
    pub counterexamples: Option<Vec<Counterexample>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub metadata: Option<Map<String, Value>>,
    pub learning_opt_out: bool,
    pub system_settings: Option<Value>,
    /// `Non Existent`, `Training`, `Failed`, `Available` or `Unavailable`
    pub status: Option<String>,
    pub webhooks: Option<Vec<Webhook>>,
    pub intents: Option<Vec<Intent>>,
    pub entities: Option<Vec<Entity>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub refresh_url: String,
    pub next_url: Option<String>,
    pub total: Option<i64>,
    pub matched: Option<i64>,
    pub refresh_cursor: Option<String>,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Webhook {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<WebhookHeader>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}

// ============================================================================
// Intents
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

impl Intent {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Example {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mention {
    pub entity: String,
    pub location: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCollection {
    #[serde(default)]
    pub intents: Vec<Intent>,
    pub pagination: Pagination,
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<EntityValue>>,
}

impl Entity {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// A value of an entity, matched by synonyms or patterns
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// `synonyms` or `patterns`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl EntityValue {
    pub fn with_synonyms(value: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            value: value.into(),
            value_type: Some("synonyms".to_string()),
            synonyms: Some(synonyms),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCollection {
    #[serde(default)]
    pub entities: Vec<Entity>,
    pub pagination: Pagination,
}

// ============================================================================
// Dialog nodes
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DialogNode {
    pub dialog_node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    /// Node output; `generic` holds the typed responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `standard`, `event_handler`, `frame`, `slot`, `response_condition` or `folder`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguation_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogNodeNextStep {
    /// `get_user_input`, `skip_user_input`, `jump_to`, ...
    pub behavior: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// `condition`, `client`, `user_input` or `body`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogNodeAction {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    pub result_variable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    #[serde(default)]
    pub dialog_nodes: Vec<DialogNode>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Counterexample {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Logs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogCollection {
    #[serde(default)]
    pub logs: Vec<Log>,
    pub pagination: LogPagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    pub request: MessageRequest,
    pub response: MessageResponse,
    pub log_id: String,
    pub request_timestamp: DateTime<Utc>,
    pub response_timestamp: DateTime<Utc>,
    pub workspace_id: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPagination {
    pub next_url: Option<String>,
    pub matched: Option<i64>,
    pub next_cursor: Option<String>,
}
