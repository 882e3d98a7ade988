// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Watson Assistant v1
//!
//! Workspace-level API: send messages to a workspace and manage its
//! training data (intents, entities, dialog nodes) and logs.

pub mod models;

pub use models::*;

use crate::core::common::sdk_headers;
use crate::core::{BaseService, DetailedResponse, JsonBody, RequestBuilder, ServiceOptions};
use crate::error::{require, Result};
use reqwest::Method;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const DEFAULT_SERVICE_NAME: &str = "conversation";
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.assistant.watson.cloud.ibm.com";
pub const DEFAULT_VERSION: &str = "2021-06-14";

const SERVICE_VERSION: &str = "V1";

// ============================================================================
// Message options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub workspace_id: String,
    pub input: Option<MessageInput>,
    pub intents: Option<Vec<RuntimeIntent>>,
    pub entities: Option<Vec<RuntimeEntity>>,
    pub alternate_intents: Option<bool>,
    pub context: Option<Context>,
    pub output: Option<OutputData>,
    pub user_id: Option<String>,
    pub nodes_visited_details: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl MessageOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(MessageOptions {
    input: MessageInput,
    intents: Vec<RuntimeIntent>,
    entities: Vec<RuntimeEntity>,
    alternate_intents: bool,
    context: Context,
    output: OutputData,
    user_id: String,
    nodes_visited_details: bool,
});

// ============================================================================
// Workspace options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    /// `name` or `updated`; prefix with `-` for descending order
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

options_setters!(ListWorkspacesOptions {
    page_limit: i64,
    include_count: bool,
    sort: String,
    cursor: String,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct CreateWorkspaceOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub dialog_nodes: Option<Vec<DialogNode>>,
    pub counterexamples: Option<Vec<Counterexample>>,
    pub metadata: Option<Map<String, Value>>,
    pub learning_opt_out: Option<bool>,
    pub system_settings: Option<Value>,
    pub webhooks: Option<Vec<Webhook>>,
    pub intents: Option<Vec<Intent>>,
    pub entities: Option<Vec<Entity>>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

options_setters!(CreateWorkspaceOptions {
    name: String,
    description: String,
    language: String,
    dialog_nodes: Vec<DialogNode>,
    counterexamples: Vec<Counterexample>,
    metadata: Map<String, Value>,
    learning_opt_out: bool,
    system_settings: Value,
    webhooks: Vec<Webhook>,
    intents: Vec<Intent>,
    entities: Vec<Entity>,
    include_audit: bool,
});

impl CreateWorkspaceOptions {
    fn body(&self) -> Result<JsonBody> {
        let mut body = JsonBody::new();
        body.insert_opt("name", &self.name)?
            .insert_opt("description", &self.description)?
            .insert_opt("language", &self.language)?
            .insert_opt("dialog_nodes", &self.dialog_nodes)?
            .insert_opt("counterexamples", &self.counterexamples)?
            .insert_opt("metadata", &self.metadata)?
            .insert_opt("learning_opt_out", &self.learning_opt_out)?
            .insert_opt("system_settings", &self.system_settings)?
            .insert_opt("webhooks", &self.webhooks)?
            .insert_opt("intents", &self.intents)?
            .insert_opt("entities", &self.entities)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceOptions {
    pub workspace_id: String,
    /// Include all element content, not just names
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    /// Only `stable` is accepted; sorts exported elements
    pub sort: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetWorkspaceOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetWorkspaceOptions {
    export: bool,
    include_audit: bool,
    sort: String,
});

#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspaceOptions {
    pub workspace_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub dialog_nodes: Option<Vec<DialogNode>>,
    pub counterexamples: Option<Vec<Counterexample>>,
    pub metadata: Option<Map<String, Value>>,
    pub learning_opt_out: Option<bool>,
    pub system_settings: Option<Value>,
    pub webhooks: Option<Vec<Webhook>>,
    pub intents: Option<Vec<Intent>>,
    pub entities: Option<Vec<Entity>>,
    /// Merge new elements into the workspace instead of replacing them
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpdateWorkspaceOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    fn body(&self) -> Result<JsonBody> {
        let mut body = JsonBody::new();
        body.insert_opt("name", &self.name)?
            .insert_opt("description", &self.description)?
            .insert_opt("language", &self.language)?
            .insert_opt("dialog_nodes", &self.dialog_nodes)?
            .insert_opt("counterexamples", &self.counterexamples)?
            .insert_opt("metadata", &self.metadata)?
            .insert_opt("learning_opt_out", &self.learning_opt_out)?
            .insert_opt("system_settings", &self.system_settings)?
            .insert_opt("webhooks", &self.webhooks)?
            .insert_opt("intents", &self.intents)?
            .insert_opt("entities", &self.entities)?;
        Ok(body)
    }
}

options_setters!(UpdateWorkspaceOptions {
    name: String,
    description: String,
    language: String,
    dialog_nodes: Vec<DialogNode>,
    counterexamples: Vec<Counterexample>,
    metadata: Map<String, Value>,
    learning_opt_out: bool,
    system_settings: Value,
    webhooks: Vec<Webhook>,
    intents: Vec<Intent>,
    entities: Vec<Entity>,
    append: bool,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteWorkspaceOptions {
    pub workspace_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteWorkspaceOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteWorkspaceOptions {});

// ============================================================================
// Intent options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListIntentsOptions {
    pub workspace_id: String,
    pub export: Option<bool>,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListIntentsOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListIntentsOptions {
    export: bool,
    page_limit: i64,
    include_count: bool,
    sort: String,
    cursor: String,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct CreateIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub description: Option<String>,
    pub examples: Option<Vec<Example>>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl CreateIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

options_setters!(CreateIntentOptions {
    description: String,
    examples: Vec<Example>,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct GetIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetIntentOptions {
    export: bool,
    include_audit: bool,
});

/// Update an intent; `new_*` values replace the current ones
#[derive(Debug, Clone, Default)]
pub struct UpdateIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub new_intent: Option<String>,
    pub new_description: Option<String>,
    pub new_examples: Option<Vec<Example>>,
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpdateIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

options_setters!(UpdateIntentOptions {
    new_intent: String,
    new_description: String,
    new_examples: Vec<Example>,
    append: bool,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub headers: HashMap<String, String>,
}

impl DeleteIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteIntentOptions {});

// ============================================================================
// Entity options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListEntitiesOptions {
    pub workspace_id: String,
    pub export: Option<bool>,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListEntitiesOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListEntitiesOptions {
    export: bool,
    page_limit: i64,
    include_count: bool,
    sort: String,
    cursor: String,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct CreateEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub description: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub fuzzy_match: Option<bool>,
    pub values: Option<Vec<EntityValue>>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl CreateEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

options_setters!(CreateEntityOptions {
    description: String,
    metadata: Map<String, Value>,
    fuzzy_match: bool,
    values: Vec<EntityValue>,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct GetEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetEntityOptions {
    export: bool,
    include_audit: bool,
});

/// Update an entity; `new_*` values replace the current ones
#[derive(Debug, Clone, Default)]
pub struct UpdateEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub new_entity: Option<String>,
    pub new_description: Option<String>,
    pub new_metadata: Option<Map<String, Value>>,
    pub new_fuzzy_match: Option<bool>,
    pub new_values: Option<Vec<EntityValue>>,
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpdateEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

options_setters!(UpdateEntityOptions {
    new_entity: String,
    new_description: String,
    new_metadata: Map<String, Value>,
    new_fuzzy_match: bool,
    new_values: Vec<EntityValue>,
    append: bool,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub headers: HashMap<String, String>,
}

impl DeleteEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteEntityOptions {});

// ============================================================================
// Dialog node options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListDialogNodesOptions {
    pub workspace_id: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListDialogNodesOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListDialogNodesOptions {
    page_limit: i64,
    include_count: bool,
    sort: String,
    cursor: String,
    include_audit: bool,
});

#[derive(Debug, Clone, Default)]
pub struct CreateDialogNodeOptions {
    pub workspace_id: String,
    pub node: DialogNode,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl CreateDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, node: DialogNode) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            node,
            ..Default::default()
        }
    }
}

options_setters!(CreateDialogNodeOptions { include_audit: bool });

#[derive(Debug, Clone, Default)]
pub struct GetDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetDialogNodeOptions { include_audit: bool });

/// Replace a dialog node; `node.dialog_node` carries the (possibly new) node ID
#[derive(Debug, Clone, Default)]
pub struct UpdateDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub node: DialogNode,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpdateDialogNodeOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        dialog_node: impl Into<String>,
        node: DialogNode,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            node,
            ..Default::default()
        }
    }
}

options_setters!(UpdateDialogNodeOptions { include_audit: bool });

#[derive(Debug, Clone, Default)]
pub struct DeleteDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub headers: HashMap<String, String>,
}

impl DeleteDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteDialogNodeOptions {});

// ============================================================================
// Log and user data options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListLogsOptions {
    pub workspace_id: String,
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListLogsOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
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
pub struct ListAllLogsOptions {
    /// Must include `language::`, `request.context.metadata.deployment::`
    /// or `workspace_id::`
    pub filter: String,
    pub sort: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListAllLogsOptions {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListAllLogsOptions {
    sort: String,
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
pub struct AssistantV1 {
    service: BaseService,
    version: String,
}

impl AssistantV1 {
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

    // ------------------------------------------------------------------------
    // Message
    // ------------------------------------------------------------------------

    /// Send user input to a workspace and get the dialog response
    pub fn message(&self, options: &MessageOptions) -> Result<DetailedResponse<MessageResponse>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/message",
            &[("workspace_id", &options.workspace_id)],
            "Message",
            &options.headers,
        )?;
        builder.add_query_opt("nodes_visited_details", options.nodes_visited_details);

        let mut body = JsonBody::new();
        body.insert_opt("input", &options.input)?
            .insert_opt("intents", &options.intents)?
            .insert_opt("entities", &options.entities)?
            .insert_opt("alternate_intents", &options.alternate_intents)?
            .insert_opt("context", &options.context)?
            .insert_opt("output", &options.output)?
            .insert_opt("user_id", &options.user_id)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    // ------------------------------------------------------------------------
    // Workspaces
    // ------------------------------------------------------------------------

    pub fn list_workspaces(
        &self,
        options: &ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceCollection>> {
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces",
            &[],
            "ListWorkspaces",
            &options.headers,
        )?;
        builder
            .add_query_opt("page_limit", options.page_limit)
            .add_query_opt("include_count", options.include_count)
            .add_query_opt("sort", options.sort.as_ref())
            .add_query_opt("cursor", options.cursor.as_ref())
            .add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn create_workspace(
        &self,
        options: &CreateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces",
            &[],
            "CreateWorkspace",
            &options.headers,
        )?;
        builder.add_query_opt("include_audit", options.include_audit);
        builder.set_json_object(options.body()?);
        self.service.request_json(&builder)
    }

    pub fn get_workspace(&self, options: &GetWorkspaceOptions) -> Result<DetailedResponse<Workspace>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}",
            &[("workspace_id", &options.workspace_id)],
            "GetWorkspace",
            &options.headers,
        )?;
        builder
            .add_query_opt("export", options.export)
            .add_query_opt("include_audit", options.include_audit)
            .add_query_opt("sort", options.sort.as_ref());
        self.service.request_json(&builder)
    }

    pub fn update_workspace(
        &self,
        options: &UpdateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}",
            &[("workspace_id", &options.workspace_id)],
            "UpdateWorkspace",
            &options.headers,
        )?;
        builder
            .add_query_opt("append", options.append)
            .add_query_opt("include_audit", options.include_audit);
        builder.set_json_object(options.body()?);
        self.service.request_json(&builder)
    }

    pub fn delete_workspace(&self, options: &DeleteWorkspaceOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v1/workspaces/{workspace_id}",
            &[("workspace_id", &options.workspace_id)],
            "DeleteWorkspace",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    // ------------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------------

    pub fn list_intents(
        &self,
        options: &ListIntentsOptions,
    ) -> Result<DetailedResponse<IntentCollection>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/intents",
            &[("workspace_id", &options.workspace_id)],
            "ListIntents",
            &options.headers,
        )?;
        builder
            .add_query_opt("export", options.export)
            .add_query_opt("page_limit", options.page_limit)
            .add_query_opt("include_count", options.include_count)
            .add_query_opt("sort", options.sort.as_ref())
            .add_query_opt("cursor", options.cursor.as_ref())
            .add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn create_intent(&self, options: &CreateIntentOptions) -> Result<DetailedResponse<Intent>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/intents",
            &[("workspace_id", &options.workspace_id)],
            "CreateIntent",
            &options.headers,
        )?;
        builder.add_query_opt("include_audit", options.include_audit);

        let mut body = JsonBody::new();
        body.insert("intent", &options.intent)?
            .insert_opt("description", &options.description)?
            .insert_opt("examples", &options.examples)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn get_intent(&self, options: &GetIntentOptions) -> Result<DetailedResponse<Intent>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/intents/{intent}",
            &[
                ("workspace_id", &options.workspace_id),
                ("intent", &options.intent),
            ],
            "GetIntent",
            &options.headers,
        )?;
        builder
            .add_query_opt("export", options.export)
            .add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn update_intent(&self, options: &UpdateIntentOptions) -> Result<DetailedResponse<Intent>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/intents/{intent}",
            &[
                ("workspace_id", &options.workspace_id),
                ("intent", &options.intent),
            ],
            "UpdateIntent",
            &options.headers,
        )?;
        builder
            .add_query_opt("append", options.append)
            .add_query_opt("include_audit", options.include_audit);

        let mut body = JsonBody::new();
        body.insert_opt("intent", &options.new_intent)?
            .insert_opt("description", &options.new_description)?
            .insert_opt("examples", &options.new_examples)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn delete_intent(&self, options: &DeleteIntentOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("intent", &options.intent)?;
        let builder = self.request(
            Method::DELETE,
            "/v1/workspaces/{workspace_id}/intents/{intent}",
            &[
                ("workspace_id", &options.workspace_id),
                ("intent", &options.intent),
            ],
            "DeleteIntent",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    // ------------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------------

    pub fn list_entities(
        &self,
        options: &ListEntitiesOptions,
    ) -> Result<DetailedResponse<EntityCollection>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/entities",
            &[("workspace_id", &options.workspace_id)],
            "ListEntities",
            &options.headers,
        )?;
        builder
            .add_query_opt("export", options.export)
            .add_query_opt("page_limit", options.page_limit)
            .add_query_opt("include_count", options.include_count)
            .add_query_opt("sort", options.sort.as_ref())
            .add_query_opt("cursor", options.cursor.as_ref())
            .add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn create_entity(&self, options: &CreateEntityOptions) -> Result<DetailedResponse<Entity>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/entities",
            &[("workspace_id", &options.workspace_id)],
            "CreateEntity",
            &options.headers,
        )?;
        builder.add_query_opt("include_audit", options.include_audit);

        let mut body = JsonBody::new();
        body.insert("entity", &options.entity)?
            .insert_opt("description", &options.description)?
            .insert_opt("metadata", &options.metadata)?
            .insert_opt("fuzzy_match", &options.fuzzy_match)?
            .insert_opt("values", &options.values)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn get_entity(&self, options: &GetEntityOptions) -> Result<DetailedResponse<Entity>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/entities/{entity}",
            &[
                ("workspace_id", &options.workspace_id),
                ("entity", &options.entity),
            ],
            "GetEntity",
            &options.headers,
        )?;
        builder
            .add_query_opt("export", options.export)
            .add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn update_entity(&self, options: &UpdateEntityOptions) -> Result<DetailedResponse<Entity>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/entities/{entity}",
            &[
                ("workspace_id", &options.workspace_id),
                ("entity", &options.entity),
            ],
            "UpdateEntity",
            &options.headers,
        )?;
        builder
            .add_query_opt("append", options.append)
            .add_query_opt("include_audit", options.include_audit);

        let mut body = JsonBody::new();
        body.insert_opt("entity", &options.new_entity)?
            .insert_opt("description", &options.new_description)?
            .insert_opt("metadata", &options.new_metadata)?
            .insert_opt("fuzzy_match", &options.new_fuzzy_match)?
            .insert_opt("values", &options.new_values)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn delete_entity(&self, options: &DeleteEntityOptions) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("entity", &options.entity)?;
        let builder = self.request(
            Method::DELETE,
            "/v1/workspaces/{workspace_id}/entities/{entity}",
            &[
                ("workspace_id", &options.workspace_id),
                ("entity", &options.entity),
            ],
            "DeleteEntity",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    // ------------------------------------------------------------------------
    // Dialog nodes
    // ------------------------------------------------------------------------

    pub fn list_dialog_nodes(
        &self,
        options: &ListDialogNodesOptions,
    ) -> Result<DetailedResponse<DialogNodeCollection>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/dialog_nodes",
            &[("workspace_id", &options.workspace_id)],
            "ListDialogNodes",
            &options.headers,
        )?;
        builder
            .add_query_opt("page_limit", options.page_limit)
            .add_query_opt("include_count", options.include_count)
            .add_query_opt("sort", options.sort.as_ref())
            .add_query_opt("cursor", options.cursor.as_ref())
            .add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn create_dialog_node(
        &self,
        options: &CreateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.node.dialog_node)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/dialog_nodes",
            &[("workspace_id", &options.workspace_id)],
            "CreateDialogNode",
            &options.headers,
        )?;
        builder.add_query_opt("include_audit", options.include_audit);
        builder.set_json_body(&options.node)?;
        self.service.request_json(&builder)
    }

    pub fn get_dialog_node(
        &self,
        options: &GetDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}",
            &[
                ("workspace_id", &options.workspace_id),
                ("dialog_node", &options.dialog_node),
            ],
            "GetDialogNode",
            &options.headers,
        )?;
        builder.add_query_opt("include_audit", options.include_audit);
        self.service.request_json(&builder)
    }

    pub fn update_dialog_node(
        &self,
        options: &UpdateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;
        let mut builder = self.request(
            Method::POST,
            "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}",
            &[
                ("workspace_id", &options.workspace_id),
                ("dialog_node", &options.dialog_node),
            ],
            "UpdateDialogNode",
            &options.headers,
        )?;
        builder.add_query_opt("include_audit", options.include_audit);
        builder.set_json_body(&options.node)?;
        self.service.request_json(&builder)
    }

    pub fn delete_dialog_node(
        &self,
        options: &DeleteDialogNodeOptions,
    ) -> Result<DetailedResponse<()>> {
        require("workspace_id", &options.workspace_id)?;
        require("dialog_node", &options.dialog_node)?;
        let builder = self.request(
            Method::DELETE,
            "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}",
            &[
                ("workspace_id", &options.workspace_id),
                ("dialog_node", &options.dialog_node),
            ],
            "DeleteDialogNode",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    // ------------------------------------------------------------------------
    // Logs and user data
    // ------------------------------------------------------------------------

    pub fn list_logs(&self, options: &ListLogsOptions) -> Result<DetailedResponse<LogCollection>> {
        require("workspace_id", &options.workspace_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/workspaces/{workspace_id}/logs",
            &[("workspace_id", &options.workspace_id)],
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

    /// List events across all workspaces of the instance
    pub fn list_all_logs(
        &self,
        options: &ListAllLogsOptions,
    ) -> Result<DetailedResponse<LogCollection>> {
        require("filter", &options.filter)?;
        let mut builder = self.request(
            Method::GET,
            "/v1/logs",
            &[],
            "ListAllLogs",
            &options.headers,
        )?;
        builder
            .add_query("filter", &options.filter)
            .add_query_opt("sort", options.sort.as_ref())
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
            "/v1/user_data",
            &[],
            "DeleteUserData",
            &options.headers,
        )?;
        builder.add_query("customer_id", &options.customer_id);
        self.service.request_empty(&builder)
    }
}
