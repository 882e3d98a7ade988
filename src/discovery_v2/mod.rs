// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Watson Discovery v2
//!
//! Projects group collections of ingested documents. Queries run across the
//! collections of a project and may return passages, table results and
//! aggregations (see [`aggregation`]).
//!
//! ```rust,ignore
//! use watson::discovery_v2::{DiscoveryV2, QueryOptions};
//!
//! let discovery = DiscoveryV2::from_environment("2020-08-30")?;
//! let response = discovery
//!     .query(&QueryOptions::new("project-id").natural_language_query("who founded IBM"))?
//!     .into_result();
//! ```

pub mod aggregation;
pub mod models;

pub use aggregation::*;
pub use models::*;

use crate::core::common::sdk_headers;
use crate::core::{
    BaseService, DetailedResponse, FileInput, FormPart, JsonBody, RequestBuilder, ServiceOptions,
};
use crate::error::{require, Result, WatsonError};
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_SERVICE_NAME: &str = "discovery";
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";
pub const DEFAULT_VERSION: &str = "2020-08-30";

const SERVICE_VERSION: &str = "V2";

// ============================================================================
// Project options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListProjectsOptions {
    pub headers: HashMap<String, String>,
}

options_setters!(ListProjectsOptions {});

#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    pub name: String,
    /// `document_retrieval`, `conversational_search`, `content_mining`, ...
    pub project_type: String,
    pub default_query_parameters: Option<Value>,
    pub headers: HashMap<String, String>,
}

impl CreateProjectOptions {
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: project_type.into(),
            ..Default::default()
        }
    }
}

options_setters!(CreateProjectOptions { default_query_parameters: Value });

#[derive(Debug, Clone, Default)]
pub struct GetProjectOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl GetProjectOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetProjectOptions {});

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectOptions {
    pub project_id: String,
    pub name: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateProjectOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(UpdateProjectOptions { name: String });

#[derive(Debug, Clone, Default)]
pub struct DeleteProjectOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteProjectOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteProjectOptions {});

#[derive(Debug, Clone, Default)]
pub struct ListFieldsOptions {
    pub project_id: String,
    pub collection_ids: Vec<String>,
    pub headers: HashMap<String, String>,
}

impl ListFieldsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    pub fn collection_ids(mut self, ids: Vec<String>) -> Self {
        self.collection_ids = ids;
        self
    }
}

options_setters!(ListFieldsOptions {});

// ============================================================================
// Collection options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListCollectionsOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl ListCollectionsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListCollectionsOptions {});

#[derive(Debug, Clone, Default)]
pub struct CreateCollectionOptions {
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    pub headers: HashMap<String, String>,
}

impl CreateCollectionOptions {
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

options_setters!(CreateCollectionOptions {
    description: String,
    language: String,
    enrichments: Vec<CollectionEnrichment>,
});

#[derive(Debug, Clone, Default)]
pub struct GetCollectionOptions {
    pub project_id: String,
    pub collection_id: String,
    pub headers: HashMap<String, String>,
}

impl GetCollectionOptions {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetCollectionOptions {});

#[derive(Debug, Clone, Default)]
pub struct UpdateCollectionOptions {
    pub project_id: String,
    pub collection_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    pub headers: HashMap<String, String>,
}

impl UpdateCollectionOptions {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(UpdateCollectionOptions {
    name: String,
    description: String,
    enrichments: Vec<CollectionEnrichment>,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteCollectionOptions {
    pub project_id: String,
    pub collection_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteCollectionOptions {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteCollectionOptions {});

// ============================================================================
// Query options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub project_id: String,
    /// Collections to search; all collections of the project when empty
    pub collection_ids: Option<Vec<String>>,
    pub filter: Option<String>,
    /// Discovery Query Language query
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub aggregation: Option<String>,
    pub count: Option<i64>,
    /// Fields to return (`return` on the wire)
    pub return_fields: Option<Vec<String>>,
    pub offset: Option<i64>,
    pub sort: Option<String>,
    pub highlight: Option<bool>,
    pub spelling_suggestions: Option<bool>,
    pub table_results: Option<QueryLargeTableResults>,
    pub suggested_refinements: Option<QueryLargeSuggestedRefinements>,
    pub passages: Option<QueryLargePassages>,
    pub similar: Option<QueryLargeSimilar>,
    pub headers: HashMap<String, String>,
}

impl QueryOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    fn body(&self) -> Result<JsonBody> {
        let mut body = JsonBody::new();
        body.insert_opt("collection_ids", &self.collection_ids)?
            .insert_opt("filter", &self.filter)?
            .insert_opt("query", &self.query)?
            .insert_opt("natural_language_query", &self.natural_language_query)?
            .insert_opt("aggregation", &self.aggregation)?
            .insert_opt("count", &self.count)?
            .insert_opt("return", &self.return_fields)?
            .insert_opt("offset", &self.offset)?
            .insert_opt("sort", &self.sort)?
            .insert_opt("highlight", &self.highlight)?
            .insert_opt("spelling_suggestions", &self.spelling_suggestions)?
            .insert_opt("table_results", &self.table_results)?
            .insert_opt("suggested_refinements", &self.suggested_refinements)?
            .insert_opt("passages", &self.passages)?
            .insert_opt("similar", &self.similar)?;
        Ok(body)
    }
}

options_setters!(QueryOptions {
    collection_ids: Vec<String>,
    filter: String,
    query: String,
    natural_language_query: String,
    aggregation: String,
    count: i64,
    return_fields: Vec<String>,
    offset: i64,
    sort: String,
    highlight: bool,
    spelling_suggestions: bool,
    table_results: QueryLargeTableResults,
    suggested_refinements: QueryLargeSuggestedRefinements,
    passages: QueryLargePassages,
    similar: QueryLargeSimilar,
});

#[derive(Debug, Clone, Default)]
pub struct GetAutocompletionOptions {
    pub project_id: String,
    pub prefix: String,
    pub collection_ids: Vec<String>,
    pub field: Option<String>,
    pub count: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl GetAutocompletionOptions {
    pub fn new(project_id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    pub fn collection_ids(mut self, ids: Vec<String>) -> Self {
        self.collection_ids = ids;
        self
    }
}

options_setters!(GetAutocompletionOptions {
    field: String,
    count: i64,
});

#[derive(Debug, Clone, Default)]
pub struct QueryCollectionNoticesOptions {
    pub project_id: String,
    pub collection_id: String,
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub count: Option<i64>,
    pub offset: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl QueryCollectionNoticesOptions {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(QueryCollectionNoticesOptions {
    filter: String,
    query: String,
    natural_language_query: String,
    count: i64,
    offset: i64,
});

#[derive(Debug, Clone, Default)]
pub struct QueryNoticesOptions {
    pub project_id: String,
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub count: Option<i64>,
    pub offset: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl QueryNoticesOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(QueryNoticesOptions {
    filter: String,
    query: String,
    natural_language_query: String,
    count: i64,
    offset: i64,
});

#[derive(Debug, Clone, Default)]
pub struct GetComponentSettingsOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl GetComponentSettingsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetComponentSettingsOptions {});

// ============================================================================
// Document options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AddDocumentOptions {
    pub project_id: String,
    pub collection_id: String,
    /// Document content; must carry a file name
    pub file: Option<FileInput>,
    /// JSON object string merged into the document metadata
    pub metadata: Option<String>,
    /// Overwrite a document with the same ID that is still processing
    pub x_watson_discovery_force: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl AddDocumentOptions {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(AddDocumentOptions {
    file: FileInput,
    metadata: String,
    x_watson_discovery_force: bool,
});

#[derive(Debug, Clone, Default)]
pub struct UpdateDocumentOptions {
    pub project_id: String,
    pub collection_id: String,
    pub document_id: String,
    pub file: Option<FileInput>,
    pub metadata: Option<String>,
    pub x_watson_discovery_force: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpdateDocumentOptions {
    pub fn new(
        project_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(UpdateDocumentOptions {
    file: FileInput,
    metadata: String,
    x_watson_discovery_force: bool,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteDocumentOptions {
    pub project_id: String,
    pub collection_id: String,
    pub document_id: String,
    pub x_watson_discovery_force: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl DeleteDocumentOptions {
    pub fn new(
        project_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteDocumentOptions { x_watson_discovery_force: bool });

#[derive(Debug, Clone, Default)]
pub struct AnalyzeDocumentOptions {
    pub project_id: String,
    pub collection_id: String,
    pub file: Option<FileInput>,
    pub metadata: Option<String>,
    pub headers: HashMap<String, String>,
}

impl AnalyzeDocumentOptions {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(AnalyzeDocumentOptions {
    file: FileInput,
    metadata: String,
});

// ============================================================================
// Training data options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListTrainingQueriesOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl ListTrainingQueriesOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListTrainingQueriesOptions {});

#[derive(Debug, Clone, Default)]
pub struct DeleteTrainingQueriesOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteTrainingQueriesOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteTrainingQueriesOptions {});

#[derive(Debug, Clone, Default)]
pub struct CreateTrainingQueryOptions {
    pub project_id: String,
    pub natural_language_query: String,
    pub examples: Vec<TrainingExample>,
    pub filter: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateTrainingQueryOptions {
    pub fn new(
        project_id: impl Into<String>,
        natural_language_query: impl Into<String>,
        examples: Vec<TrainingExample>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            natural_language_query: natural_language_query.into(),
            examples,
            ..Default::default()
        }
    }
}

options_setters!(CreateTrainingQueryOptions { filter: String });

#[derive(Debug, Clone, Default)]
pub struct GetTrainingQueryOptions {
    pub project_id: String,
    pub query_id: String,
    pub headers: HashMap<String, String>,
}

impl GetTrainingQueryOptions {
    pub fn new(project_id: impl Into<String>, query_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            query_id: query_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetTrainingQueryOptions {});

#[derive(Debug, Clone, Default)]
pub struct UpdateTrainingQueryOptions {
    pub project_id: String,
    pub query_id: String,
    pub natural_language_query: String,
    pub examples: Vec<TrainingExample>,
    pub filter: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateTrainingQueryOptions {
    pub fn new(
        project_id: impl Into<String>,
        query_id: impl Into<String>,
        natural_language_query: impl Into<String>,
        examples: Vec<TrainingExample>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            query_id: query_id.into(),
            natural_language_query: natural_language_query.into(),
            examples,
            ..Default::default()
        }
    }
}

options_setters!(UpdateTrainingQueryOptions { filter: String });

#[derive(Debug, Clone, Default)]
pub struct DeleteTrainingQueryOptions {
    pub project_id: String,
    pub query_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteTrainingQueryOptions {
    pub fn new(project_id: impl Into<String>, query_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            query_id: query_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteTrainingQueryOptions {});

// ============================================================================
// Enrichment options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListEnrichmentsOptions {
    pub project_id: String,
    pub headers: HashMap<String, String>,
}

impl ListEnrichmentsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(ListEnrichmentsOptions {});

#[derive(Debug, Clone, Default)]
pub struct CreateEnrichmentOptions {
    pub project_id: String,
    pub enrichment: CreateEnrichment,
    /// Dictionary, model or rule file backing the enrichment
    pub file: Option<FileInput>,
    pub headers: HashMap<String, String>,
}

impl CreateEnrichmentOptions {
    pub fn new(project_id: impl Into<String>, enrichment: CreateEnrichment) -> Self {
        Self {
            project_id: project_id.into(),
            enrichment,
            ..Default::default()
        }
    }
}

options_setters!(CreateEnrichmentOptions { file: FileInput });

#[derive(Debug, Clone, Default)]
pub struct GetEnrichmentOptions {
    pub project_id: String,
    pub enrichment_id: String,
    pub headers: HashMap<String, String>,
}

impl GetEnrichmentOptions {
    pub fn new(project_id: impl Into<String>, enrichment_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            enrichment_id: enrichment_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetEnrichmentOptions {});

#[derive(Debug, Clone, Default)]
pub struct UpdateEnrichmentOptions {
    pub project_id: String,
    pub enrichment_id: String,
    pub name: String,
    pub description: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateEnrichmentOptions {
    pub fn new(
        project_id: impl Into<String>,
        enrichment_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            enrichment_id: enrichment_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

options_setters!(UpdateEnrichmentOptions { description: String });

#[derive(Debug, Clone, Default)]
pub struct DeleteEnrichmentOptions {
    pub project_id: String,
    pub enrichment_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteEnrichmentOptions {
    pub fn new(project_id: impl Into<String>, enrichment_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            enrichment_id: enrichment_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteEnrichmentOptions {});

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

/// Multipart parts for document ingestion; at least one of the two is needed
fn document_parts(file: &Option<FileInput>, metadata: &Option<String>) -> Result<Vec<FormPart>> {
    if file.is_none() && metadata.is_none() {
        return Err(WatsonError::validation(
            "at least one of file or metadata must be supplied",
        ));
    }

    let mut parts = Vec::new();
    if let Some(file) = file {
        let filename = file
            .filename
            .as_deref()
            .ok_or_else(|| WatsonError::validation("file must have a filename"))?;
        require("filename", filename)?;
        parts.push(file.to_part("file", filename));
    }
    if let Some(metadata) = metadata {
        parts.push(FormPart::text("metadata", metadata.clone()));
    }
    Ok(parts)
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone)]
pub struct DiscoveryV2 {
    service: BaseService,
    version: String,
}

impl DiscoveryV2 {
    pub fn new(version: impl Into<String>, options: ServiceOptions) -> Result<Self> {
        let version = version.into();
        require("version", &version)?;
        Ok(Self {
            service: BaseService::new(options, DEFAULT_SERVICE_URL)?,
            version,
        })
    }

    /// Configure from `DISCOVERY_*` environment / credentials file entries
    pub fn from_environment(version: impl Into<String>) -> Result<Self> {
        let mut discovery = Self::new(
            version,
            ServiceOptions::from_environment(DEFAULT_SERVICE_NAME)?,
        )?;
        discovery.service.configure_service(DEFAULT_SERVICE_NAME)?;
        Ok(discovery)
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
    // Projects
    // ------------------------------------------------------------------------

    pub fn list_projects(
        &self,
        options: &ListProjectsOptions,
    ) -> Result<DetailedResponse<ListProjectsResponse>> {
        let builder = self.request(
            Method::GET,
            "/v2/projects",
            &[],
            "ListProjects",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn create_project(
        &self,
        options: &CreateProjectOptions,
    ) -> Result<DetailedResponse<ProjectDetails>> {
        require("name", &options.name)?;
        require("type", &options.project_type)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects",
            &[],
            "CreateProject",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert("name", &options.name)?
            .insert("type", &options.project_type)?
            .insert_opt("default_query_parameters", &options.default_query_parameters)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn get_project(&self, options: &GetProjectOptions) -> Result<DetailedResponse<ProjectDetails>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}",
            &[("project_id", &options.project_id)],
            "GetProject",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn update_project(
        &self,
        options: &UpdateProjectOptions,
    ) -> Result<DetailedResponse<ProjectDetails>> {
        require("project_id", &options.project_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}",
            &[("project_id", &options.project_id)],
            "UpdateProject",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert_opt("name", &options.name)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    /// Delete a project along with its collections and documents
    pub fn delete_project(&self, options: &DeleteProjectOptions) -> Result<DetailedResponse<()>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v2/projects/{project_id}",
            &[("project_id", &options.project_id)],
            "DeleteProject",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    /// List the fields of the project's collections
    pub fn list_fields(
        &self,
        options: &ListFieldsOptions,
    ) -> Result<DetailedResponse<ListFieldsResponse>> {
        require("project_id", &options.project_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/fields",
            &[("project_id", &options.project_id)],
            "ListFields",
            &options.headers,
        )?;
        builder.add_query_list("collection_ids", &options.collection_ids);
        self.service.request_json(&builder)
    }

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------

    pub fn list_collections(
        &self,
        options: &ListCollectionsOptions,
    ) -> Result<DetailedResponse<ListCollectionsResponse>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/collections",
            &[("project_id", &options.project_id)],
            "ListCollections",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn create_collection(
        &self,
        options: &CreateCollectionOptions,
    ) -> Result<DetailedResponse<CollectionDetails>> {
        require("project_id", &options.project_id)?;
        require("name", &options.name)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/collections",
            &[("project_id", &options.project_id)],
            "CreateCollection",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert("name", &options.name)?
            .insert_opt("description", &options.description)?
            .insert_opt("language", &options.language)?
            .insert_opt("enrichments", &options.enrichments)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn get_collection(
        &self,
        options: &GetCollectionOptions,
    ) -> Result<DetailedResponse<CollectionDetails>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/collections/{collection_id}",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
            ],
            "GetCollection",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn update_collection(
        &self,
        options: &UpdateCollectionOptions,
    ) -> Result<DetailedResponse<CollectionDetails>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/collections/{collection_id}",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
            ],
            "UpdateCollection",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert_opt("name", &options.name)?
            .insert_opt("description", &options.description)?
            .insert_opt("enrichments", &options.enrichments)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn delete_collection(
        &self,
        options: &DeleteCollectionOptions,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v2/projects/{project_id}/collections/{collection_id}",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
            ],
            "DeleteCollection",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Search the collections of a project
    pub fn query(&self, options: &QueryOptions) -> Result<DetailedResponse<QueryResponse>> {
        require("project_id", &options.project_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/query",
            &[("project_id", &options.project_id)],
            "Query",
            &options.headers,
        )?;
        builder.set_json_object(options.body()?);
        self.service.request_json(&builder)
    }

    /// Suggest completions for a partially typed query
    pub fn get_autocompletion(
        &self,
        options: &GetAutocompletionOptions,
    ) -> Result<DetailedResponse<Completions>> {
        require("project_id", &options.project_id)?;
        require("prefix", &options.prefix)?;
        let mut builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/autocompletion",
            &[("project_id", &options.project_id)],
            "GetAutocompletion",
            &options.headers,
        )?;
        builder
            .add_query("prefix", &options.prefix)
            .add_query_list("collection_ids", &options.collection_ids)
            .add_query_opt("field", options.field.as_ref())
            .add_query_opt("count", options.count);
        self.service.request_json(&builder)
    }

    pub fn query_collection_notices(
        &self,
        options: &QueryCollectionNoticesOptions,
    ) -> Result<DetailedResponse<QueryNoticesResponse>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/collections/{collection_id}/notices",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
            ],
            "QueryCollectionNotices",
            &options.headers,
        )?;
        builder
            .add_query_opt("filter", options.filter.as_ref())
            .add_query_opt("query", options.query.as_ref())
            .add_query_opt(
                "natural_language_query",
                options.natural_language_query.as_ref(),
            )
            .add_query_opt("count", options.count)
            .add_query_opt("offset", options.offset);
        self.service.request_json(&builder)
    }

    pub fn query_notices(
        &self,
        options: &QueryNoticesOptions,
    ) -> Result<DetailedResponse<QueryNoticesResponse>> {
        require("project_id", &options.project_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/notices",
            &[("project_id", &options.project_id)],
            "QueryNotices",
            &options.headers,
        )?;
        builder
            .add_query_opt("filter", options.filter.as_ref())
            .add_query_opt("query", options.query.as_ref())
            .add_query_opt(
                "natural_language_query",
                options.natural_language_query.as_ref(),
            )
            .add_query_opt("count", options.count)
            .add_query_opt("offset", options.offset);
        self.service.request_json(&builder)
    }

    /// Settings used by the default search UI of the project
    pub fn get_component_settings(
        &self,
        options: &GetComponentSettingsOptions,
    ) -> Result<DetailedResponse<ComponentSettingsResponse>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/component_settings",
            &[("project_id", &options.project_id)],
            "GetComponentSettings",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    // ------------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------------

    /// Ingest a document; processing continues after the call returns
    pub fn add_document(
        &self,
        options: &AddDocumentOptions,
    ) -> Result<DetailedResponse<DocumentAccepted>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        let parts = document_parts(&options.file, &options.metadata)?;

        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/collections/{collection_id}/documents",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
            ],
            "AddDocument",
            &options.headers,
        )?;
        if let Some(force) = options.x_watson_discovery_force {
            builder.add_header("X-Watson-Discovery-Force", force.to_string());
        }
        builder.set_multipart_body(parts);

        self.service.request_json(&builder)
    }

    /// Replace a document's content or metadata
    pub fn update_document(
        &self,
        options: &UpdateDocumentOptions,
    ) -> Result<DetailedResponse<DocumentAccepted>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        require("document_id", &options.document_id)?;
        let parts = document_parts(&options.file, &options.metadata)?;

        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/collections/{collection_id}/documents/{document_id}",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
                ("document_id", &options.document_id),
            ],
            "UpdateDocument",
            &options.headers,
        )?;
        if let Some(force) = options.x_watson_discovery_force {
            builder.add_header("X-Watson-Discovery-Force", force.to_string());
        }
        builder.set_multipart_body(parts);

        self.service.request_json(&builder)
    }

    pub fn delete_document(
        &self,
        options: &DeleteDocumentOptions,
    ) -> Result<DetailedResponse<DeleteDocumentResponse>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        require("document_id", &options.document_id)?;
        let mut builder = self.request(
            Method::DELETE,
            "/v2/projects/{project_id}/collections/{collection_id}/documents/{document_id}",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
                ("document_id", &options.document_id),
            ],
            "DeleteDocument",
            &options.headers,
        )?;
        if let Some(force) = options.x_watson_discovery_force {
            builder.add_header("X-Watson-Discovery-Force", force.to_string());
        }
        self.service.request_json(&builder)
    }

    /// Run the collection's enrichments on a document without ingesting it
    pub fn analyze_document(
        &self,
        options: &AnalyzeDocumentOptions,
    ) -> Result<DetailedResponse<AnalyzedDocument>> {
        require("project_id", &options.project_id)?;
        require("collection_id", &options.collection_id)?;
        let parts = document_parts(&options.file, &options.metadata)?;

        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/collections/{collection_id}/analyze",
            &[
                ("project_id", &options.project_id),
                ("collection_id", &options.collection_id),
            ],
            "AnalyzeDocument",
            &options.headers,
        )?;
        builder.set_multipart_body(parts);

        self.service.request_json(&builder)
    }

    // ------------------------------------------------------------------------
    // Training data
    // ------------------------------------------------------------------------

    pub fn list_training_queries(
        &self,
        options: &ListTrainingQueriesOptions,
    ) -> Result<DetailedResponse<TrainingQuerySet>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/training_data/queries",
            &[("project_id", &options.project_id)],
            "ListTrainingQueries",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    /// Remove all training queries of a project
    pub fn delete_training_queries(
        &self,
        options: &DeleteTrainingQueriesOptions,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v2/projects/{project_id}/training_data/queries",
            &[("project_id", &options.project_id)],
            "DeleteTrainingQueries",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    pub fn create_training_query(
        &self,
        options: &CreateTrainingQueryOptions,
    ) -> Result<DetailedResponse<TrainingQuery>> {
        require("project_id", &options.project_id)?;
        require("natural_language_query", &options.natural_language_query)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/training_data/queries",
            &[("project_id", &options.project_id)],
            "CreateTrainingQuery",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert("natural_language_query", &options.natural_language_query)?
            .insert("examples", &options.examples)?
            .insert_opt("filter", &options.filter)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn get_training_query(
        &self,
        options: &GetTrainingQueryOptions,
    ) -> Result<DetailedResponse<TrainingQuery>> {
        require("project_id", &options.project_id)?;
        require("query_id", &options.query_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/training_data/queries/{query_id}",
            &[
                ("project_id", &options.project_id),
                ("query_id", &options.query_id),
            ],
            "GetTrainingQuery",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn update_training_query(
        &self,
        options: &UpdateTrainingQueryOptions,
    ) -> Result<DetailedResponse<TrainingQuery>> {
        require("project_id", &options.project_id)?;
        require("query_id", &options.query_id)?;
        require("natural_language_query", &options.natural_language_query)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/training_data/queries/{query_id}",
            &[
                ("project_id", &options.project_id),
                ("query_id", &options.query_id),
            ],
            "UpdateTrainingQuery",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert("natural_language_query", &options.natural_language_query)?
            .insert("examples", &options.examples)?
            .insert_opt("filter", &options.filter)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn delete_training_query(
        &self,
        options: &DeleteTrainingQueryOptions,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", &options.project_id)?;
        require("query_id", &options.query_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v2/projects/{project_id}/training_data/queries/{query_id}",
            &[
                ("project_id", &options.project_id),
                ("query_id", &options.query_id),
            ],
            "DeleteTrainingQuery",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    // ------------------------------------------------------------------------
    // Enrichments
    // ------------------------------------------------------------------------

    pub fn list_enrichments(
        &self,
        options: &ListEnrichmentsOptions,
    ) -> Result<DetailedResponse<Enrichments>> {
        require("project_id", &options.project_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/enrichments",
            &[("project_id", &options.project_id)],
            "ListEnrichments",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn create_enrichment(
        &self,
        options: &CreateEnrichmentOptions,
    ) -> Result<DetailedResponse<Enrichment>> {
        require("project_id", &options.project_id)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/enrichments",
            &[("project_id", &options.project_id)],
            "CreateEnrichment",
            &options.headers,
        )?;

        let mut parts = vec![FormPart::json("enrichment", &options.enrichment)?];
        if let Some(ref file) = options.file {
            parts.push(file.to_part("file", "enrichment_file"));
        }
        builder.set_multipart_body(parts);

        self.service.request_json(&builder)
    }

    pub fn get_enrichment(
        &self,
        options: &GetEnrichmentOptions,
    ) -> Result<DetailedResponse<Enrichment>> {
        require("project_id", &options.project_id)?;
        require("enrichment_id", &options.enrichment_id)?;
        let builder = self.request(
            Method::GET,
            "/v2/projects/{project_id}/enrichments/{enrichment_id}",
            &[
                ("project_id", &options.project_id),
                ("enrichment_id", &options.enrichment_id),
            ],
            "GetEnrichment",
            &options.headers,
        )?;
        self.service.request_json(&builder)
    }

    pub fn update_enrichment(
        &self,
        options: &UpdateEnrichmentOptions,
    ) -> Result<DetailedResponse<Enrichment>> {
        require("project_id", &options.project_id)?;
        require("enrichment_id", &options.enrichment_id)?;
        require("name", &options.name)?;
        let mut builder = self.request(
            Method::POST,
            "/v2/projects/{project_id}/enrichments/{enrichment_id}",
            &[
                ("project_id", &options.project_id),
                ("enrichment_id", &options.enrichment_id),
            ],
            "UpdateEnrichment",
            &options.headers,
        )?;

        let mut body = JsonBody::new();
        body.insert("name", &options.name)?
            .insert_opt("description", &options.description)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn delete_enrichment(
        &self,
        options: &DeleteEnrichmentOptions,
    ) -> Result<DetailedResponse<()>> {
        require("project_id", &options.project_id)?;
        require("enrichment_id", &options.enrichment_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v2/projects/{project_id}/enrichments/{enrichment_id}",
            &[
                ("project_id", &options.project_id),
                ("enrichment_id", &options.enrichment_id),
            ],
            "DeleteEnrichment",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
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
