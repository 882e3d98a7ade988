// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Discovery v2 models

use super::aggregation::QueryAggregation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Projects and collections
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    #[serde(default)]
    pub projects: Vec<ProjectListDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListDetails {
    pub project_id: Option<String>,
    pub name: Option<String>,
    /// `document_retrieval`, `conversational_search`, `content_mining`, ...
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub relevancy_training_status: Option<ProjectRelTrainStatus>,
    pub collection_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub project_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub relevancy_training_status: Option<ProjectRelTrainStatus>,
    pub collection_count: Option<i64>,
    pub default_query_parameters: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRelTrainStatus {
    pub data_updated: Option<String>,
    pub total_examples: Option<i64>,
    pub sufficient_label_diversity: Option<bool>,
    pub processing: Option<bool>,
    pub minimum_examples_added: Option<bool>,
    pub successfully_trained: Option<String>,
    pub available: Option<bool>,
    pub notices: Option<i64>,
    pub minimum_queries_added: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFieldsResponse {
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub field: Option<String>,
    /// `nested`, `string`, `date`, `long`, `integer`, ...
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub collection_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    #[serde(default)]
    pub collections: Vec<Collection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDetails {
    pub collection_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
}

/// An enrichment applied to fields of a collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionEnrichment {
    pub enrichment_id: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

// ============================================================================
// Query parameters
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryLargeTableResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryLargeSuggestedRefinements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryLargePassages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Group passages per document instead of returning them at the top level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_document: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_answers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_answers_per_passage: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryLargeSimilar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

// ============================================================================
// Query results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub matching_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<QueryResult>,
    #[serde(default)]
    pub aggregations: Vec<QueryAggregation>,
    pub retrieval_details: Option<RetrievalDetails>,
    pub suggested_query: Option<String>,
    pub suggested_refinements: Option<Vec<QuerySuggestedRefinement>>,
    pub table_results: Option<Vec<Value>>,
    pub passages: Option<Vec<QueryResponsePassage>>,
}

/// A matching document; fields other than the fixed ones land in `document`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub document_id: String,
    pub metadata: Option<Map<String, Value>>,
    pub result_metadata: QueryResultMetadata,
    pub document_passages: Option<Vec<QueryResultPassage>>,
    #[serde(flatten)]
    pub document: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    /// `search` or `curation`
    pub document_retrieval_source: Option<String>,
    pub collection_id: String,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResultPassage {
    pub passage_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub confidence: Option<f64>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPassageAnswer {
    pub answer_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponsePassage {
    pub passage_text: Option<String>,
    pub passage_score: Option<f64>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub confidence: Option<f64>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalDetails {
    /// `untrained`, `relevancy_training` or `continuous_relevancy_training`
    pub document_retrieval_strategy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySuggestedRefinement {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completions {
    #[serde(default)]
    pub completions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    pub matching_results: Option<i64>,
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// A warning or error raised while ingesting or querying documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub notice_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub query_id: Option<String>,
    /// `warning` or `error`
    pub severity: Option<String>,
    pub step: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSettingsResponse {
    pub fields_shown: Option<ComponentSettingsFieldsShown>,
    pub autocomplete: Option<bool>,
    pub structured_search: Option<bool>,
    pub results_per_page: Option<i64>,
    pub aggregations: Option<Vec<ComponentSettingsAggregation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShown {
    pub body: Option<ComponentSettingsField>,
    pub title: Option<ComponentSettingsField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSettingsField {
    pub use_passage: Option<bool>,
    pub field: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSettingsAggregation {
    pub name: Option<String>,
    pub label: Option<String>,
    pub multiple_selections_allowed: Option<bool>,
    /// `auto`, `facet_table`, `word_cloud` or `map`
    pub visualization_type: Option<String>,
}

// ============================================================================
// Documents
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAccepted {
    pub document_id: Option<String>,
    /// `processing` or `pending`
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Option<String>,
    /// `deleted`
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    #[serde(default)]
    pub notices: Vec<Notice>,
    pub result: Option<AnalyzedResult>,
}

/// Enriched output of an analyzed document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedResult {
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub enrichments: Map<String, Value>,
}

// ============================================================================
// Training data
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingQuerySet {
    #[serde(default)]
    pub queries: Vec<TrainingQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingQuery {
    pub query_id: Option<String>,
    pub natural_language_query: String,
    pub filter: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub examples: Vec<TrainingExample>,
}

/// A document judged for relevance against a training query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingExample {
    pub document_id: String,
    pub collection_id: String,
    pub relevance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl TrainingExample {
    pub fn new(
        document_id: impl Into<String>,
        collection_id: impl Into<String>,
        relevance: i64,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            collection_id: collection_id.into(),
            relevance,
            created: None,
            updated: None,
        }
    }
}

// ============================================================================
// Enrichments
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrichments {
    #[serde(default)]
    pub enrichments: Vec<Enrichment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrichment {
    pub enrichment_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `part_of_speech`, `sentiment`, `dictionary`, `regular_expression`, ...
    #[serde(rename = "type")]
    pub enrichment_type: Option<String>,
    pub options: Option<EnrichmentOptions>,
}

/// Definition of a new enrichment, sent as the `enrichment` multipart part
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateEnrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `classifier`, `dictionary`, `regular_expression`, `uima_annotator`,
    /// `rule_based`, `watson_knowledge_studio_model` or `webhook`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enrichment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnrichmentOptions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnrichmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
