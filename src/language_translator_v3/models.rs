// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Language Translator v3 response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Languages {
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// A language supported for translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub language: Option<String>,
    pub language_name: Option<String>,
    pub native_language_name: Option<String>,
    pub country_code: Option<String>,
    pub words_separated: Option<bool>,
    /// `left_to_right` or `right_to_left`
    pub direction: Option<String>,
    pub supported_as_source: Option<bool>,
    pub supported_as_target: Option<bool>,
    pub identifiable: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub word_count: i64,
    pub character_count: i64,
    pub detected_language: Option<String>,
    pub detected_language_confidence: Option<f64>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiableLanguages {
    #[serde(default)]
    pub languages: Vec<IdentifiableLanguage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiableLanguage {
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedLanguages {
    #[serde(default)]
    pub languages: Vec<IdentifiedLanguage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedLanguage {
    pub language: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationModels {
    #[serde(default)]
    pub models: Vec<TranslationModel>,
}

/// A base or custom translation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationModel {
    pub model_id: String,
    pub name: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub base_model_id: Option<String>,
    pub domain: Option<String>,
    pub customizable: Option<bool>,
    pub default_model: Option<bool>,
    pub owner: Option<String>,
    /// `uploading`, `uploaded`, `dispatching`, `queued`, `training`,
    /// `trained`, `publishing`, `available`, `deleted` or `error`
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteModelResult {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub documents: Vec<DocumentStatus>,
}

/// Progress of a document translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub document_id: String,
    pub filename: String,
    /// `processing`, `available` or `failed`
    pub status: String,
    pub model_id: String,
    pub base_model_id: Option<String>,
    pub source: String,
    pub detected_language_confidence: Option<f64>,
    pub target: String,
    pub created: DateTime<Utc>,
    pub completed: Option<DateTime<Utc>>,
    pub word_count: Option<i64>,
    pub character_count: Option<i64>,
}
