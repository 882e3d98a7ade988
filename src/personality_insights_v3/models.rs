// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Personality Insights v3 models

use serde::{Deserialize, Serialize};

/// JSON input: a set of content items written by one author
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(rename = "contentItems")]
    pub content_items: Vec<ContentItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    /// `text/plain` or `text/html`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contenttype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parentid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<bool>,
}

impl ContentItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub processed_language: String,
    pub word_count: i64,
    pub word_count_message: Option<String>,
    #[serde(default)]
    pub personality: Vec<Trait>,
    #[serde(default)]
    pub needs: Vec<Trait>,
    #[serde(default)]
    pub values: Vec<Trait>,
    pub behavior: Option<Vec<Behavior>>,
    pub consumption_preferences: Option<Vec<ConsumptionPreferencesCategory>>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

/// A Big Five dimension, facet, need or value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trait {
    pub trait_id: String,
    pub name: String,
    /// `personality`, `needs` or `values`
    pub category: String,
    pub percentile: f64,
    pub raw_score: Option<f64>,
    pub significant: Option<bool>,
    pub children: Option<Vec<Trait>>,
}

/// Share of content created on a given weekday or hour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Behavior {
    pub trait_id: String,
    pub name: String,
    pub category: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionPreferencesCategory {
    pub consumption_preference_category_id: String,
    pub name: String,
    #[serde(default)]
    pub consumption_preferences: Vec<ConsumptionPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionPreferences {
    pub consumption_preference_id: String,
    pub name: String,
    /// 0.0 unlikely, 0.5 neutral, 1.0 likely
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub warning_id: String,
    pub message: String,
}
