// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Tone Analyzer v3 models

use serde::{Deserialize, Serialize};

/// JSON input for general-purpose tone analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneInput {
    pub text: String,
}

/// One utterance of a customer-engagement conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Utterance {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: None,
        }
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneAnalysis {
    pub document_tone: DocumentAnalysis,
    pub sentences_tone: Option<Vec<SentenceAnalysis>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub tones: Option<Vec<ToneScore>>,
    /// Only present with API versions before 2017-09-21
    pub tone_categories: Option<Vec<ToneCategory>>,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub sentence_id: i64,
    pub text: String,
    pub tones: Option<Vec<ToneScore>>,
    pub tone_categories: Option<Vec<ToneCategory>>,
    pub input_from: Option<i64>,
    pub input_to: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneScore {
    pub score: f64,
    pub tone_id: String,
    pub tone_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneCategory {
    #[serde(default)]
    pub tones: Vec<ToneScore>,
    pub category_id: String,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtteranceAnalyses {
    #[serde(default)]
    pub utterances_tone: Vec<UtteranceAnalysis>,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtteranceAnalysis {
    pub utterance_id: i64,
    pub utterance_text: String,
    #[serde(default)]
    pub tones: Vec<ToneChatScore>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneChatScore {
    pub score: f64,
    /// `excited`, `frustrated`, `impolite`, `polite`, `sad`, `satisfied` or `sympathetic`
    pub tone_id: String,
    pub tone_name: String,
}
