// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Tone Analyzer v3
//!
//! Detects emotional and language tones in written text, either for a whole
//! document and its sentences or per utterance of a customer conversation.

pub mod models;

pub use models::*;

use crate::core::common::sdk_headers;
use crate::core::{BaseService, DetailedResponse, JsonBody, ServiceOptions};
use crate::error::{require, require_non_empty, Result};
use reqwest::Method;
use std::collections::HashMap;

pub const DEFAULT_SERVICE_NAME: &str = "tone_analyzer";
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.tone-analyzer.watson.cloud.ibm.com";
pub const DEFAULT_VERSION: &str = "2017-09-21";

const SERVICE_VERSION: &str = "V3";

/// Content submitted for tone analysis
#[derive(Debug, Clone, PartialEq)]
pub enum ToneContent {
    /// Sent as `application/json`
    Input(ToneInput),
    /// Sent as `text/plain`
    Text(String),
    /// Sent as `text/html`
    Html(String),
}

impl ToneContent {
    fn text(&self) -> &str {
        match self {
            Self::Input(input) => &input.text,
            Self::Text(text) | Self::Html(text) => text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToneOptions {
    pub content: ToneContent,
    /// Include sentence-level analysis (service default: `true`)
    pub sentences: Option<bool>,
    /// Tones to return for API versions before 2017-09-21: `emotion`, `language`, `social`
    pub tones: Option<Vec<String>>,
    pub content_language: Option<String>,
    pub accept_language: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ToneOptions {
    pub fn new(content: ToneContent) -> Self {
        Self {
            content,
            sentences: None,
            tones: None,
            content_language: None,
            accept_language: None,
            headers: HashMap::new(),
        }
    }
}

options_setters!(ToneOptions {
    sentences: bool,
    tones: Vec<String>,
    content_language: String,
    accept_language: String,
});

#[derive(Debug, Clone, Default)]
pub struct ToneChatOptions {
    pub utterances: Vec<Utterance>,
    pub content_language: Option<String>,
    pub accept_language: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ToneChatOptions {
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self {
            utterances,
            ..Default::default()
        }
    }
}

options_setters!(ToneChatOptions {
    content_language: String,
    accept_language: String,
});

#[derive(Debug, Clone)]
pub struct ToneAnalyzerV3 {
    service: BaseService,
    version: String,
}

impl ToneAnalyzerV3 {
    pub fn new(version: impl Into<String>, options: ServiceOptions) -> Result<Self> {
        let version = version.into();
        require("version", &version)?;
        Ok(Self {
            service: BaseService::new(options, DEFAULT_SERVICE_URL)?,
            version,
        })
    }

    pub fn from_environment(version: impl Into<String>) -> Result<Self> {
        let mut analyzer = Self::new(
            version,
            ServiceOptions::from_environment(DEFAULT_SERVICE_NAME)?,
        )?;
        analyzer.service.configure_service(DEFAULT_SERVICE_NAME)?;
        Ok(analyzer)
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

    /// Analyze the tone of a document and, optionally, each of its sentences
    pub fn tone(&self, options: &ToneOptions) -> Result<DetailedResponse<ToneAnalysis>> {
        require("text", options.content.text())?;

        let mut builder = self.service.new_request(
            Method::POST,
            "/v3/tone",
            &[],
            sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "Tone"),
        )?;
        builder.add_headers(&options.headers);
        builder.add_header("Accept", "application/json");
        builder
            .add_header_opt("Content-Language", options.content_language.as_ref())
            .add_header_opt("Accept-Language", options.accept_language.as_ref());

        builder
            .add_query("version", &self.version)
            .add_query_opt("sentences", options.sentences);
        if let Some(ref tones) = options.tones {
            builder.add_query_list("tones", tones);
        }

        match &options.content {
            ToneContent::Input(input) => {
                builder.set_json_body(input)?;
            }
            ToneContent::Text(text) => {
                builder.set_raw_body(text.clone(), "text/plain;charset=utf-8");
            }
            ToneContent::Html(html) => {
                builder.set_raw_body(html.clone(), "text/html;charset=utf-8");
            }
        }

        self.service.request_json(&builder)
    }

    /// Analyze customer-engagement tones for each utterance of a conversation
    pub fn tone_chat(
        &self,
        options: &ToneChatOptions,
    ) -> Result<DetailedResponse<UtteranceAnalyses>> {
        require_non_empty("utterances", &options.utterances)?;

        let mut builder = self.service.new_request(
            Method::POST,
            "/v3/tone_chat",
            &[],
            sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "ToneChat"),
        )?;
        builder.add_headers(&options.headers);
        builder.add_header("Accept", "application/json");
        builder
            .add_header_opt("Content-Language", options.content_language.as_ref())
            .add_header_opt("Accept-Language", options.accept_language.as_ref());
        builder.add_query("version", &self.version);

        let mut body = JsonBody::new();
        body.insert("utterances", &options.utterances)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoAuthAuthenticator;
    use std::sync::Arc;

    fn analyzer() -> ToneAnalyzerV3 {
        ToneAnalyzerV3::new(
            DEFAULT_VERSION,
            ServiceOptions::new(Arc::new(NoAuthAuthenticator)),
        )
        .unwrap()
    }

    #[test]
    fn test_tone_rejects_empty_text() {
        let err = analyzer()
            .tone(&ToneOptions::new(ToneContent::Text(String::new())))
            .unwrap_err();
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn test_tone_chat_rejects_no_utterances() {
        let err = analyzer().tone_chat(&ToneChatOptions::new(vec![])).unwrap_err();
        assert!(err.to_string().contains("utterances"));
    }

    #[test]
    fn test_utterance_serialization_omits_missing_user() {
        let json = serde_json::to_value(Utterance::new("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Hello"}));
        let json = serde_json::to_value(Utterance::new("Hi").user("agent")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Hi", "user": "agent"}));
    }
}
