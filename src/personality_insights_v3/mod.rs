// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Personality Insights v3
//!
//! Infers Big Five personality characteristics, needs, values and consumption
//! preferences from text.

pub mod models;

pub use models::*;

use crate::core::common::sdk_headers;
use crate::core::{BaseService, DetailedResponse, RequestBuilder, ServiceOptions};
use crate::error::{require, require_non_empty, Result};
use reqwest::Method;
use std::collections::HashMap;

pub const DEFAULT_SERVICE_NAME: &str = "personality_insights";
pub const DEFAULT_SERVICE_URL: &str =
    "https://api.us-south.personality-insights.watson.cloud.ibm.com";
pub const DEFAULT_VERSION: &str = "2017-10-13";

const SERVICE_VERSION: &str = "V3";

/// Content submitted for analysis
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileContent {
    /// Sent as `application/json`
    Content(Content),
    /// Sent as `text/plain`
    Text(String),
    /// Sent as `text/html`
    Html(String),
}

#[derive(Debug, Clone)]
pub struct ProfileOptions {
    pub content: ProfileContent,
    pub content_language: Option<String>,
    pub accept_language: Option<String>,
    pub raw_scores: Option<bool>,
    /// Only meaningful for CSV output
    pub csv_headers: Option<bool>,
    pub consumption_preferences: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ProfileOptions {
    pub fn new(content: ProfileContent) -> Self {
        Self {
            content,
            content_language: None,
            accept_language: None,
            raw_scores: None,
            csv_headers: None,
            consumption_preferences: None,
            headers: HashMap::new(),
        }
    }
}

options_setters!(ProfileOptions {
    content_language: String,
    accept_language: String,
    raw_scores: bool,
    csv_headers: bool,
    consumption_preferences: bool,
});

#[derive(Debug, Clone)]
pub struct PersonalityInsightsV3 {
    service: BaseService,
    version: String,
}

impl PersonalityInsightsV3 {
    pub fn new(version: impl Into<String>, options: ServiceOptions) -> Result<Self> {
        let version = version.into();
        require("version", &version)?;
        Ok(Self {
            service: BaseService::new(options, DEFAULT_SERVICE_URL)?,
            version,
        })
    }

    pub fn from_environment(version: impl Into<String>) -> Result<Self> {
        let mut insights = Self::new(
            version,
            ServiceOptions::from_environment(DEFAULT_SERVICE_NAME)?,
        )?;
        insights.service.configure_service(DEFAULT_SERVICE_NAME)?;
        Ok(insights)
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

    fn profile_request(
        &self,
        options: &ProfileOptions,
        operation_id: &str,
        accept: &str,
    ) -> Result<RequestBuilder> {
        match &options.content {
            ProfileContent::Content(content) => {
                require_non_empty("content_items", &content.content_items)?
            }
            ProfileContent::Text(text) | ProfileContent::Html(text) => require("text", text)?,
        }

        let mut builder = self.service.new_request(
            Method::POST,
            "/v3/profile",
            &[],
            sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id),
        )?;
        builder.add_headers(&options.headers);
        builder.add_header("Accept", accept);
        builder
            .add_header_opt("Content-Language", options.content_language.as_ref())
            .add_header_opt("Accept-Language", options.accept_language.as_ref());

        builder
            .add_query("version", &self.version)
            .add_query_opt("raw_scores", options.raw_scores)
            .add_query_opt("csv_headers", options.csv_headers)
            .add_query_opt("consumption_preferences", options.consumption_preferences);

        match &options.content {
            ProfileContent::Content(content) => {
                builder.set_json_body(content)?;
            }
            ProfileContent::Text(text) => {
                builder.set_raw_body(text.clone(), "text/plain;charset=utf-8");
            }
            ProfileContent::Html(html) => {
                builder.set_raw_body(html.clone(), "text/html;charset=utf-8");
            }
        }
        Ok(builder)
    }

    /// Generate a personality profile as JSON
    pub fn profile(&self, options: &ProfileOptions) -> Result<DetailedResponse<Profile>> {
        let builder = self.profile_request(options, "Profile", "application/json")?;
        self.service.request_json(&builder)
    }

    /// Generate a personality profile as CSV text
    pub fn profile_as_csv(&self, options: &ProfileOptions) -> Result<DetailedResponse<String>> {
        let builder = self.profile_request(options, "ProfileAsCsv", "text/csv")?;
        self.service.request_text(&builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoAuthAuthenticator;
    use std::sync::Arc;

    #[test]
    fn test_content_serializes_camel_case_items() {
        let content = Content {
            content_items: vec![ContentItem {
                language: Some("en".to_string()),
                ..ContentItem::new("I love hiking")
            }],
        };
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            serde_json::json!({"contentItems": [{"content": "I love hiking", "language": "en"}]})
        );
    }

    #[test]
    fn test_profile_rejects_empty_content() {
        let insights = PersonalityInsightsV3::new(
            DEFAULT_VERSION,
            ServiceOptions::new(Arc::new(NoAuthAuthenticator)),
        )
        .unwrap();
        let err = insights
            .profile(&ProfileOptions::new(ProfileContent::Content(Content::default())))
            .unwrap_err();
        assert!(err.to_string().contains("content_items"));
    }
}
