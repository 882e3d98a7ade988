// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Base service shared by all Watson service clients
//!
//! Holds the service URL, authenticator, default headers and HTTP client,
//! executes requests (with optional retries) and decodes responses.

use super::auth::Authenticator;
use super::config::{self, build_http_client, HttpClientConfig, ServiceOptions};
use super::request::{self, RequestBuilder};
use crate::error::{Result, WatsonError};
use reqwest::header::{HeaderMap, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 4;
pub const DEFAULT_MAX_RETRY_INTERVAL_SECS: u64 = 30;
const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Status code, headers and decoded body of a successful call
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub max_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            max_interval: Duration::from_secs(DEFAULT_MAX_RETRY_INTERVAL_SECS),
        }
    }
}

impl RetryPolicy {
    /// Exponential backoff from one second, capped at `max_interval`
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        INITIAL_RETRY_DELAY
            .saturating_mul(factor)
            .min(self.max_interval)
    }
}

/// 429 and 5xx (except 501) are worth another attempt
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Pull a human-readable message out of an error body
pub fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/errors/0/message")
                .or_else(|| json.get("error"))
                .or_else(|| json.get("message"))
                .or_else(|| json.get("errorMessage"))
                .and_then(|v| v.as_str())
                .map(String::from)
        });

    from_json.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}

#[derive(Debug, Clone)]
pub struct BaseService {
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    default_headers: HashMap<String, String>,
    http: HttpClientConfig,
    client: reqwest::blocking::Client,
    retry: Option<RetryPolicy>,
}

impl BaseService {
    /// Create a base service, falling back to `default_url` when no URL is given
    pub fn new(options: ServiceOptions, default_url: &str) -> Result<Self> {
        options.authenticator.validate()?;

        let client = build_http_client(&options.http)?;
        let mut service = Self {
            service_url: String::new(),
            authenticator: options.authenticator,
            default_headers: HashMap::new(),
            http: options.http,
            client,
            retry: None,
        };
        service.set_service_url(options.url.as_deref().unwrap_or(default_url))?;
        Ok(service)
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(WatsonError::InvalidServiceUrl(
                "service URL must not be empty".to_string(),
            ));
        }
        if url.contains('{') || url.contains('}') {
            return Err(WatsonError::InvalidServiceUrl(format!(
                "service URL must not contain '{{' or '}}': {}",
                url
            )));
        }
        self.service_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Headers sent with every request of this service
    pub fn set_default_headers(&mut self, headers: HashMap<String, String>) {
        self.default_headers = headers;
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        let defaults = RetryPolicy::default();
        self.retry = Some(RetryPolicy {
            max_retries: if max_retries == 0 {
                defaults.max_retries
            } else {
                max_retries
            },
            max_interval: if max_interval.is_zero() {
                defaults.max_interval
            } else {
                max_interval
            },
        });
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    pub fn http_config(&self) -> &HttpClientConfig {
        &self.http
    }

    pub fn set_http_config(&mut self, http: HttpClientConfig) -> Result<()> {
        self.client = build_http_client(&http)?;
        self.http = http;
        Ok(())
    }

    pub fn disable_ssl_verification(&mut self) -> Result<()> {
        let http = HttpClientConfig {
            disable_ssl_verification: true,
            ..self.http.clone()
        };
        self.set_http_config(http)
    }

    /// Apply URL, SSL and retry settings for `service_name` from external configuration
    pub fn configure_service(&mut self, service_name: &str) -> Result<()> {
        let props = config::get_service_properties(service_name)?;

        if let Some(url) = props.get(config::PROP_URL) {
            self.set_service_url(url)?;
        }
        if config::disable_ssl(&props) {
            self.disable_ssl_verification()?;
        }
        if let Some((max_retries, interval_secs)) = config::retry_settings(&props) {
            self.enable_retries(max_retries, Duration::from_secs(interval_secs));
        }
        Ok(())
    }

    /// Start a request for `path`, with default and analytics headers applied
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        analytics: (String, String),
    ) -> Result<RequestBuilder> {
        let url = request::resolve_url(&self.service_url, path, params)?;
        let mut builder = RequestBuilder::new(method, url);
        builder.add_headers(&self.default_headers);
        builder.add_header(&analytics.0, analytics.1);
        Ok(builder)
    }

    fn send_once(&self, builder: &RequestBuilder) -> Result<reqwest::blocking::Response> {
        let mut attempt = builder.clone();
        if let Some(value) = self.authenticator.authorization_header()? {
            attempt.add_header(AUTHORIZATION.as_str(), value);
        }
        Ok(attempt.build(&self.client)?.send()?)
    }

    /// Send the request, retrying per the retry policy, and fail on non-2xx
    pub fn send(&self, builder: &RequestBuilder) -> Result<reqwest::blocking::Response> {
        log::debug!("{} {}", builder.method, builder.url);

        let max_retries = self.retry.map(|r| r.max_retries).unwrap_or(0);
        let mut attempt = 0;
        loop {
            let result = self.send_once(builder);
            let policy = match self.retry {
                Some(policy) if attempt < max_retries => policy,
                _ => return check_status(result?),
            };

            let delay = match &result {
                Ok(resp) if is_retryable_status(resp.status()) => Some(
                    retry_after(resp.headers())
                        .unwrap_or_else(|| policy.backoff(attempt))
                        .min(policy.max_interval),
                ),
                Err(WatsonError::Transport(_)) => Some(policy.backoff(attempt)),
                _ => None,
            };
            let Some(delay) = delay else {
                return check_status(result?);
            };

            attempt += 1;
            log::warn!(
                "{} {} failed, retrying in {:?} (attempt {}/{})",
                builder.method,
                builder.url,
                delay,
                attempt,
                max_retries
            );
            std::thread::sleep(delay);
        }
    }

    /// Send and decode a JSON response body
    pub fn request_json<T: DeserializeOwned>(
        &self,
        builder: &RequestBuilder,
    ) -> Result<DetailedResponse<T>> {
        let response = self.send(builder)?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes()?;
        let result = serde_json::from_slice(&bytes)?;
        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }

    /// Send a request whose response carries no body of interest
    pub fn request_empty(&self, builder: &RequestBuilder) -> Result<DetailedResponse<()>> {
        let response = self.send(builder)?;
        Ok(DetailedResponse {
            status_code: response.status().as_u16(),
            headers: response.headers().clone(),
            result: (),
        })
    }

    /// Send and return the raw response body
    pub fn request_bytes(&self, builder: &RequestBuilder) -> Result<DetailedResponse<Vec<u8>>> {
        let response = self.send(builder)?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let result = response.bytes()?.to_vec();
        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }

    /// Send and return the response body as text
    pub fn request_text(&self, builder: &RequestBuilder) -> Result<DetailedResponse<String>> {
        let response = self.send(builder)?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let result = response.text()?;
        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let body = response.text().unwrap_or_default();
    let message = error_message(status, &body);
    log::debug!("Request failed with {}: {}", status, message);
    Err(WatsonError::Http {
        status: status.as_u16(),
        message,
        headers,
        body,
    })
}
