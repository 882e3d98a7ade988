// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Service configuration
//!
//! Credentials and endpoints can come from code, from environment variables,
//! or from an `ibm-credentials.env` file. External properties are keyed by
//! the upper-cased service name, e.g. `LANGUAGE_TRANSLATOR_APIKEY` or
//! `CONVERSATION_URL`.

use super::auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator,
};
use crate::error::{Result, WatsonError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";
pub const CREDENTIALS_FILE_ENV_VAR: &str = "IBM_CREDENTIALS_FILE";

pub const PROP_URL: &str = "URL";
pub const PROP_AUTH_TYPE: &str = "AUTH_TYPE";
pub const PROP_APIKEY: &str = "APIKEY";
pub const PROP_USERNAME: &str = "USERNAME";
pub const PROP_PASSWORD: &str = "PASSWORD";
pub const PROP_BEARER_TOKEN: &str = "BEARER_TOKEN";
pub const PROP_AUTH_URL: &str = "AUTH_URL";
pub const PROP_CLIENT_ID: &str = "CLIENT_ID";
pub const PROP_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const PROP_SCOPE: &str = "SCOPE";
pub const PROP_AUTH_DISABLE_SSL: &str = "AUTH_DISABLE_SSL";
pub const PROP_DISABLE_SSL: &str = "DISABLE_SSL";
pub const PROP_ENABLE_RETRIES: &str = "ENABLE_RETRIES";
pub const PROP_MAX_RETRIES: &str = "MAX_RETRIES";
pub const PROP_RETRY_INTERVAL: &str = "RETRY_INTERVAL";

/// HTTP client configuration for service clients
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub disable_ssl_verification: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            user_agent: super::common::user_agent().to_string(),
            disable_ssl_verification: false,
        }
    }
}

/// Build a configured HTTP client
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::blocking::Client> {
    use std::time::Duration;

    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent)
        .danger_accept_invalid_certs(config.disable_ssl_verification)
        .build()
        .map_err(|e| WatsonError::Configuration(format!("Failed to build HTTP client: {}", e)))
}

/// Everything needed to construct a service client
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Base URL; the service default is used when `None`
    pub url: Option<String>,
    pub authenticator: Arc<dyn Authenticator>,
    pub http: HttpClientConfig,
}

impl ServiceOptions {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            url: None,
            authenticator,
            http: HttpClientConfig::default(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Load authenticator and URL for `service_name` from the environment
    pub fn from_environment(service_name: &str) -> Result<Self> {
        let props = get_service_properties(service_name)?;
        let authenticator = authenticator_from_properties(&props)?;
        Ok(Self {
            url: props.get(PROP_URL).cloned(),
            authenticator,
            http: HttpClientConfig::default(),
        })
    }
}

/// Key prefix for a service name: `language-translator` -> `LANGUAGE_TRANSLATOR`
pub fn env_prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

/// Locate the credentials file, if any
pub fn credentials_file_path() -> Option<PathBuf> {
    find_credentials_file(
        std::env::var_os(CREDENTIALS_FILE_ENV_VAR).map(PathBuf::from),
        std::env::current_dir().ok(),
        dirs::home_dir(),
    )
}

/// First existing file among the explicit path, `<cwd>/ibm-credentials.env`
/// and `<home>/ibm-credentials.env`
fn find_credentials_file(
    explicit: Option<PathBuf>,
    cwd: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .into_iter()
        .chain(cwd.map(|dir| dir.join(CREDENTIALS_FILE_NAME)))
        .chain(home.map(|dir| dir.join(CREDENTIALS_FILE_NAME)))
        .find(|path| path.is_file())
}

/// Parse `KEY=VALUE` lines; `#` comments and blank lines are skipped
pub fn parse_credentials(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

/// Pick out the properties belonging to `service_name`, with the prefix removed
fn select_service_properties(
    entries: impl IntoIterator<Item = (String, String)>,
    service_name: &str,
) -> HashMap<String, String> {
    let prefix = format!("{}_", env_prefix(service_name));
    entries
        .into_iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(&prefix)
                .map(|prop| (prop.to_string(), value))
        })
        .collect()
}

/// Read the properties for `service_name` from a specific credentials file
pub fn read_credentials_file(path: &Path, service_name: &str) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(select_service_properties(
        parse_credentials(&content),
        service_name,
    ))
}

/// Collect external configuration for a service
///
/// The credentials file is read first; environment variables override it.
pub fn get_service_properties(service_name: &str) -> Result<HashMap<String, String>> {
    if service_name.is_empty() {
        return Err(WatsonError::Configuration(
            "service name must not be empty".to_string(),
        ));
    }

    let mut props = match credentials_file_path() {
        Some(path) => {
            log::debug!("Reading credentials from {}", path.display());
            read_credentials_file(&path, service_name)?
        }
        None => HashMap::new(),
    };
    props.extend(select_service_properties(std::env::vars(), service_name));
    Ok(props)
}

fn prop_bool(props: &HashMap<String, String>, key: &str) -> bool {
    props
        .get(key)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Infer the auth type when `AUTH_TYPE` is not given
fn infer_auth_type(props: &HashMap<String, String>) -> Result<AuthType> {
    if let Some(explicit) = props.get(PROP_AUTH_TYPE) {
        return explicit.parse();
    }
    if props.contains_key(PROP_APIKEY) {
        Ok(AuthType::Iam)
    } else if props.contains_key(PROP_USERNAME) || props.contains_key(PROP_PASSWORD) {
        Ok(AuthType::Basic)
    } else if props.contains_key(PROP_BEARER_TOKEN) {
        Ok(AuthType::BearerToken)
    } else {
        Err(WatsonError::Configuration(
            "no authentication properties found".to_string(),
        ))
    }
}

fn required_prop<'a>(props: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    props
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| WatsonError::Configuration(format!("missing property {}", key)))
}

/// Build an authenticator from an already-selected property map
pub fn authenticator_from_properties(
    props: &HashMap<String, String>,
) -> Result<Arc<dyn Authenticator>> {
    let authenticator: Arc<dyn Authenticator> = match infer_auth_type(props)? {
        AuthType::Basic => Arc::new(BasicAuthenticator::new(
            required_prop(props, PROP_USERNAME)?,
            required_prop(props, PROP_PASSWORD)?,
        )?),
        AuthType::BearerToken => Arc::new(BearerTokenAuthenticator::new(required_prop(
            props,
            PROP_BEARER_TOKEN,
        )?)?),
        AuthType::NoAuth => Arc::new(NoAuthAuthenticator),
        AuthType::Iam => {
            let mut builder = IamAuthenticator::builder(required_prop(props, PROP_APIKEY)?)
                .disable_ssl_verification(prop_bool(props, PROP_AUTH_DISABLE_SSL));
            if let Some(url) = props.get(PROP_AUTH_URL) {
                builder = builder.url(url.clone());
            }
            if let Some(id) = props.get(PROP_CLIENT_ID) {
                builder = builder.client_id(id.clone());
            }
            if let Some(secret) = props.get(PROP_CLIENT_SECRET) {
                builder = builder.client_secret(secret.clone());
            }
            if let Some(scope) = props.get(PROP_SCOPE) {
                builder = builder.scope(scope.clone());
            }
            Arc::new(builder.build()?)
        }
    };
    Ok(authenticator)
}

/// Build an authenticator for `service_name` from external configuration
pub fn authenticator_from_environment(service_name: &str) -> Result<Arc<dyn Authenticator>> {
    authenticator_from_properties(&get_service_properties(service_name)?)
}

/// Retry settings found in external configuration, if retries are enabled
pub(crate) fn retry_settings(props: &HashMap<String, String>) -> Option<(u32, u64)> {
    if !prop_bool(props, PROP_ENABLE_RETRIES) {
        return None;
    }
    let max_retries = props
        .get(PROP_MAX_RETRIES)
        .and_then(|v| v.parse().ok())
        .unwrap_or(super::service::DEFAULT_MAX_RETRIES);
    let interval = props
        .get(PROP_RETRY_INTERVAL)
        .and_then(|v| v.parse().ok())
        .unwrap_or(super::service::DEFAULT_MAX_RETRY_INTERVAL_SECS);
    Some((max_retries, interval))
}

pub(crate) fn disable_ssl(props: &HashMap<String, String>) -> bool {
    prop_bool(props, PROP_DISABLE_SSL)
}
