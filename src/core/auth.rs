// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Authenticators
//!
//! ## Supported schemes
//!
//! - **Basic** - username and password
//! - **Bearer token** - a caller-managed access token
//! - **IAM** - IBM Cloud API key exchanged for short-lived access tokens
//! - **No auth** - for proxies and local test servers

use crate::error::{Result, WatsonError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";
const IAM_TOKEN_PATH: &str = "/identity/token";
const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Authentication scheme identifiers, as used in external configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Basic,
    BearerToken,
    Iam,
    NoAuth,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::BearerToken => "bearerToken",
            Self::Iam => "iam",
            Self::NoAuth => "noAuth",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AuthType {
    type Err = WatsonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "bearertoken" => Ok(Self::BearerToken),
            "iam" => Ok(Self::Iam),
            "noauth" => Ok(Self::NoAuth),
            other => Err(WatsonError::Configuration(format!(
                "unrecognized authentication type: {}",
                other
            ))),
        }
    }
}

/// Produces the `Authorization` header for outgoing requests
pub trait Authenticator: Send + Sync + fmt::Debug {
    fn authentication_type(&self) -> AuthType;

    /// Check the configuration without performing any I/O
    fn validate(&self) -> Result<()>;

    /// Value of the `Authorization` header, or `None` when no header is sent
    fn authorization_header(&self) -> Result<Option<String>>;
}

fn has_bad_chars(s: &str) -> bool {
    s.contains(['{', '}', '"'])
}

fn check_credential(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(WatsonError::Authentication(format!(
            "the {} property is required but was not specified",
            name
        )));
    }
    if has_bad_chars(value) {
        return Err(WatsonError::Authentication(format!(
            "the {} property must not contain '{{', '}}' or '\"'",
            name
        )));
    }
    Ok(())
}

// ============================================================================
// Basic
// ============================================================================

#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let auth = Self {
            username: username.into(),
            password: password.into(),
        };
        auth.validate()?;
        Ok(auth)
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::Basic
    }

    fn validate(&self) -> Result<()> {
        check_credential("username", &self.username)?;
        check_credential("password", &self.password)
    }

    fn authorization_header(&self) -> Result<Option<String>> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        Ok(Some(format!("Basic {}", encoded)))
    }
}

// ============================================================================
// Bearer token
// ============================================================================

pub struct BearerTokenAuthenticator {
    bearer_token: Mutex<String>,
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        let auth = Self {
            bearer_token: Mutex::new(bearer_token.into()),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Replace the token, e.g. after the caller refreshed it
    pub fn set_bearer_token(&self, token: impl Into<String>) -> Result<()> {
        let mut guard = self
            .bearer_token
            .lock()
            .map_err(|_| WatsonError::Authentication("token lock poisoned".to_string()))?;
        *guard = token.into();
        Ok(())
    }

    fn token(&self) -> Result<String> {
        self.bearer_token
            .lock()
            .map(|t| t.clone())
            .map_err(|_| WatsonError::Authentication("token lock poisoned".to_string()))
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator").finish_non_exhaustive()
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::BearerToken
    }

    fn validate(&self) -> Result<()> {
        if self.token()?.is_empty() {
            return Err(WatsonError::Authentication(
                "the bearer token property is required but was not specified".to_string(),
            ));
        }
        Ok(())
    }

    fn authorization_header(&self) -> Result<Option<String>> {
        Ok(Some(format!("Bearer {}", self.token()?)))
    }
}

// ============================================================================
// No auth
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::NoAuth
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn authorization_header(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

// ============================================================================
// IAM
// ============================================================================

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct IamTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: i64,
    pub expiration: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expiration: i64,
    refresh_time: i64,
}

impl CachedToken {
    fn from_response(resp: IamTokenResponse) -> Self {
        // Refresh once 80% of the lifetime has elapsed
        let refresh_time = resp.expiration - (resp.expires_in as f64 * 0.2) as i64;
        Self {
            access_token: resp.access_token,
            expiration: resp.expiration,
            refresh_time,
        }
    }

    fn is_valid(&self, now: i64) -> bool {
        now < self.expiration
    }

    fn needs_refresh(&self, now: i64) -> bool {
        now >= self.refresh_time
    }
}

/// Exchanges an IBM Cloud API key for access tokens and caches them
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    disable_ssl_verification: bool,
    token: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    pub fn new(apikey: impl Into<String>) -> Result<Self> {
        IamAuthenticatorBuilder::new(apikey).build()
    }

    pub fn builder(apikey: impl Into<String>) -> IamAuthenticatorBuilder {
        IamAuthenticatorBuilder::new(apikey)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current access token, fetching or refreshing it as needed
    pub fn token(&self) -> Result<String> {
        let now = Utc::now().timestamp();
        let mut cached = self
            .token
            .lock()
            .map_err(|_| WatsonError::Authentication("token cache lock poisoned".to_string()))?;

        match cached.clone() {
            Some(token) if token.is_valid(now) && !token.needs_refresh(now) => {
                return Ok(token.access_token);
            }
            Some(token) if token.is_valid(now) => {
                log::debug!("IAM access token is due for refresh");
                match self.request_token() {
                    Ok(resp) => *cached = Some(CachedToken::from_response(resp)),
                    Err(e) => {
                        // Still usable until it expires
                        log::warn!("IAM token refresh failed, reusing current token: {}", e);
                        return Ok(token.access_token);
                    }
                }
            }
            _ => {
                log::debug!("Requesting new IAM access token from {}", self.url);
                *cached = Some(CachedToken::from_response(self.request_token()?));
            }
        }

        cached
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or_else(|| WatsonError::Authentication("no IAM token available".to_string()))
    }

    /// Call the IAM token endpoint
    pub fn request_token(&self) -> Result<IamTokenResponse> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(self.disable_ssl_verification)
            .build()?;

        let mut form = vec![
            ("grant_type", IAM_GRANT_TYPE.to_string()),
            ("apikey", self.apikey.clone()),
            ("response_type", "cloud_iam".to_string()),
        ];
        if let Some(ref scope) = self.scope {
            form.push(("scope", scope.clone()));
        }

        let mut request = client
            .post(format!("{}{}", self.url.trim_end_matches('/'), IAM_TOKEN_PATH))
            .header("Accept", "application/json")
            .form(&form);
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(WatsonError::Authentication(format!(
                "IAM token request returned {}: {}",
                status, body
            )));
        }

        Ok(response.json()?)
    }
}

impl fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::Iam
    }

    fn validate(&self) -> Result<()> {
        check_credential("apikey", &self.apikey)?;
        match (&self.client_id, &self.client_secret) {
            (Some(_), None) | (None, Some(_)) => Err(WatsonError::Authentication(
                "client_id and client_secret must both be set or both be omitted".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn authorization_header(&self) -> Result<Option<String>> {
        Ok(Some(format!("Bearer {}", self.token()?)))
    }
}

pub struct IamAuthenticatorBuilder {
    apikey: String,
    url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    disable_ssl_verification: bool,
}

impl IamAuthenticatorBuilder {
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: apikey.into(),
            url: None,
            client_id: None,
            client_secret: None,
            scope: None,
            disable_ssl_verification: false,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    pub fn build(self) -> Result<IamAuthenticator> {
        let auth = IamAuthenticator {
            apikey: self.apikey,
            url: self
                .url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
            client_id: self.client_id,
            client_secret: self.client_secret,
            scope: self.scope,
            disable_ssl_verification: self.disable_ssl_verification,
            token: Mutex::new(None),
        };
        auth.validate()?;
        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        let auth = BasicAuthenticator::new("user", "pass").unwrap();
        assert_eq!(
            auth.authorization_header().unwrap().unwrap(),
            "Basic dXNlcjpwYXNz"
        );
        assert_eq!(auth.authentication_type(), AuthType::Basic);
    }

    #[test]
    fn test_basic_rejects_braces_and_quotes() {
        assert!(BasicAuthenticator::new("{user}", "pass").is_err());
        assert!(BasicAuthenticator::new("user", "\"pass\"").is_err());
        assert!(BasicAuthenticator::new("", "pass").is_err());
        assert!(BasicAuthenticator::new("us{er", "pass").is_err());
        assert!(BasicAuthenticator::new("user", "pa\"ss").is_err());
    }

    #[test]
    fn test_bearer_token_replace() {
        let auth = BearerTokenAuthenticator::new("abc").unwrap();
        assert_eq!(auth.authorization_header().unwrap().unwrap(), "Bearer abc");
        auth.set_bearer_token("xyz").unwrap();
        assert_eq!(auth.authorization_header().unwrap().unwrap(), "Bearer xyz");
        assert!(BearerTokenAuthenticator::new("").is_err());
    }

    #[test]
    fn test_no_auth_sends_nothing() {
        assert!(NoAuthAuthenticator.authorization_header().unwrap().is_none());
    }

    #[test]
    fn test_iam_client_credentials_must_pair() {
        assert!(IamAuthenticator::builder("key").client_id("id").build().is_err());
        let auth = IamAuthenticator::builder("key")
            .client_credentials("id", "secret")
            .build()
            .unwrap();
        assert_eq!(auth.url(), DEFAULT_IAM_URL);
    }

    #[test]
    fn test_auth_type_parse() {
        assert_eq!("IAM".parse::<AuthType>().unwrap(), AuthType::Iam);
        assert_eq!("bearerToken".parse::<AuthType>().unwrap(), AuthType::BearerToken);
        assert_eq!("noauth".parse::<AuthType>().unwrap(), AuthType::NoAuth);
        assert!("cp4d".parse::<AuthType>().is_err());
    }

    #[test]
    fn test_cached_token_refresh_window() {
        let token = CachedToken::from_response(IamTokenResponse {
            access_token: "t".to_string(),
            refresh_token: None,
            token_type: Some("Bearer".to_string()),
            expires_in: 3600,
            expiration: 10_000,
        });
        assert_eq!(token.refresh_time, 10_000 - 720);
        assert!(!token.needs_refresh(9_000));
        assert!(token.needs_refresh(9_280));
        assert!(token.is_valid(9_999));
        assert!(!token.is_valid(10_000));
    }
}
