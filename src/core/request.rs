// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Request assembly: path templates, query strings, headers and bodies
//!
//! A [`RequestBuilder`] holds everything needed to produce a
//! `reqwest::blocking::RequestBuilder`, and can be turned into one any
//! number of times. The retry loop in the base service relies on that.

use crate::error::{Result, WatsonError};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;

/// Substitute `{name}` placeholders in `path` and join it onto `service_url`.
///
/// Values are percent-encoded as single path segments. An empty value is
/// rejected because it would silently address a different resource.
pub fn resolve_url(service_url: &str, path: &str, params: &[(&str, &str)]) -> Result<String> {
    if service_url.is_empty() {
        return Err(WatsonError::InvalidServiceUrl(
            "service URL is not set".to_string(),
        ));
    }

    let mut resolved = path.to_string();
    for (name, value) in params {
        if value.is_empty() {
            return Err(WatsonError::validation(format!(
                "path parameter '{}' is empty",
                name
            )));
        }
        resolved = resolved.replace(
            &format!("{{{}}}", name),
            &urlencoding::encode(value),
        );
    }

    if resolved.contains('{') {
        return Err(WatsonError::validation(format!(
            "unresolved path parameter in '{}'",
            path
        )));
    }

    Ok(format!("{}{}", service_url.trim_end_matches('/'), resolved))
}

/// JSON object body holding only the fields the caller actually set
#[derive(Debug, Clone, Default)]
pub struct JsonBody(serde_json::Map<String, serde_json::Value>);

impl JsonBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<&mut Self> {
        self.0.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn insert_opt<T: Serialize>(&mut self, key: &str, value: &Option<T>) -> Result<&mut Self> {
        if let Some(v) = value {
            self.insert(key, v)?;
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> serde_json::Value {
        serde_json::Value::Object(self.0)
    }
}

/// Payload of a single multipart form part
#[derive(Debug, Clone)]
pub enum PartData {
    Text(String),
    Bytes(Vec<u8>),
}

/// One part of a multipart/form-data body
#[derive(Debug, Clone)]
pub struct FormPart {
    pub name: String,
    pub data: PartData,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: PartData::Text(value.into()),
            filename: None,
            content_type: None,
        }
    }

    /// A part holding `value` serialized as JSON
    pub fn json<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            data: PartData::Text(serde_json::to_string(value)?),
            filename: None,
            content_type: Some("application/json".to_string()),
        })
    }

    pub fn file(
        name: impl Into<String>,
        data: Vec<u8>,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data: PartData::Bytes(data),
            filename,
            content_type,
        }
    }

    fn to_part(&self) -> Result<Part> {
        let mut part = match &self.data {
            PartData::Text(s) => Part::text(s.clone()),
            PartData::Bytes(b) => Part::bytes(b.clone()),
        };
        if let Some(ref filename) = self.filename {
            part = part.file_name(filename.clone());
        }
        if let Some(ref content_type) = self.content_type {
            part = part.mime_str(content_type)?;
        }
        Ok(part)
    }
}

/// File content uploaded as one multipart part
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl FileInput {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Read a file from disk, using its file name as the part file name
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        Ok(Self {
            data,
            filename: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            content_type: None,
        })
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Multipart part named `name`; `default_filename` fills a missing file name
    pub fn to_part(&self, name: &str, default_filename: &str) -> FormPart {
        FormPart::file(
            name,
            self.data.clone(),
            Some(
                self.filename
                    .clone()
                    .unwrap_or_else(|| default_filename.to_string()),
            ),
            self.content_type.clone(),
        )
    }
}

/// Request body variants used by the Watson APIs
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Raw {
        content: Vec<u8>,
        content_type: String,
    },
    Form(Vec<(String, String)>),
    Multipart(Vec<FormPart>),
}

/// A reusable description of one HTTP request
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn add_query(&mut self, name: &str, value: impl ToString) -> &mut Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn add_query_opt<T: ToString>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.add_query(name, v);
        }
        self
    }

    /// Add a list-valued query parameter as a comma-separated string
    pub fn add_query_list(&mut self, name: &str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.add_query(name, values.join(","));
        }
        self
    }

    /// Set a header, replacing any earlier value with the same name
    pub fn add_header(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn add_header_opt(&mut self, name: &str, value: Option<&String>) -> &mut Self {
        if let Some(v) = value {
            self.add_header(name, v.clone());
        }
        self
    }

    pub fn add_headers<'a>(
        &mut self,
        headers: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> &mut Self {
        for (name, value) in headers {
            self.add_header(name, value.clone());
        }
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_json_body<T: Serialize>(&mut self, body: &T) -> Result<&mut Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn set_json_object(&mut self, body: JsonBody) -> &mut Self {
        self.body = RequestBody::Json(body.into_value());
        self
    }

    pub fn set_raw_body(
        &mut self,
        content: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> &mut Self {
        self.body = RequestBody::Raw {
            content: content.into(),
            content_type: content_type.into(),
        };
        self
    }

    pub fn set_form_body(&mut self, fields: Vec<(String, String)>) -> &mut Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn set_multipart_body(&mut self, parts: Vec<FormPart>) -> &mut Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Produce a ready-to-send reqwest request on `client`
    pub fn build(
        &self,
        client: &reqwest::blocking::Client,
    ) -> Result<reqwest::blocking::RequestBuilder> {
        let mut req = client.request(self.method.clone(), &self.url);
        if !self.query.is_empty() {
            req = req.query(&self.query);
        }
        let multipart = matches!(self.body, RequestBody::Multipart(_));
        for (name, value) in &self.headers {
            // reqwest sets the multipart content type with its boundary
            if multipart && name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                continue;
            }
            req = req.header(name.as_str(), value.as_str());
        }

        let has_content_type = self.header(CONTENT_TYPE.as_str()).is_some();
        req = match &self.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => {
                if !has_content_type {
                    req = req.header(CONTENT_TYPE, "application/json");
                }
                req.body(serde_json::to_vec(value)?)
            }
            RequestBody::Raw {
                content,
                content_type,
            } => {
                if !has_content_type {
                    req = req.header(CONTENT_TYPE, content_type.as_str());
                }
                req.body(content.clone())
            }
            RequestBody::Form(fields) => req.form(fields),
            RequestBody::Multipart(parts) => {
                let mut form = Form::new();
                for part in parts {
                    form = form.part(part.name.clone(), part.to_part()?);
                }
                req.multipart(form)
            }
        };

        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_encodes_segments() {
        let url = resolve_url(
            "https://example.com/api/",
            "/v1/workspaces/{workspace_id}/intents/{intent}",
            &[("workspace_id", "ws 1"), ("intent", "a/b")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://example.com/api/v1/workspaces/ws%201/intents/a%2Fb"
        );
    }

    #[test]
    fn test_resolve_url_rejects_empty_param() {
        let err = resolve_url(
            "https://example.com",
            "/v2/projects/{project_id}",
            &[("project_id", "")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("project_id"));
    }

    #[test]
    fn test_resolve_url_requires_service_url() {
        assert!(matches!(
            resolve_url("", "/v3/languages", &[]),
            Err(WatsonError::InvalidServiceUrl(_))
        ));
    }

    #[test]
    fn test_json_body_skips_unset_fields() {
        let mut body = JsonBody::new();
        body.insert("name", "docs").unwrap();
        body.insert_opt::<String>("description", &None).unwrap();
        body.insert_opt("count", &Some(3)).unwrap();
        assert_eq!(
            body.into_value(),
            serde_json::json!({"name": "docs", "count": 3})
        );
    }

    #[test]
    fn test_add_header_replaces_case_insensitively() {
        let mut builder = RequestBuilder::new(Method::GET, "https://example.com");
        builder.add_header("Accept", "application/json");
        builder.add_header("accept", "text/csv");
        assert_eq!(builder.headers.len(), 1);
        assert_eq!(builder.header("ACCEPT"), Some("text/csv"));
    }

    #[test]
    fn test_build_json_request() {
        let client = reqwest::blocking::Client::new();
        let mut builder = RequestBuilder::new(Method::POST, "https://example.com/v3/translate");
        builder
            .add_query("version", "2018-05-01")
            .add_query_list("tones", &["emotion".to_string(), "social".to_string()])
            .add_query_opt::<bool>("sentences", None);
        builder
            .set_json_body(&serde_json::json!({"text": ["hello"]}))
            .unwrap();

        let request = builder.build(&client).unwrap().build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://example.com/v3/translate?version=2018-05-01&tones=emotion%2Csocial"
        );
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"text":["hello"]}"#);
    }

    #[test]
    fn test_raw_body_respects_explicit_content_type() {
        let client = reqwest::blocking::Client::new();
        let mut builder = RequestBuilder::new(Method::POST, "https://example.com/v3/tone");
        builder.add_header("Content-Type", "text/html");
        builder.set_raw_body("<p>hi</p>", "text/plain");

        let request = builder.build(&client).unwrap().build().unwrap();
        let values: Vec<_> = request.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "text/html");
    }

    #[test]
    fn test_multipart_drops_caller_content_type() {
        let client = reqwest::blocking::Client::new();
        let mut builder = RequestBuilder::new(Method::POST, "https://example.com/v3/documents");
        builder.add_header("Content-Type", "application/json");
        builder.set_multipart_body(vec![FormPart::text("target", "es")]);

        let request = builder.build(&client).unwrap().build().unwrap();
        let values: Vec<_> = request.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values.len(), 1);
        assert!(values[0]
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
    }
}
