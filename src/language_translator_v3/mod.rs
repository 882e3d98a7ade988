// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Language Translator v3
//!
//! Translates text and documents between languages, identifies the language
//! of text, and manages custom translation models.
//!
//! ```rust,ignore
//! use watson::language_translator_v3::{LanguageTranslatorV3, TranslateOptions};
//!
//! let translator = LanguageTranslatorV3::from_environment("2018-05-01")?;
//! let result = translator
//!     .translate(&TranslateOptions::new(vec!["Hello".to_string()]).model_id("en-es"))?
//!     .into_result();
//! ```

pub mod models;

pub use models::*;

use crate::core::common::sdk_headers;
use crate::core::{
    BaseService, DetailedResponse, FileInput, FormPart, JsonBody, RequestBuilder, ServiceOptions,
};
use crate::error::{require, require_non_empty, Result, WatsonError};
use reqwest::Method;
use std::collections::HashMap;

pub const DEFAULT_SERVICE_NAME: &str = "language_translator";
pub const DEFAULT_SERVICE_URL: &str =
    "https://api.us-south.language-translator.watson.cloud.ibm.com";
pub const DEFAULT_VERSION: &str = "2018-05-01";

const SERVICE_VERSION: &str = "V3";

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListLanguagesOptions {
    pub headers: HashMap<String, String>,
}

options_setters!(ListLanguagesOptions {});

#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub text: Vec<String>,
    pub model_id: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub headers: HashMap<String, String>,
}

impl TranslateOptions {
    pub fn new(text: Vec<String>) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }
}

options_setters!(TranslateOptions {
    model_id: String,
    source: String,
    target: String,
});

#[derive(Debug, Clone, Default)]
pub struct ListIdentifiableLanguagesOptions {
    pub headers: HashMap<String, String>,
}

options_setters!(ListIdentifiableLanguagesOptions {});

#[derive(Debug, Clone, Default)]
pub struct IdentifyOptions {
    pub text: String,
    pub headers: HashMap<String, String>,
}

impl IdentifyOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

options_setters!(IdentifyOptions {});

#[derive(Debug, Clone, Default)]
pub struct ListModelsOptions {
    pub source: Option<String>,
    pub target: Option<String>,
    /// Restrict to default (`true`) or non-default (`false`) models
    pub default_models: Option<bool>,
    pub headers: HashMap<String, String>,
}

options_setters!(ListModelsOptions {
    source: String,
    target: String,
    default_models: bool,
});

#[derive(Debug, Clone, Default)]
pub struct CreateModelOptions {
    pub base_model_id: String,
    pub forced_glossary: Option<FileInput>,
    pub parallel_corpus: Option<FileInput>,
    pub name: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateModelOptions {
    pub fn new(base_model_id: impl Into<String>) -> Self {
        Self {
            base_model_id: base_model_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(CreateModelOptions {
    forced_glossary: FileInput,
    parallel_corpus: FileInput,
    name: String,
});

#[derive(Debug, Clone, Default)]
pub struct DeleteModelOptions {
    pub model_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteModelOptions {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteModelOptions {});

#[derive(Debug, Clone, Default)]
pub struct GetModelOptions {
    pub model_id: String,
    pub headers: HashMap<String, String>,
}

impl GetModelOptions {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetModelOptions {});

#[derive(Debug, Clone, Default)]
pub struct ListDocumentsOptions {
    pub headers: HashMap<String, String>,
}

options_setters!(ListDocumentsOptions {});

#[derive(Debug, Clone, Default)]
pub struct TranslateDocumentOptions {
    /// Must carry a file name; the service infers the format from it
    pub file: FileInput,
    pub model_id: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub document_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl TranslateDocumentOptions {
    pub fn new(file: FileInput) -> Self {
        Self {
            file,
            ..Default::default()
        }
    }
}

options_setters!(TranslateDocumentOptions {
    model_id: String,
    source: String,
    target: String,
    document_id: String,
});

#[derive(Debug, Clone, Default)]
pub struct GetDocumentStatusOptions {
    pub document_id: String,
    pub headers: HashMap<String, String>,
}

impl GetDocumentStatusOptions {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetDocumentStatusOptions {});

#[derive(Debug, Clone, Default)]
pub struct DeleteDocumentOptions {
    pub document_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteDocumentOptions {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(DeleteDocumentOptions {});

#[derive(Debug, Clone, Default)]
pub struct GetTranslatedDocumentOptions {
    pub document_id: String,
    /// Desired output format, e.g. `application/pdf`
    pub accept: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetTranslatedDocumentOptions {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

options_setters!(GetTranslatedDocumentOptions { accept: String });

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone)]
pub struct LanguageTranslatorV3 {
    service: BaseService,
    version: String,
}

impl LanguageTranslatorV3 {
    pub fn new(version: impl Into<String>, options: ServiceOptions) -> Result<Self> {
        let version = version.into();
        require("version", &version)?;
        Ok(Self {
            service: BaseService::new(options, DEFAULT_SERVICE_URL)?,
            version,
        })
    }

    /// Configure from `LANGUAGE_TRANSLATOR_*` environment / credentials file entries
    pub fn from_environment(version: impl Into<String>) -> Result<Self> {
        let mut translator = Self::new(
            version,
            ServiceOptions::from_environment(DEFAULT_SERVICE_NAME)?,
        )?;
        translator.service.configure_service(DEFAULT_SERVICE_NAME)?;
        Ok(translator)
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

    fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        operation_id: &str,
        headers: &HashMap<String, String>,
    ) -> Result<RequestBuilder> {
        let mut builder = self.service.new_request(
            method,
            path,
            params,
            sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id),
        )?;
        builder.add_headers(headers);
        builder.add_query("version", &self.version);
        Ok(builder)
    }

    /// List the languages the service can translate between
    pub fn list_languages(
        &self,
        options: &ListLanguagesOptions,
    ) -> Result<DetailedResponse<Languages>> {
        let mut builder = self.request(
            Method::GET,
            "/v3/languages",
            &[],
            "ListLanguages",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        self.service.request_json(&builder)
    }

    /// Translate one or more strings
    pub fn translate(
        &self,
        options: &TranslateOptions,
    ) -> Result<DetailedResponse<TranslationResult>> {
        require_non_empty("text", &options.text)?;
        if options.model_id.is_none() && options.target.is_none() {
            return Err(WatsonError::validation(
                "either model_id or target must be specified",
            ));
        }

        let mut builder = self.request(
            Method::POST,
            "/v3/translate",
            &[],
            "Translate",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");

        let mut body = JsonBody::new();
        body.insert("text", &options.text)?;
        body.insert_opt("model_id", &options.model_id)?;
        body.insert_opt("source", &options.source)?;
        body.insert_opt("target", &options.target)?;
        builder.set_json_object(body);

        self.service.request_json(&builder)
    }

    pub fn list_identifiable_languages(
        &self,
        options: &ListIdentifiableLanguagesOptions,
    ) -> Result<DetailedResponse<IdentifiableLanguages>> {
        let mut builder = self.request(
            Method::GET,
            "/v3/identifiable_languages",
            &[],
            "ListIdentifiableLanguages",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        self.service.request_json(&builder)
    }

    /// Identify the language of plain text
    pub fn identify(
        &self,
        options: &IdentifyOptions,
    ) -> Result<DetailedResponse<IdentifiedLanguages>> {
        require("text", &options.text)?;

        let mut builder = self.request(
            Method::POST,
            "/v3/identify",
            &[],
            "Identify",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        builder.set_raw_body(options.text.clone(), "text/plain");
        self.service.request_json(&builder)
    }

    pub fn list_models(
        &self,
        options: &ListModelsOptions,
    ) -> Result<DetailedResponse<TranslationModels>> {
        let mut builder = self.request(
            Method::GET,
            "/v3/models",
            &[],
            "ListModels",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        builder
            .add_query_opt("source", options.source.as_ref())
            .add_query_opt("target", options.target.as_ref())
            .add_query_opt("default", options.default_models);
        self.service.request_json(&builder)
    }

    /// Train a custom model from a forced glossary and/or parallel corpus
    pub fn create_model(
        &self,
        options: &CreateModelOptions,
    ) -> Result<DetailedResponse<TranslationModel>> {
        require("base_model_id", &options.base_model_id)?;
        if options.forced_glossary.is_none() && options.parallel_corpus.is_none() {
            return Err(WatsonError::validation(
                "at least one of forced_glossary or parallel_corpus must be supplied",
            ));
        }

        let mut builder = self.request(
            Method::POST,
            "/v3/models",
            &[],
            "CreateModel",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        builder
            .add_query("base_model_id", &options.base_model_id)
            .add_query_opt("name", options.name.as_ref());

        let mut parts: Vec<FormPart> = Vec::new();
        if let Some(ref glossary) = options.forced_glossary {
            parts.push(glossary.to_part("forced_glossary", "glossary.tmx"));
        }
        if let Some(ref corpus) = options.parallel_corpus {
            parts.push(corpus.to_part("parallel_corpus", "corpus.tmx"));
        }
        builder.set_multipart_body(parts);

        self.service.request_json(&builder)
    }

    pub fn delete_model(
        &self,
        options: &DeleteModelOptions,
    ) -> Result<DetailedResponse<DeleteModelResult>> {
        require("model_id", &options.model_id)?;
        let mut builder = self.request(
            Method::DELETE,
            "/v3/models/{model_id}",
            &[("model_id", &options.model_id)],
            "DeleteModel",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        self.service.request_json(&builder)
    }

    pub fn get_model(
        &self,
        options: &GetModelOptions,
    ) -> Result<DetailedResponse<TranslationModel>> {
        require("model_id", &options.model_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v3/models/{model_id}",
            &[("model_id", &options.model_id)],
            "GetModel",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        self.service.request_json(&builder)
    }

    pub fn list_documents(
        &self,
        options: &ListDocumentsOptions,
    ) -> Result<DetailedResponse<DocumentList>> {
        let mut builder = self.request(
            Method::GET,
            "/v3/documents",
            &[],
            "ListDocuments",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        self.service.request_json(&builder)
    }

    /// Submit a document for asynchronous translation
    pub fn translate_document(
        &self,
        options: &TranslateDocumentOptions,
    ) -> Result<DetailedResponse<DocumentStatus>> {
        let filename = options
            .file
            .filename
            .as_deref()
            .ok_or_else(|| WatsonError::validation("file must have a filename"))?;
        require("filename", filename)?;

        let mut builder = self.request(
            Method::POST,
            "/v3/documents",
            &[],
            "TranslateDocument",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");

        let mut parts = vec![options.file.to_part("file", filename)];
        for (name, value) in [
            ("model_id", &options.model_id),
            ("source", &options.source),
            ("target", &options.target),
            ("document_id", &options.document_id),
        ] {
            if let Some(v) = value {
                parts.push(FormPart::text(name, v.clone()));
            }
        }
        builder.set_multipart_body(parts);

        self.service.request_json(&builder)
    }

    pub fn get_document_status(
        &self,
        options: &GetDocumentStatusOptions,
    ) -> Result<DetailedResponse<DocumentStatus>> {
        require("document_id", &options.document_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v3/documents/{document_id}",
            &[("document_id", &options.document_id)],
            "GetDocumentStatus",
            &options.headers,
        )?;
        builder.add_header("Accept", "application/json");
        self.service.request_json(&builder)
    }

    pub fn delete_document(
        &self,
        options: &DeleteDocumentOptions,
    ) -> Result<DetailedResponse<()>> {
        require("document_id", &options.document_id)?;
        let builder = self.request(
            Method::DELETE,
            "/v3/documents/{document_id}",
            &[("document_id", &options.document_id)],
            "DeleteDocument",
            &options.headers,
        )?;
        self.service.request_empty(&builder)
    }

    /// Download a translated document as raw bytes
    pub fn get_translated_document(
        &self,
        options: &GetTranslatedDocumentOptions,
    ) -> Result<DetailedResponse<Vec<u8>>> {
        require("document_id", &options.document_id)?;
        let mut builder = self.request(
            Method::GET,
            "/v3/documents/{document_id}/translated_document",
            &[("document_id", &options.document_id)],
            "GetTranslatedDocument",
            &options.headers,
        )?;
        builder.add_header_opt("Accept", options.accept.as_ref());
        self.service.request_bytes(&builder)
    }
}
