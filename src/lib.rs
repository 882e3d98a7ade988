// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Watson SDK - Library
//!
//! Blocking clients for the IBM Watson REST services.
//!
//! ## Supported Services
//!
//! - **Assistant v1** - workspaces, intents, entities, dialog nodes, logs
//! - **Assistant v2** - sessions and stateful or stateless messages
//! - **Discovery v2** - projects, collections, documents, queries, enrichments
//! - **Language Translator v3** - translation, language identification, custom models
//! - **Tone Analyzer v3** - document and customer-engagement tone
//! - **Personality Insights v3** - personality profiles from text
//!
//! Every operation takes an options struct and returns a
//! [`DetailedResponse`](core::DetailedResponse) carrying the status code,
//! the response headers and the decoded result:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use watson::core::{IamAuthenticator, ServiceOptions};
//! use watson::tone_analyzer_v3::{ToneAnalyzerV3, ToneContent, ToneOptions};
//!
//! let auth = IamAuthenticator::new("my-api-key")?;
//! let tone = ToneAnalyzerV3::new("2017-09-21", ServiceOptions::new(Arc::new(auth)))?;
//! let analysis = tone
//!     .tone(&ToneOptions::new(ToneContent::Text("I am happy".into())))?
//!     .into_result();
//! ```
//!
//! Credentials can also come from `<SERVICE>_*` environment variables or an
//! `ibm-credentials.env` file; see [`core::config`].

#[macro_use]
mod macros;

pub mod assistant_v1;
pub mod assistant_v2;
pub mod core;
pub mod discovery_v2;
pub mod error;
pub mod language_translator_v3;
pub mod personality_insights_v3;
pub mod tone_analyzer_v3;

// Re-export commonly used items
pub use crate::core::{
    Authenticator, BaseService, DetailedResponse, FileInput, IamAuthenticator, ServiceOptions,
};
pub use error::{Result, WatsonError};
