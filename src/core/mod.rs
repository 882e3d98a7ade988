// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Shared plumbing for all service clients: authentication, configuration,
//! request assembly and execution.

pub mod auth;
pub mod common;
pub mod config;
pub mod request;
pub mod service;

pub use auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator,
};
pub use config::{
    authenticator_from_environment, get_service_properties, HttpClientConfig, ServiceOptions,
};
pub use request::{FileInput, FormPart, JsonBody, RequestBuilder};
pub use service::{BaseService, DetailedResponse, RetryPolicy};
