// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Command implementations

mod assistant;
mod config;
mod discovery;
mod language;
mod personality;
mod tone;

pub use assistant::*;
pub use config::*;
pub use discovery::*;
pub use language::*;
pub use personality::*;
pub use tone::*;

use anyhow::Result;
use serde::Serialize;
use watson::BaseService;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub json: bool,
    pub api_version: Option<String>,
    pub url: Option<String>,
}

impl Globals {
    /// The requested API version, or the service default
    pub fn version(&self, default: &str) -> String {
        self.api_version
            .clone()
            .unwrap_or_else(|| default.to_string())
    }

    /// Apply command-line overrides to a configured service
    pub fn configure(&self, service: &mut BaseService) -> Result<()> {
        if let Some(ref url) = self.url {
            service.set_service_url(url)?;
        }
        Ok(())
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
