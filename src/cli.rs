// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI argument definitions using clap derive macros

use clap::{Parser, Subcommand};

/// Watson - call IBM Watson services from the command line
#[derive(Parser)]
#[command(name = "watson")]
#[command(author = "Nervosys")]
#[command(version)]
#[command(about = "Call IBM Watson services from the command line", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the raw JSON result instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    /// API version date (defaults to the latest version known to this client)
    #[arg(long, global = true, env = "WATSON_API_VERSION")]
    pub api_version: Option<String>,

    /// Override the service URL from the configuration
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    // ============================================================================
    // Language Translator
    // ============================================================================
    /// Translate text
    Translate {
        /// Text to translate (each argument is translated separately)
        #[arg(required = true)]
        text: Vec<String>,

        /// Translation model ID, e.g. en-es
        #[arg(short, long)]
        model: Option<String>,

        /// Source language code
        #[arg(short, long)]
        source: Option<String>,

        /// Target language code
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Identify the language of text
    Identify {
        /// Text to identify
        text: String,

        /// Number of candidate languages to show
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,
    },

    /// List supported languages
    Languages {
        /// List identifiable languages instead of translatable ones
        #[arg(long)]
        identifiable: bool,
    },

    // ============================================================================
    // Tone Analyzer / Personality Insights
    // ============================================================================
    /// Analyze the tone of text
    Tone {
        /// Text to analyze
        text: String,

        /// Treat the text as HTML
        #[arg(long)]
        html: bool,

        /// Skip sentence-level analysis
        #[arg(long)]
        no_sentences: bool,
    },

    /// Build a personality profile from a text file
    Profile {
        /// File containing at least a few hundred words by one author
        file: std::path::PathBuf,

        /// Language of the content (ar, en, es, ja, ko)
        #[arg(long)]
        language: Option<String>,

        /// Include consumption preferences
        #[arg(long)]
        consumption_preferences: bool,

        /// Include raw scores
        #[arg(long)]
        raw_scores: bool,

        /// Print the profile as CSV
        #[arg(long)]
        csv: bool,
    },

    // ============================================================================
    // Assistant
    // ============================================================================
    /// Talk to a Watson Assistant
    Assistant {
        #[command(subcommand)]
        command: AssistantCommands,
    },

    // ============================================================================
    // Discovery
    // ============================================================================
    /// Search Discovery projects
    Discovery {
        #[command(subcommand)]
        command: DiscoveryCommands,
    },

    // ============================================================================
    // Config
    // ============================================================================
    /// Inspect service configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum AssistantCommands {
    /// Send a message and print the reply
    Message {
        /// Assistant ID
        assistant_id: String,

        /// User input
        text: String,

        /// Existing session ID; without it the message is sent statelessly
        #[arg(long)]
        session: Option<String>,

        /// User ID for billing and data deletion
        #[arg(long)]
        user_id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DiscoveryCommands {
    /// Run a natural language query against a project
    Query {
        /// Project ID
        project_id: String,

        /// Natural language query
        query: String,

        /// Restrict to a collection (repeatable)
        #[arg(short, long = "collection")]
        collections: Vec<String>,

        /// Discovery Query Language filter
        #[arg(short, long)]
        filter: Option<String>,

        /// Number of results
        #[arg(short = 'n', long, default_value = "10")]
        count: i64,
    },

    /// List projects
    Projects,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the resolved properties of a service (secrets masked)
    Show {
        /// Service name (conversation, discovery, language_translator, ...)
        service: String,
    },
}
