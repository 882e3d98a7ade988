// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Watson CLI - Main entry point
//!
//! Calls IBM Watson services using credentials from the environment or an
//! `ibm-credentials.env` file.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{AssistantCommands, Cli, Commands, ConfigCommands, DiscoveryCommands};
use commands::Globals;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let globals = Globals {
        json: cli.json,
        api_version: cli.api_version,
        url: cli.url,
    };

    match cli.command {
        // ====================================================================
        // Language Translator
        // ====================================================================
        Commands::Translate {
            text,
            model,
            source,
            target,
        } => commands::translate_text(&globals, text, model, source, target),
        Commands::Identify { text, limit } => commands::identify_language(&globals, &text, limit),
        Commands::Languages { identifiable } => commands::list_languages(&globals, identifiable),

        // ====================================================================
        // Tone Analyzer / Personality Insights
        // ====================================================================
        Commands::Tone {
            text,
            html,
            no_sentences,
        } => commands::analyze_tone(&globals, &text, html, no_sentences),
        Commands::Profile {
            file,
            language,
            consumption_preferences,
            raw_scores,
            csv,
        } => commands::build_profile(
            &globals,
            &file,
            language,
            consumption_preferences,
            raw_scores,
            csv,
        ),

        // ====================================================================
        // Assistant
        // ====================================================================
        Commands::Assistant { command } => match command {
            AssistantCommands::Message {
                assistant_id,
                text,
                session,
                user_id,
            } => commands::send_message(
                &globals,
                &assistant_id,
                &text,
                session.as_deref(),
                user_id,
            ),
        },

        // ====================================================================
        // Discovery
        // ====================================================================
        Commands::Discovery { command } => match command {
            DiscoveryCommands::Query {
                project_id,
                query,
                collections,
                filter,
                count,
            } => commands::query_project(&globals, &project_id, &query, collections, filter, count),
            DiscoveryCommands::Projects => commands::list_projects(&globals),
        },

        // ====================================================================
        // Config
        // ====================================================================
        Commands::Config { command } => match command {
            ConfigCommands::Show { service } => commands::show_config(&globals, &service),
        },
    }
}
