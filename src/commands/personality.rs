// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Personality Insights commands

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{print_json, Globals};
use watson::personality_insights_v3::{
    PersonalityInsightsV3, ProfileContent, ProfileOptions, Trait, DEFAULT_VERSION,
};

#[derive(Tabled)]
struct TraitRow {
    #[tabled(rename = "Trait")]
    name: String,
    #[tabled(rename = "Percentile")]
    percentile: String,
}

fn trait_rows(traits: &[Trait]) -> Vec<TraitRow> {
    traits
        .iter()
        .map(|t| TraitRow {
            name: t.name.clone(),
            percentile: format!("{:.0}%", t.percentile * 100.0),
        })
        .collect()
}

/// Build a profile from the text in `file`
pub fn build_profile(
    globals: &Globals,
    file: &Path,
    language: Option<String>,
    consumption_preferences: bool,
    raw_scores: bool,
    csv: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut insights = PersonalityInsightsV3::from_environment(globals.version(DEFAULT_VERSION))?;
    globals.configure(insights.service_mut())?;

    let mut options = ProfileOptions::new(ProfileContent::Text(text))
        .consumption_preferences(consumption_preferences)
        .raw_scores(raw_scores);
    options.content_language = language;

    if csv {
        let csv = insights
            .profile_as_csv(&options.csv_headers(true))?
            .into_result();
        print!("{}", csv);
        return Ok(());
    }

    let profile = insights.profile(&options)?.into_result();
    if globals.json {
        return print_json(&profile);
    }

    println!(
        "{} {} words ({})",
        "Profile:".bold(),
        profile.word_count,
        profile.processed_language
    );
    if let Some(ref message) = profile.word_count_message {
        println!("{} {}", "Note:".yellow(), message);
    }

    for (title, traits) in [
        ("Personality", &profile.personality),
        ("Needs", &profile.needs),
        ("Values", &profile.values),
    ] {
        if traits.is_empty() {
            continue;
        }
        println!();
        println!("{}", title.bold());
        println!("{}", Table::new(trait_rows(traits)).with(TableStyle::ascii_rounded()));
    }

    for warning in &profile.warnings {
        println!("{} {}", "Warning:".yellow(), warning.message);
    }
    Ok(())
}
