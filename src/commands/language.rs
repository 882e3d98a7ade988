// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Language Translator commands

use anyhow::Result;
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{print_json, Globals};
use watson::language_translator_v3::{
    IdentifyOptions, LanguageTranslatorV3, ListIdentifiableLanguagesOptions, ListLanguagesOptions,
    TranslateOptions, DEFAULT_VERSION,
};

#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Target")]
    target: String,
}

#[derive(Tabled)]
struct IdentifiableRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct IdentifiedRow {
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

fn translator(globals: &Globals) -> Result<LanguageTranslatorV3> {
    let mut translator = LanguageTranslatorV3::from_environment(globals.version(DEFAULT_VERSION))?;
    globals.configure(translator.service_mut())?;
    Ok(translator)
}

fn yes_no(flag: Option<bool>) -> String {
    if flag.unwrap_or(false) {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Translate each text argument
pub fn translate_text(
    globals: &Globals,
    text: Vec<String>,
    model: Option<String>,
    source: Option<String>,
    target: Option<String>,
) -> Result<()> {
    if model.is_none() && target.is_none() {
        return Err(anyhow::anyhow!("Specify --model or --target"));
    }

    let mut options = TranslateOptions::new(text.clone());
    options.model_id = model;
    options.source = source;
    options.target = target;

    let result = translator(globals)?.translate(&options)?.into_result();
    if globals.json {
        return print_json(&result);
    }

    for (original, translation) in text.iter().zip(&result.translations) {
        println!("{} {}", original.dimmed(), "->".dimmed());
        println!("  {}", translation.translation.green());
    }
    if let Some(ref detected) = result.detected_language {
        println!();
        println!(
            "Detected language: {} ({:.0}%)",
            detected.bold(),
            result.detected_language_confidence.unwrap_or(0.0) * 100.0
        );
    }
    log::debug!(
        "Translated {} words / {} characters",
        result.word_count,
        result.character_count
    );
    Ok(())
}

/// Identify the language of `text`
pub fn identify_language(globals: &Globals, text: &str, limit: usize) -> Result<()> {
    let result = translator(globals)?
        .identify(&IdentifyOptions::new(text))?
        .into_result();
    if globals.json {
        return print_json(&result);
    }

    let Some(best) = result.languages.first() else {
        println!("No language identified.");
        return Ok(());
    };
    println!(
        "{} {} ({:.1}%)",
        "Language:".bold(),
        best.language.green(),
        best.confidence * 100.0
    );

    let rows: Vec<IdentifiedRow> = result
        .languages
        .iter()
        .take(limit)
        .map(|l| IdentifiedRow {
            language: l.language.clone(),
            confidence: format!("{:.4}", l.confidence),
        })
        .collect();
    println!();
    println!("{}", Table::new(rows).with(TableStyle::ascii_rounded()));
    Ok(())
}

/// List translatable or identifiable languages
pub fn list_languages(globals: &Globals, identifiable: bool) -> Result<()> {
    let translator = translator(globals)?;

    if identifiable {
        let result = translator
            .list_identifiable_languages(&ListIdentifiableLanguagesOptions::default())?
            .into_result();
        if globals.json {
            return print_json(&result);
        }
        let rows: Vec<IdentifiableRow> = result
            .languages
            .iter()
            .map(|l| IdentifiableRow {
                code: l.language.clone(),
                name: l.name.clone(),
            })
            .collect();
        println!("{}", Table::new(rows).with(TableStyle::ascii_rounded()));
        println!("\nTotal languages: {}", result.languages.len());
        return Ok(());
    }

    let result = translator
        .list_languages(&ListLanguagesOptions::default())?
        .into_result();
    if globals.json {
        return print_json(&result);
    }

    let rows: Vec<LanguageRow> = result
        .languages
        .iter()
        .map(|l| LanguageRow {
            code: l.language.clone().unwrap_or_default(),
            name: l.language_name.clone().unwrap_or_default(),
            source: yes_no(l.supported_as_source),
            target: yes_no(l.supported_as_target),
        })
        .collect();
    println!("{}", Table::new(rows).with(TableStyle::ascii_rounded()));
    println!("\nTotal languages: {}", result.languages.len());
    Ok(())
}
