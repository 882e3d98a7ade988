// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Tone Analyzer commands

use anyhow::Result;
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{print_json, Globals};
use watson::tone_analyzer_v3::{ToneAnalyzerV3, ToneContent, ToneOptions, ToneScore, DEFAULT_VERSION};

#[derive(Tabled)]
struct ToneRow {
    #[tabled(rename = "Tone")]
    tone: String,
    #[tabled(rename = "Score")]
    score: String,
}

fn score_rows(tones: &[ToneScore]) -> Vec<ToneRow> {
    tones
        .iter()
        .map(|t| ToneRow {
            tone: t.tone_name.clone(),
            score: format!("{:.3}", t.score),
        })
        .collect()
}

/// Analyze the tone of `text` and print document and sentence tones
pub fn analyze_tone(globals: &Globals, text: &str, html: bool, no_sentences: bool) -> Result<()> {
    let mut analyzer = ToneAnalyzerV3::from_environment(globals.version(DEFAULT_VERSION))?;
    globals.configure(analyzer.service_mut())?;

    let content = if html {
        ToneContent::Html(text.to_string())
    } else {
        ToneContent::Text(text.to_string())
    };
    let mut options = ToneOptions::new(content);
    if no_sentences {
        options = options.sentences(false);
    }

    let analysis = analyzer.tone(&options)?.into_result();
    if globals.json {
        return print_json(&analysis);
    }

    println!("{}", "Document tone".bold());
    let tones = analysis.document_tone.tones.unwrap_or_default();
    if tones.is_empty() {
        println!("  {}", "(no tone detected)".dimmed());
    } else {
        println!("{}", Table::new(score_rows(&tones)).with(TableStyle::ascii_rounded()));
    }
    if let Some(ref warning) = analysis.document_tone.warning {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    for sentence in analysis.sentences_tone.unwrap_or_default() {
        let tones = sentence.tones.unwrap_or_default();
        if tones.is_empty() {
            continue;
        }
        println!();
        println!("{} {}", format!("[{}]", sentence.sentence_id).cyan(), sentence.text);
        for tone in tones {
            println!("  {:<12} {:.3}", tone.tone_name, tone.score);
        }
    }
    Ok(())
}
