// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Assistant commands

use anyhow::Result;
use colored::*;

use super::{print_json, Globals};
use watson::assistant_v2::{
    AssistantV2, MessageInput, MessageOptions, MessageOutput, MessageStatelessOptions,
    RuntimeResponseGeneric, DEFAULT_VERSION,
};

fn print_output(output: &MessageOutput) {
    for generic in &output.generic {
        match generic {
            RuntimeResponseGeneric::Text { text, .. } => println!("{}", text.green()),
            RuntimeResponseGeneric::Image { source, title, .. } => println!(
                "{} {}",
                format!("[image: {}]", title.as_deref().unwrap_or("untitled")).cyan(),
                source
            ),
            RuntimeResponseGeneric::OptionList { title, options, .. } => {
                println!("{}", title.bold());
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option.label);
                }
            }
            RuntimeResponseGeneric::Suggestion { title, suggestions } => {
                println!("{}", title.bold());
                for suggestion in suggestions {
                    println!("  - {}", suggestion.label);
                }
            }
            RuntimeResponseGeneric::ConnectToAgent {
                message_to_human_agent,
                ..
            } => println!(
                "{} {}",
                "[transfer to agent]".yellow(),
                message_to_human_agent.as_deref().unwrap_or("")
            ),
            RuntimeResponseGeneric::Search { header, primary_results, .. } => {
                println!("{}", header.bold());
                for result in primary_results {
                    println!("  - {}", result.title.as_deref().unwrap_or(&result.id));
                }
            }
            RuntimeResponseGeneric::Pause { .. } => {}
            other => log::debug!("Skipping response: {:?}", other),
        }
    }

    if let Some(intent) = output.intents.first() {
        println!();
        println!(
            "{} #{} ({:.2})",
            "Intent:".dimmed(),
            intent.intent,
            intent.confidence.unwrap_or(0.0)
        );
    }
    for entity in &output.entities {
        println!("{} @{}:{}", "Entity:".dimmed(), entity.entity, entity.value);
    }
}

/// Send `text` to an assistant, inside `session` when one is given
pub fn send_message(
    globals: &Globals,
    assistant_id: &str,
    text: &str,
    session: Option<&str>,
    user_id: Option<String>,
) -> Result<()> {
    let mut assistant = AssistantV2::from_environment(globals.version(DEFAULT_VERSION))?;
    globals.configure(assistant.service_mut())?;

    let input = MessageInput::text(text);
    match session {
        Some(session_id) => {
            let mut options = MessageOptions::new(assistant_id, session_id).input(input);
            options.user_id = user_id;
            let response = assistant.message(&options)?.into_result();
            if globals.json {
                return print_json(&response);
            }
            print_output(&response.output);
        }
        None => {
            let mut options = MessageStatelessOptions::new(assistant_id).input(input);
            options.user_id = user_id;
            let response = assistant.message_stateless(&options)?.into_result();
            if globals.json {
                return print_json(&response);
            }
            print_output(&response.output);
        }
    }
    Ok(())
}
