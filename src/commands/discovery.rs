// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Discovery commands

use anyhow::Result;
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{print_json, Globals};
use watson::discovery_v2::{
    DiscoveryV2, ListProjectsOptions, QueryLargePassages, QueryOptions, QueryResult,
    DEFAULT_VERSION,
};

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Project ID")]
    project_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Collections")]
    collections: i64,
}

fn discovery(globals: &Globals) -> Result<DiscoveryV2> {
    let mut discovery = DiscoveryV2::from_environment(globals.version(DEFAULT_VERSION))?;
    globals.configure(discovery.service_mut())?;
    Ok(discovery)
}

/// Best-effort title of a result document
fn result_title(result: &QueryResult) -> String {
    ["title", "extracted_metadata"]
        .iter()
        .find_map(|key| match result.document.get(*key) {
            Some(serde_json::Value::String(title)) => Some(title.clone()),
            Some(serde_json::Value::Object(meta)) => meta
                .get("title")
                .or_else(|| meta.get("filename"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| result.document_id.clone())
}

/// Run a natural language query and print the top results
pub fn query_project(
    globals: &Globals,
    project_id: &str,
    query: &str,
    collections: Vec<String>,
    filter: Option<String>,
    count: i64,
) -> Result<()> {
    let mut options = QueryOptions::new(project_id)
        .natural_language_query(query)
        .count(count)
        .passages(QueryLargePassages {
            enabled: Some(true),
            per_document: Some(true),
            max_per_document: Some(1),
            ..Default::default()
        });
    if !collections.is_empty() {
        options.collection_ids = Some(collections);
    }
    options.filter = filter;

    let response = discovery(globals)?.query(&options)?.into_result();
    if globals.json {
        return print_json(&response);
    }

    println!(
        "{} {}",
        "Matching results:".bold(),
        response.matching_results.unwrap_or(0)
    );
    for (i, result) in response.results.iter().enumerate() {
        let confidence = result.result_metadata.confidence.unwrap_or(0.0);
        println!();
        println!(
            "{} {} {}",
            format!("{}.", i + 1).bold(),
            result_title(result).green(),
            format!("({:.2})", confidence).dimmed()
        );
        let passage = result
            .document_passages
            .as_ref()
            .and_then(|p| p.first())
            .and_then(|p| p.passage_text.as_deref());
        if let Some(text) = passage {
            println!("   {}", text.replace("<em>", "").replace("</em>", ""));
        }
    }

    if let Some(ref suggestion) = response.suggested_query {
        println!();
        println!("{} {}", "Did you mean:".yellow(), suggestion);
    }
    Ok(())
}

/// List the projects of the instance
pub fn list_projects(globals: &Globals) -> Result<()> {
    let response = discovery(globals)?
        .list_projects(&ListProjectsOptions::default())?
        .into_result();
    if globals.json {
        return print_json(&response);
    }

    if response.projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    let rows: Vec<ProjectRow> = response
        .projects
        .iter()
        .map(|p| ProjectRow {
            project_id: p.project_id.clone().unwrap_or_default(),
            name: p.name.clone().unwrap_or_default(),
            project_type: p.project_type.clone().unwrap_or_default(),
            collections: p.collection_count.unwrap_or(0),
        })
        .collect();
    println!("{}", Table::new(rows).with(TableStyle::ascii_rounded()));
    println!("\nTotal projects: {}", response.projects.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(document: serde_json::Value) -> QueryResult {
        let mut value = document;
        value["document_id"] = "doc-1".into();
        value["result_metadata"] = serde_json::json!({"collection_id": "c1"});
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_result_title_from_field() {
        assert_eq!(
            result_title(&result(serde_json::json!({"title": "Annual report"}))),
            "Annual report"
        );
    }

    #[test]
    fn test_result_title_from_metadata() {
        let r = result(serde_json::json!({"extracted_metadata": {"filename": "a.pdf"}}));
        assert_eq!(result_title(&r), "a.pdf");
    }

    #[test]
    fn test_result_title_fallback() {
        assert_eq!(result_title(&result(serde_json::json!({}))), "doc-1");
    }
}
