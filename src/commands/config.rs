// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Configuration commands

use anyhow::Result;
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{print_json, Globals};
use watson::core::config::{
    credentials_file_path, env_prefix, get_service_properties, PROP_APIKEY, PROP_BEARER_TOKEN,
    PROP_CLIENT_SECRET, PROP_PASSWORD,
};

const SECRET_PROPERTIES: &[&str] = &[
    PROP_APIKEY,
    PROP_PASSWORD,
    PROP_BEARER_TOKEN,
    PROP_CLIENT_SECRET,
];

#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "Property")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Keep the last four characters of a secret
pub(crate) fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

/// Show the properties resolved for `service`
pub fn show_config(globals: &Globals, service: &str) -> Result<()> {
    let props = get_service_properties(service)?;

    let mut rows: Vec<PropertyRow> = props
        .iter()
        .map(|(name, value)| PropertyRow {
            name: format!("{}_{}", env_prefix(service), name),
            value: if SECRET_PROPERTIES.contains(&name.as_str()) {
                mask(value)
            } else {
                value.clone()
            },
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    if globals.json {
        let masked: serde_json::Map<String, serde_json::Value> = rows
            .iter()
            .map(|r| (r.name.clone(), serde_json::Value::String(r.value.clone())))
            .collect();
        return print_json(&masked);
    }

    match credentials_file_path() {
        Some(path) => println!("{} {}", "Credentials file:".bold(), path.display()),
        None => println!("{} {}", "Credentials file:".bold(), "(none)".dimmed()),
    }

    if rows.is_empty() {
        println!(
            "No properties found for {} (expected {}_* variables)",
            service.yellow(),
            env_prefix(service)
        );
        return Ok(());
    }

    println!("{}", Table::new(rows).with(TableStyle::ascii_rounded()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("abcdefgh1234"), "****1234");
        assert_eq!(mask("abc"), "****");
    }
}
