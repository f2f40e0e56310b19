//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const CLI_SCHEMA_VERSION: &str = "smbios-keygen.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// One line of a field/value listing.
#[derive(Debug, Clone, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,

    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(data).with(Style::rounded()).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = format_json(data, "[]");
            println!("{}", json);
        }
    }
}

/// Print a single item in the specified format.
///
/// Tables render `rows`; JSON renders `data`.
pub fn print_single<T: Serialize>(data: &T, rows: &[FieldRow], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            let json = format_json(data, "{}");
            println!("{}", json);
        }
    }
}

/// Print a bare value, or the value wrapped as JSON.
pub fn print_value<T: Serialize>(value: &str, data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", value),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}

pub fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let mapped = to_camel_case_keys(value);
    let wrapped = wrap_with_schema(mapped);
    let sorted = sort_json_value(wrapped);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

fn sort_json_value(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(sort_json_value).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut mapped = serde_json::Map::new();
            for (key, value) in pairs {
                mapped.insert(key, sort_json_value(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

fn to_camel_case_keys(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(to_camel_case_keys).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut mapped = serde_json::Map::new();
            for (key, value) in entries {
                mapped.insert(snake_to_lower_camel(&key), to_camel_case_keys(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

fn snake_to_lower_camel(input: &str) -> String {
    let mut parts = input.split('_');
    let Some(first) = parts.next() else {
        return String::new();
    };
    let mut out = String::from(first);
    for part in parts {
        if part.is_empty() {
            continue;
        }
        let mut chars = part.chars();
        if let Some(first_char) = chars.next() {
            out.push(first_char.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_json_wraps_and_sorts() {
        let data = serde_json::json!({ "model_index": 3, "country": "C02" });
        let json = format_json(&data, "{}");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "schemaVersion": "smbios-keygen.v1",
                "data": { "country": "C02", "modelIndex": 3 }
            })
        );
        // Keys come out sorted.
        assert!(json.find("\"data\"").unwrap() < json.find("\"schemaVersion\"").unwrap());
    }

    #[test]
    fn snake_to_lower_camel_converts() {
        assert_eq!(snake_to_lower_camel("decoded_year"), "decodedYear");
        assert_eq!(snake_to_lower_camel("week"), "week");
        assert_eq!(snake_to_lower_camel("a__b"), "aB");
    }

    #[test]
    fn output_format_parses() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Table);
    }
}
