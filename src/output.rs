//! Result rendering
//!
//! Commands return plain `serde_json::Value` payloads; formatting is
//! decided once, here, from the global `--output` option. JSON output is
//! pretty-printed for piping into other tools; text output renders objects
//! as aligned key/value lines for reading in the terminal.

use clap::ValueEnum;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Renders a command result in the requested format.
pub fn render(format: OutputFormat, value: &Value) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        OutputFormat::Text => render_text(value),
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n\n"),
        Value::Object(map) => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            map.iter()
                .map(|(key, val)| format!("{:<width$}: {}", key, render_scalar(val)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        other => other.to_string(),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        nested @ (Value::Object(_) | Value::Array(_)) => nested.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_output_is_pretty_printed() {
        let value = json!({"Title": "Team Site"});
        let rendered = render(OutputFormat::Json, &value);
        assert!(rendered.contains("\"Title\": \"Team Site\""));
    }

    #[test]
    fn test_text_output_aligns_keys() {
        let value = json!({"Id": "abc", "Title": "Team Site"});
        let rendered = render(OutputFormat::Text, &value);
        assert_eq!(rendered, "Id   : abc\nTitle: Team Site");
    }

    #[test]
    fn test_text_output_for_null_is_empty() {
        assert_eq!(render(OutputFormat::Text, &Value::Null), "");
    }
}
