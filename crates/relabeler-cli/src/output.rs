//! Output renderers and formatting helpers for CLI commands.

use std::collections::BTreeMap;

use anyhow::anyhow;
use relabeler_labels::FieldKind;
use serde::Serialize;
use serde_json::{Value, json};

use crate::cli::OutputFormat;
use crate::context::{CliError, CliResult};

/// One settings field with its effective value.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FieldRow {
    pub(crate) name: String,
    pub(crate) kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<Value>,
}

pub(crate) fn render_fields(rows: &[FieldRow], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(rows),
        OutputFormat::Table => {
            let mut text = format!("{:<34} {:<14} {:<24} VALUE\n", "NAME", "KIND", "LABEL");
            for row in rows {
                let value = row.value.as_ref().map(format_value).unwrap_or_default();
                text.push_str(&format!(
                    "{:<34} {:<14} {:<24} {}\n",
                    row.name,
                    kind_to_str(row.kind),
                    row.label.unwrap_or("-"),
                    value
                ));
            }
            Ok(text)
        }
    }
}

pub(crate) fn render_value(key: &str, value: &Value, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "key": key, "value": value })),
        OutputFormat::Table => Ok(format!("{}\n", format_value(value))),
    }
}

pub(crate) fn render_options(
    options: &BTreeMap<String, Value>,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(options),
        OutputFormat::Table => {
            if options.is_empty() {
                return Ok("no overrides stored\n".to_string());
            }
            let mut text = format!("{:<34} VALUE\n", "KEY");
            for (key, value) in options {
                text.push_str(&format!("{key:<34} {}\n", format_value(value)));
            }
            Ok(text)
        }
    }
}

pub(crate) const fn kind_to_str(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::CheckboxBool => "checkbox",
        FieldKind::Html => "html",
    }
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    let mut text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    text.push('\n');
    Ok(text)
}
