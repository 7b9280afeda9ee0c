use std::io::Write;

use relabeler_labels::{FieldKind, settings_fields};
use serde_json::Value;

use super::emit;
use crate::cli::OutputFormat;
use crate::context::{CliContext, CliResult};
use crate::output::{FieldRow, render_fields};

pub(crate) fn handle_fields(
    ctx: &CliContext,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let rows: Vec<FieldRow> = settings_fields(ctx.capabilities)
        .into_iter()
        .map(|field| {
            let value = match (field.kind, field.label_key()) {
                (FieldKind::Text, Some(key)) => {
                    Some(Value::String(ctx.resolver.resolve_default(key)))
                }
                (FieldKind::CheckboxBool, _) => {
                    Some(Value::Bool(ctx.resolver.rewrite_view_slugs()))
                }
                _ => None,
            };
            FieldRow {
                name: field.name,
                kind: field.kind,
                label: field.label,
                value,
            }
        })
        .collect();
    emit(out, &render_fields(&rows, format)?)
}
