use std::io::Write;

use relabeler_hooks::FilterBus;
use relabeler_labels::{LabelKey, register_hooks};
use serde_json::Value;

use super::emit;
use crate::cli::OutputFormat;
use crate::context::{CliContext, CliError, CliResult};
use crate::output::render_value;

/// Fire `key`'s hook through a freshly registered bus, as the host would.
pub(crate) fn handle_render(
    ctx: &CliContext,
    key: LabelKey,
    default: Option<&str>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    if !key.is_available(ctx.capabilities) {
        return Err(CliError::validation(format!(
            "{} is only available with --pro-views",
            key.as_str()
        )));
    }
    let mut bus = FilterBus::new();
    let _ = register_hooks(&ctx.resolver, &mut bus, ctx.capabilities, None);
    let rendered = bus.apply_text(key.hook_name(), default.unwrap_or(key.default_text()));
    emit(out, &render_value(key.as_str(), &Value::String(rendered), format)?)
}
