use std::io::Write;

use relabeler_config::validate::parse_bool;
use relabeler_labels::REWRITE_VIEW_SLUGS;
use serde_json::Value;
use tracing::info;

use super::emit;
use crate::cli::OutputFormat;
use crate::context::{CliContext, CliError, CliResult, SettingKey};
use crate::output::{render_options, render_value};

pub(crate) fn handle_get(
    ctx: &CliContext,
    key: SettingKey,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    ctx.ensure_available(key)?;
    let value = match key {
        SettingKey::Label(label) => Value::String(ctx.resolver.resolve_default(label)),
        SettingKey::RewriteViewSlugs => Value::Bool(ctx.resolver.rewrite_view_slugs()),
    };
    emit(out, &render_value(key.as_str(), &value, format)?)
}

pub(crate) fn handle_set(ctx: &CliContext, key: SettingKey, raw: &str) -> CliResult<()> {
    ctx.ensure_available(key)?;
    match key {
        SettingKey::Label(label) => ctx.resolver.store_override(label, raw),
        SettingKey::RewriteViewSlugs => {
            let enabled = parse_bool(REWRITE_VIEW_SLUGS, raw)
                .map_err(|err| CliError::validation(err.to_string()))?;
            ctx.resolver.store_rewrite_view_slugs(enabled)
        }
    }
    .map_err(CliError::failure)?;
    info!(key = key.as_str(), "override stored");
    Ok(())
}

pub(crate) fn handle_unset(ctx: &CliContext, key: SettingKey) -> CliResult<()> {
    ctx.ensure_available(key)?;
    match key {
        SettingKey::Label(label) => ctx.resolver.remove_override(label),
        SettingKey::RewriteViewSlugs => ctx.resolver.remove_rewrite_view_slugs(),
    }
    .map_err(CliError::failure)?;
    info!(key = key.as_str(), "override removed");
    Ok(())
}

pub(crate) fn handle_list(
    ctx: &CliContext,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    emit(out, &render_options(&ctx.options().get_all_options(), format)?)
}
