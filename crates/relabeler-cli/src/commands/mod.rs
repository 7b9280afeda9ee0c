//! Command handlers grouped by concern.

use std::io::Write;

use anyhow::Context;

use crate::context::{CliError, CliResult};

pub(crate) mod fields;
pub(crate) mod options;
pub(crate) mod render;

fn emit(out: &mut dyn Write, text: &str) -> CliResult<()> {
    out.write_all(text.as_bytes())
        .context("failed to write command output")
        .map_err(CliError::failure)
}
