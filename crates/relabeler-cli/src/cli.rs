//! Argument parsing and command dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use relabeler_config::{RelabelerConfig, StoreLocation};
use relabeler_labels::LabelKey;

use crate::commands::fields::handle_fields;
use crate::commands::options::{handle_get, handle_list, handle_set, handle_unset};
use crate::commands::render::handle_render;
use crate::context::{CliContext, CliError, CliResult, SettingKey};

const DEFAULT_CLI_LOG_LEVEL: &str = "warn";

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(cli, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn execute(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let config = resolve_config(&cli, |name| std::env::var(name).ok())?;
    relabeler_app::init_logging(&config.logging).map_err(CliError::failure)?;
    tracing::debug!(command = command_label(&cli.command), "dispatching command");
    dispatch(cli, &config, out)
}

fn resolve_config<F>(cli: &Cli, lookup: F) -> CliResult<RelabelerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = RelabelerConfig::from_lookup(|name| {
        if name == relabeler_config::defaults::env::LOG_LEVEL {
            lookup(name).or_else(|| Some(DEFAULT_CLI_LOG_LEVEL.to_string()))
        } else {
            lookup(name)
        }
    })
    .map_err(|err| CliError::validation(err.to_string()))?;

    if let Some(path) = &cli.store {
        config.store = StoreLocation::JsonFile(path.clone());
    }
    if let Some(base_id) = &cli.base_id {
        config.base_id.clone_from(base_id);
    }
    if cli.pro_views {
        config.capabilities.pro_views = true;
    }
    Ok(config)
}

fn dispatch(cli: Cli, config: &RelabelerConfig, out: &mut dyn Write) -> CliResult<()> {
    let ctx = CliContext::open(config);
    match cli.command {
        Command::Fields => handle_fields(&ctx, cli.output, out),
        Command::Get(args) => handle_get(&ctx, args.key, cli.output, out),
        Command::Set(args) => handle_set(&ctx, args.key, &args.value),
        Command::Unset(args) => handle_unset(&ctx, args.key),
        Command::List => handle_list(&ctx, cli.output, out),
        Command::Render(args) => {
            handle_render(&ctx, args.key, args.default.as_deref(), cli.output, out)
        }
    }
}

#[derive(Parser)]
#[command(name = "relabeler", about = "Inspect and edit calendar label overrides")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path of the JSON settings document (defaults to RELABELER_STORE_PATH)"
    )]
    store: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Plugin identifier the options prefix derives from"
    )]
    base_id: Option<String>,
    #[arg(long, global = true, help = "Treat the companion views plugin as active")]
    pro_views: bool,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List settings fields with their effective values.
    Fields,
    /// Print the effective value of a setting.
    Get(KeyArgs),
    /// Store an override.
    Set(SetArgs),
    /// Remove an override.
    Unset(KeyArgs),
    /// List every stored option under the prefix.
    List,
    /// Fire a label's hook and print the rendered text.
    Render(RenderArgs),
}

#[derive(Args)]
struct KeyArgs {
    key: SettingKey,
}

#[derive(Args)]
struct SetArgs {
    key: SettingKey,
    value: String,
}

#[derive(Args)]
struct RenderArgs {
    key: LabelKey,
    #[arg(long, help = "Host default text (defaults to the built-in label)")]
    default: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Fields => "fields",
        Command::Get(_) => "get",
        Command::Set(_) => "set",
        Command::Unset(_) => "unset",
        Command::List => "list",
        Command::Render(_) => "render",
    }
}
