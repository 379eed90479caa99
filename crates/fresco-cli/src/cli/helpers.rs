use super::CliError;
use anyhow::Context;
use fresco_core::categorize::Bucket;
use fresco_core::domain::FrescoError;
use fresco_core::session::ConfigError;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` when set.
pub(super) fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(super) fn read_text(path: &Path) -> Result<String, CliError> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))?;
    Ok(text)
}

pub(super) fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    fs::write(path, text)
        .with_context(|| format!("failed to write output file '{}'", path.display()))?;
    Ok(())
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to serialize JSON output")?;
    println!("{rendered}");
    Ok(())
}

/// Splits a `name=value` override. The value may be empty to clear.
pub(super) fn parse_assignment(raw: &str) -> Result<(&str, &str), CliError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(CliError::Usage(format!(
            "invalid --set '{raw}'; expected name=value"
        ))),
    }
}

/// Splits a `name:bucket` move request.
pub(super) fn parse_move(raw: &str) -> Result<(&str, Bucket), CliError> {
    let Some((name, bucket)) = raw.split_once(':') else {
        return Err(CliError::Usage(format!(
            "invalid --move '{raw}'; expected name:general or name:advanced"
        )));
    };
    let bucket = bucket.parse().map_err(CliError::Compute)?;
    Ok((name.trim(), bucket))
}

pub(super) fn config_error(error: ConfigError) -> CliError {
    let message = error.to_string();
    CliError::Compute(match error {
        ConfigError::Read { .. } => FrescoError::io_system("IO.CONFIG_READ", message),
        ConfigError::Parse { .. } => FrescoError::input_validation("INPUT.CONFIG_PARSE", message),
    })
}
