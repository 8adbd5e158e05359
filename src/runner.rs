use crate::config::ReporterConfig;
use crate::core::ImageMetadata;
use crate::utils::image::read_metadata;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Prefix of the success line
pub const SUCCESS_LABEL: &str = "Icon Metadata";
/// Prefix of the failure line
pub const FAILURE_LABEL: &str = "Error reading icon metadata";

/// Main entry point in CLI mode.
///
/// Reads the configured icon header once and prints one line: the metadata on
/// stdout, or the failure on stderr. A failed read is reported, not returned.
pub fn run(config: ReporterConfig) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(&config, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(())
}

/// Same as [`run`] with explicit output streams.
///
/// Returns the metadata when the read succeeded. The `Err` case is reserved
/// for failures writing to the streams themselves.
pub fn run_with<O: Write, E: Write>(
    config: &ReporterConfig,
    out: &mut O,
    err: &mut E,
) -> Result<Option<ImageMetadata>> {
    let path = config.icon_path();
    if config.verbose {
        writeln!(err, "Reading header: {}", path.display())
            .context("Failed to write diagnostics")?;
    }

    match read_metadata(&path) {
        Ok(meta) => {
            writeln!(out, "{}: {}", SUCCESS_LABEL, meta).context("Failed to write report")?;
            Ok(Some(meta))
        }
        Err(e) => {
            writeln!(err, "{}: {}", FAILURE_LABEL, e).context("Failed to write report")?;
            Ok(None)
        }
    }
}
