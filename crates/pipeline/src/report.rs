// In crates/pipeline/src/report.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use analytics::{ErrorReport, MetricsReport};

use crate::error::{Error, Result};

/// Writes the report to `output` and then echoes the same bytes to `stdout`.
///
/// Missing parent directories of `output` are created. Nothing reaches
/// `stdout` if the file could not be written.
pub fn publish<W: Write>(report: &MetricsReport, output: &Path, stdout: &mut W) -> Result<()> {
    let bytes = report.to_pretty_json()?;
    write_file(&bytes, output)?;
    echo(&bytes, stdout)
}

/// Emits the error-shaped report for a failed run.
///
/// The report is echoed to `stdout` even when the output file cannot be
/// written; any such secondary failure is only logged.
pub fn publish_failure<W: Write>(
    version: Option<&str>,
    message: &str,
    output: &Path,
    stdout: &mut W,
) {
    let report = MetricsReport::from(ErrorReport::new(version, message));
    let bytes = match report.to_pretty_json() {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(%err, "Failed to serialize error report.");
            return;
        }
    };

    if let Err(err) = write_file(&bytes, output) {
        tracing::error!(%err, "Failed to write error report.");
    }
    if let Err(err) = echo(&bytes, stdout) {
        tracing::error!(%err, "Failed to echo error report.");
    }
}

fn write_file(bytes: &[u8], output: &Path) -> Result<()> {
    let write_err = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(output, bytes).map_err(write_err)
}

fn echo<W: Write>(bytes: &[u8], stdout: &mut W) -> Result<()> {
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.flush())
        .map_err(Error::Stdout)
}
