//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;
use tagcloud_core::CloudError;

pub mod frequencies;
pub mod generate;
pub mod info;

/// Read a file and validate its size against the configured limit.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so text in any
/// encoding can be counted.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let bytes =
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%path, "input is not valid UTF-8; undecodable bytes replaced");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Report an input that has no lines at all.
pub fn warn_empty_input(path: &Utf8Path) {
    eprintln!("{} {path}: {}", "warning:".yellow(), CloudError::EmptyInput);
}

/// Resolve the `--count` argument, falling back to `default`.
///
/// Runs before any input is read so a bad count never touches the file.
pub fn resolve_count(raw: Option<&str>, default: usize) -> anyhow::Result<usize> {
    match raw {
        Some(raw) => Ok(tagcloud_core::rank::parse_count(raw)?),
        None => Ok(default),
    }
}
