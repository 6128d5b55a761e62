//! Generate command: write an HTML tag cloud for a text file.

use std::io::Write;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use tagcloud_core::{CloudError, CloudRequest, Config};

use super::{read_input_file, resolve_count, warn_empty_input};

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text file to read.
    pub input: Utf8PathBuf,

    /// HTML file to write (`-` for stdout).
    pub output: Utf8PathBuf,

    /// Number of words to show (default: config `default_count`, then 10).
    #[arg(short = 'n', long, value_name = "N", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Font size of the least frequent word.
    #[arg(long)]
    pub font_min: Option<u32>,

    /// Font size of the most frequent word.
    #[arg(long)]
    pub font_max: Option<u32>,

    /// Name shown in the page heading (default: the input path).
    #[arg(long)]
    pub title: Option<String>,
}

/// Build the tag cloud for `args.input` and write it to `args.output`.
///
/// Empty input is reported as a warning and produces no output file.
#[instrument(name = "cmd_generate", skip_all, fields(input = %args.input, output = %args.output))]
pub fn cmd_generate(
    args: GenerateArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(count = ?args.count, title = ?args.title, "executing generate command");

    let to_stdout = args.output.as_str() == "-";
    if to_stdout && global_json {
        bail!("--json cannot be used when writing the page to stdout");
    }

    let count = resolve_count(args.count.as_deref(), config.word_count())?;
    let fonts = config.font_range(args.font_min, args.font_max)?;

    let content = read_input_file(&args.input, max_input_bytes)?;

    let request = CloudRequest {
        count,
        label: args.title.unwrap_or_else(|| args.input.to_string()),
        separators: config.separator_set(),
        render: config.render_options(fonts),
    };

    let doc = match tagcloud_core::generate(content.lines(), &request) {
        Ok(doc) => doc,
        Err(CloudError::EmptyInput) => {
            warn_empty_input(&args.input);
            return Ok(());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to build tag cloud for {}", args.input));
        }
    };

    if to_stdout {
        print!("{}", doc.to_html());
        return Ok(());
    }

    write_page(&args.output, &doc.to_html())?;
    info!(words = doc.words.len(), output = %args.output, "tag cloud written");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!(
            "{} {} words from {} to {}",
            "Wrote".green(),
            doc.words.len(),
            args.input,
            args.output.cyan(),
        );
    }

    Ok(())
}

/// Write `html` to `path` through a temporary file in the same directory.
///
/// The target only ever holds a complete page: either the previous contents
/// or the new ones.
fn write_page(path: &Utf8Path, html: &str) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {dir}"))?;
    tmp.write_all(html.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write {path}"))?;

    // Temporary files are created owner-only; a page should be world-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .with_context(|| format!("failed to set permissions on {path}"))?;
    }

    tmp.persist(path.as_std_path())
        .with_context(|| format!("failed to write {path}"))?;
    Ok(())
}
