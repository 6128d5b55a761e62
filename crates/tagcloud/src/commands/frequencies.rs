//! Frequencies command: list word counts, most frequent first.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tagcloud_core::{Config, FrequencyMap, RankedEntry, rank};

use super::{read_input_file, resolve_count, warn_empty_input};

/// Arguments for the `frequencies` subcommand.
#[derive(Args, Debug)]
pub struct FrequenciesArgs {
    /// Text file to analyze.
    pub file: Utf8PathBuf,

    /// Only list the N most frequent words.
    #[arg(short = 'n', long, value_name = "N", allow_hyphen_values = true)]
    pub count: Option<String>,
}

#[derive(Serialize)]
struct FrequencyReport {
    distinct_words: usize,
    total_words: usize,
    words: Vec<RankedEntry>,
}

/// Print word frequencies for a file.
#[instrument(name = "cmd_frequencies", skip_all, fields(file = %args.file))]
pub fn cmd_frequencies(
    args: FrequenciesArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(count = ?args.count, "executing frequencies command");

    let limit = args
        .count
        .as_deref()
        .map(|raw| resolve_count(Some(raw), 0))
        .transpose()?;

    let content = read_input_file(&args.file, max_input_bytes)?;
    if content.lines().next().is_none() {
        warn_empty_input(&args.file);
        return Ok(());
    }
    let map = FrequencyMap::from_lines(content.lines(), &config.separator_set());

    let report = build_report(map, limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = report
        .words
        .first()
        .map_or(1, |e| e.count.to_string().len());
    for entry in &report.words {
        println!("{:>width$}  {}", entry.count.bold(), entry.word);
    }
    println!(
        "{}",
        format!(
            "{} distinct, {} total",
            report.distinct_words, report.total_words
        )
        .dimmed()
    );

    Ok(())
}

fn build_report(map: FrequencyMap, limit: Option<usize>) -> FrequencyReport {
    let distinct_words = map.len();
    let total_words = map.total_words();
    let mut words = rank::by_frequency(map);
    if let Some(n) = limit {
        words.truncate(n);
    }
    FrequencyReport {
        distinct_words,
        total_words,
        words,
    }
}
