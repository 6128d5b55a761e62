//! End-to-end tag cloud generation.
//!
//! Runs tokenizing, counting, ranking and rendering over one input.

use serde::Serialize;

use crate::error::{CloudError, CloudResult};
use crate::frequency::FrequencyMap;
use crate::rank;
use crate::render::{self, CloudWord, RenderOptions};
use crate::tokenizer::SeparatorSet;

/// Parameters for one cloud.
#[derive(Debug, Clone)]
pub struct CloudRequest {
    /// How many words to show.
    pub count: usize,
    /// Name of the input shown in the page heading.
    pub label: String,
    /// Characters that delimit words.
    pub separators: SeparatorSet,
    /// Fonts and stylesheets.
    pub render: RenderOptions,
}

impl CloudRequest {
    /// Request `count` words labelled `label`, with default settings.
    pub fn new(count: usize, label: impl Into<String>) -> Self {
        Self {
            count,
            label: label.into(),
            separators: SeparatorSet::default(),
            render: RenderOptions::default(),
        }
    }
}

/// A rendered cloud and the figures behind it.
#[derive(Debug, Clone, Serialize)]
pub struct CloudDocument {
    /// Word count that was requested.
    pub requested: usize,
    /// Number of lines read from the input.
    pub lines_read: usize,
    /// Distinct words in the input.
    pub distinct_words: usize,
    /// Total word occurrences in the input.
    pub total_words: usize,
    /// Selected words, alphabetically, with their font sizes.
    pub words: Vec<CloudWord>,
    /// The HTML page, one element per line.
    #[serde(skip)]
    pub html: Vec<String>,
}

impl CloudDocument {
    /// The HTML page as a single string with a trailing newline.
    pub fn to_html(&self) -> String {
        let mut out = self.html.join("\n");
        out.push('\n');
        out
    }
}

/// Build a tag cloud from the lines of an input.
///
/// Fails with [`CloudError::EmptyInput`] when `lines` yields nothing. A
/// single empty line is not empty input; it produces an empty cloud.
#[tracing::instrument(skip(lines, request), fields(count = request.count, label = %request.label))]
pub fn generate<I, S>(lines: I, request: &CloudRequest) -> CloudResult<CloudDocument>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines_read = 0usize;
    let mut map = FrequencyMap::new();
    for line in lines {
        map.add_line(line.as_ref(), &request.separators);
        lines_read += 1;
    }
    if lines_read == 0 {
        return Err(CloudError::EmptyInput);
    }

    let distinct_words = map.len();
    let total_words = map.total_words();
    let selected = rank::rank(map, request.count);
    let words = render::scale(&selected, request.render.fonts);
    let html = render::render_words(&words, request.count, &request.label, &request.render);

    tracing::debug!(
        lines_read,
        distinct_words,
        total_words,
        selected = words.len(),
        "generated tag cloud"
    );

    Ok(CloudDocument {
        requested: request.count,
        lines_read,
        distinct_words,
        total_words,
        words,
        html,
    })
}
