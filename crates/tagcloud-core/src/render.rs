//! HTML rendering of a ranked word selection.
//!
//! Font sizes scale linearly with count:
//!
//! `size = floor((count - min) * (font_max - font_min) / (max - min)) + font_min`
//!
//! where `min` and `max` are the smallest and largest counts among the
//! selected words. When every selected word has the same count the formula
//! has no denominator, and every word is drawn at `font_max`.

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, CloudResult};
use crate::rank::RankedEntry;

/// Font size of the least frequent selected word.
pub const DEFAULT_FONT_MIN: u32 = 11;

/// Font size of the most frequent selected word.
pub const DEFAULT_FONT_MAX: u32 = 48;

/// Stylesheets linked from the generated page.
pub const DEFAULT_STYLESHEETS: &[&str] = &[
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
    "tagcloud.css",
];

/// Inclusive range of font sizes used by the cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRange {
    /// Size for the least frequent selected word.
    pub min: u32,
    /// Size for the most frequent selected word.
    pub max: u32,
}

impl FontRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: u32, max: u32) -> CloudResult<Self> {
        if min > max {
            return Err(CloudError::InvalidConfiguration(format!(
                "font_min ({min}) must not exceed font_max ({max})"
            )));
        }
        Ok(Self { min, max })
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_FONT_MIN,
            max: DEFAULT_FONT_MAX,
        }
    }
}

/// Linear mapping from word counts to font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min_count: usize,
    max_count: usize,
    fonts: FontRange,
}

impl FontScale {
    /// Derive the scale from the counts in `entries`.
    ///
    /// Returns `None` for an empty selection.
    pub fn from_entries(entries: &[RankedEntry], fonts: FontRange) -> Option<Self> {
        let min_count = entries.iter().map(|e| e.count).min()?;
        let max_count = entries.iter().map(|e| e.count).max()?;
        Some(Self {
            min_count,
            max_count,
            fonts,
        })
    }

    /// Whether every selected word shares one count.
    pub const fn is_degenerate(&self) -> bool {
        self.min_count == self.max_count
    }

    /// Font size for a word occurring `count` times.
    ///
    /// Counts outside the scale's range are clamped to it.
    pub fn size_for(&self, count: usize) -> u32 {
        if self.is_degenerate() {
            return self.fonts.max;
        }
        let count = count.clamp(self.min_count, self.max_count);
        let spread = u64::from(self.fonts.max - self.fonts.min);
        let offset = (count - self.min_count) as u64 * spread;
        let range = (self.max_count - self.min_count) as u64;
        // offset / range <= spread, which came from a u32
        self.fonts.min + (offset / range) as u32
    }
}

/// A selected word with its computed font size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudWord {
    /// The lowercased word.
    pub word: String,
    /// Number of occurrences in the input.
    pub count: usize,
    /// Font size in points.
    pub font_size: u32,
}

/// Presentation settings for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Font sizes of the least and most frequent words.
    pub fonts: FontRange,
    /// Stylesheet URLs linked from the page head, in order.
    pub stylesheets: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fonts: FontRange::default(),
            stylesheets: DEFAULT_STYLESHEETS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Attach font sizes to `entries`, preserving their order.
pub fn scale(entries: &[RankedEntry], fonts: FontRange) -> Vec<CloudWord> {
    let Some(scale) = FontScale::from_entries(entries, fonts) else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|e| CloudWord {
            word: e.word.clone(),
            count: e.count,
            font_size: scale.size_for(e.count),
        })
        .collect()
}

/// Render the full HTML page for `entries`, one output line per element.
///
/// `requested` is the word count the user asked for and appears in the page
/// title, even when fewer distinct words exist. `label` names the input.
#[tracing::instrument(skip(entries, options), fields(words = entries.len()))]
pub fn render(
    entries: &[RankedEntry],
    requested: usize,
    label: &str,
    options: &RenderOptions,
) -> Vec<String> {
    render_words(&scale(entries, options.fonts), requested, label, options)
}

/// Render already-scaled words; see [`render`].
pub fn render_words(
    words: &[CloudWord],
    requested: usize,
    label: &str,
    options: &RenderOptions,
) -> Vec<String> {
    let heading = format!("Top {requested} words in {}", escape_html(label));

    let mut lines = Vec::with_capacity(words.len() + options.stylesheets.len() + 12);
    lines.push("<html>".to_string());
    lines.push("<head>".to_string());
    lines.push(format!("<title>{heading}</title>"));
    for href in &options.stylesheets {
        lines.push(format!(
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(href)
        ));
    }
    lines.push("</head>".to_string());
    lines.push("<body>".to_string());
    lines.push(format!("<h2>{heading}</h2>"));
    lines.push("<hr>".to_string());
    lines.push("<div class=\"cdiv\">".to_string());
    lines.push("<p class=\"cbox\">".to_string());
    lines.extend(words.iter().map(word_element));
    lines.push("</p>".to_string());
    lines.push("</div>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines
}

/// The `f{size}` class matches the stock stylesheet; the inline size keeps
/// ranges outside 11..=48 rendering at their computed size.
fn word_element(word: &CloudWord) -> String {
    format!(
        "<span style=\"cursor:default;font-size:{size}pt\" class=\"f{size}\" title=\"count: {}\">{}</span>",
        word.count,
        escape_html(&word.word),
        size = word.font_size,
    )
}

/// Escape text for use in HTML content and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, usize)]) -> Vec<RankedEntry> {
        pairs.iter().map(|(w, c)| RankedEntry::new(*w, *c)).collect()
    }

    #[test]
    fn scale_endpoints_and_midpoint() {
        let scale =
            FontScale::from_entries(&entries(&[("a", 2), ("b", 10)]), FontRange::default())
                .unwrap();
        assert_eq!(scale.size_for(2), 11);
        assert_eq!(scale.size_for(10), 48);
        // floor((6 - 2) * 37 / 8) + 11
        assert_eq!(scale.size_for(6), 29);
    }

    #[test]
    fn sizes_stay_in_range() {
        let fonts = FontRange::default();
        let scale = FontScale::from_entries(&entries(&[("a", 1), ("b", 7)]), fonts).unwrap();
        for count in 0..=20 {
            let size = scale.size_for(count);
            assert!((fonts.min..=fonts.max).contains(&size), "{count} -> {size}");
        }
    }

    #[test]
    fn degenerate_scale_uses_max_font() {
        let words = scale(
            &entries(&[("a", 5), ("b", 5), ("c", 5)]),
            FontRange::default(),
        );
        assert!(words.iter().all(|w| w.font_size == DEFAULT_FONT_MAX));
    }

    #[test]
    fn single_word_uses_max_font() {
        let words = scale(&entries(&[("solo", 1)]), FontRange::default());
        assert_eq!(words[0].font_size, 48);
    }

    #[test]
    fn empty_selection_has_no_scale() {
        assert!(FontScale::from_entries(&[], FontRange::default()).is_none());
        assert!(scale(&[], FontRange::default()).is_empty());
    }

    #[test]
    fn custom_font_range() {
        let fonts = FontRange::new(10, 20).unwrap();
        let words = scale(&entries(&[("a", 1), ("b", 2), ("c", 3)]), fonts);
        let sizes: Vec<u32> = words.iter().map(|w| w.font_size).collect();
        assert_eq!(sizes, vec![10, 15, 20]);
    }

    #[test]
    fn equal_font_bounds_are_allowed() {
        let fonts = FontRange::new(14, 14).unwrap();
        let words = scale(&entries(&[("a", 1), ("b", 9)]), fonts);
        assert!(words.iter().all(|w| w.font_size == 14));
    }

    #[test]
    fn inverted_font_range_rejected() {
        assert!(matches!(
            FontRange::new(30, 12),
            Err(CloudError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn renders_page_chrome() {
        let lines = render(
            &entries(&[("cat", 2), ("the", 3)]),
            2,
            "pets.txt",
            &RenderOptions::default(),
        );
        assert_eq!(lines.first().map(String::as_str), Some("<html>"));
        assert_eq!(lines.last().map(String::as_str), Some("</html>"));
        assert!(lines.contains(&"<title>Top 2 words in pets.txt</title>".to_string()));
        assert!(lines.contains(&"<h2>Top 2 words in pets.txt</h2>".to_string()));
        assert!(lines.iter().any(|l| l.contains("href=\"tagcloud.css\"")));
    }

    #[test]
    fn renders_word_elements_in_order() {
        let lines = render(
            &entries(&[("cat", 2), ("the", 3)]),
            2,
            "in.txt",
            &RenderOptions::default(),
        );
        let spans: Vec<&String> = lines.iter().filter(|l| l.starts_with("<span")).collect();
        assert_eq!(
            spans,
            vec![
                "<span style=\"cursor:default;font-size:11pt\" class=\"f11\" title=\"count: 2\">cat</span>",
                "<span style=\"cursor:default;font-size:48pt\" class=\"f48\" title=\"count: 3\">the</span>",
            ]
        );
    }

    #[test]
    fn custom_range_sizes_are_inline() {
        let options = RenderOptions {
            fonts: FontRange::new(10, 60).unwrap(),
            ..RenderOptions::default()
        };
        let lines = render(&entries(&[("a", 1), ("b", 3)]), 2, "in.txt", &options);
        assert!(lines.contains(
            &"<span style=\"cursor:default;font-size:10pt\" class=\"f10\" title=\"count: 1\">a</span>"
                .to_string()
        ));
        assert!(lines.contains(
            &"<span style=\"cursor:default;font-size:60pt\" class=\"f60\" title=\"count: 3\">b</span>"
                .to_string()
        ));
    }

    #[test]
    fn empty_selection_renders_empty_cloud() {
        let lines = render(&[], 0, "in.txt", &RenderOptions::default());
        assert!(lines.iter().all(|l| !l.starts_with("<span")));
        let open = lines.iter().position(|l| l == "<p class=\"cbox\">").unwrap();
        assert_eq!(lines[open + 1], "</p>");
    }

    #[test]
    fn label_and_words_are_escaped() {
        let lines = render(
            &entries(&[("a\\b", 1)]),
            1,
            "Q&A <draft>.txt",
            &RenderOptions {
                stylesheets: Vec::new(),
                ..RenderOptions::default()
            },
        );
        assert!(lines.contains(&"<h2>Top 1 words in Q&amp;A &lt;draft&gt;.txt</h2>".to_string()));
        assert_eq!(escape_html("\"'"), "&quot;&#39;");
    }
}
