//! Core library for tagcloud.
//!
//! Turns plain text into an HTML tag cloud: the most frequent words of the
//! input, listed alphabetically, each sized by how often it occurs.
//!
//! # Modules
//!
//! - [`tokenizer`] - Splitting lines into word and separator runs
//! - [`frequency`] - Counting word occurrences
//! - [`rank`] - Selecting the top words
//! - [`render`] - Font scaling and HTML output
//! - [`cloud`] - The whole pipeline over one input
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tagcloud_core::{CloudRequest, generate};
//!
//! let lines = ["the cat sat on the mat", "the cat ran"];
//! let doc = generate(lines, &CloudRequest::new(2, "story.txt")).unwrap();
//!
//! let words: Vec<&str> = doc.words.iter().map(|w| w.word.as_str()).collect();
//! assert_eq!(words, ["cat", "the"]);
//! ```
#![deny(unsafe_code)]

pub mod cloud;
pub mod config;
pub mod error;
pub mod frequency;
pub mod rank;
pub mod render;
pub mod tokenizer;

pub use cloud::{CloudDocument, CloudRequest, generate};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{CloudError, CloudResult, ConfigError, ConfigResult};
pub use frequency::FrequencyMap;
pub use rank::RankedEntry;
pub use render::{CloudWord, FontRange, RenderOptions};
pub use tokenizer::SeparatorSet;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
