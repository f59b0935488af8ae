// WHY: Sentence splitting for meeting transcripts with borrowed and owned APIs
// Punctuation stays on the preceding sentence; the whitespace run after it is the split point

use anyhow::Result;
use regex_automata::meta::Regex;
use std::sync::OnceLock;
use tracing::debug;

pub mod normalization;

// Re-export core types
pub use normalization::{normalize_for_match, normalize_for_match_into};

/// Byte range of a sentence within the text it was split from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct SentenceBoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
}

impl Default for SentenceBoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '!', '?'],
        }
    }
}

impl SentenceBoundaryRules {
    /// Build the boundary pattern: one terminal punctuation mark followed by a whitespace run
    fn boundary_pattern(&self) -> String {
        let class: String = self
            .end_punctuation
            .iter()
            .map(|c| regex_escape_in_class(*c))
            .collect();
        format!(r"[{class}]\s+")
    }
}

fn regex_escape_in_class(c: char) -> String {
    match c {
        '\\' | ']' | '[' | '^' | '-' | '&' | '~' => format!("\\{c}"),
        _ => c.to_string(),
    }
}

/// Borrowed variant - points into the caller's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSentence<'a> {
    pub index: usize,
    pub raw_content: &'a str,
    pub span: Span,
}

impl<'a> DetectedSentence<'a> {
    /// Get raw content without normalization
    pub fn raw(&self) -> &'a str {
        self.raw_content
    }

    /// Lowercased, trimmed form used for phrase lookup
    pub fn normalize(&self) -> String {
        normalize_for_match(self.raw_content)
    }
}

/// Regex-backed sentence splitter
pub struct SentenceSplitter {
    boundary: Regex,
}

impl SentenceSplitter {
    /// Create new splitter with custom rules
    pub fn new(rules: SentenceBoundaryRules) -> Result<Self> {
        if rules.end_punctuation.is_empty() {
            anyhow::bail!("Sentence boundary rules need at least one end punctuation character");
        }
        let pattern = rules.boundary_pattern();
        let boundary = Regex::new(&pattern)?;
        debug!("Compiled sentence boundary pattern: {}", pattern);
        Ok(Self { boundary })
    }

    /// Create splitter with default rules (`.`, `!`, `?`)
    pub fn with_default_rules() -> Result<Self> {
        Self::new(SentenceBoundaryRules::default())
    }

    /// Split text into borrowed sentences, dropping blank fragments
    pub fn split_borrowed<'a>(&self, text: &'a str) -> Vec<DetectedSentence<'a>> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in self.boundary.find_iter(text) {
            // WHY: the split point sits right after the punctuation char, which may be multi-byte
            let punct_len = text[boundary.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            let end = boundary.start() + punct_len;
            push_fragment(&mut sentences, text, start, end);
            start = boundary.end();
        }
        push_fragment(&mut sentences, text, start, text.len());

        debug!("Split {} bytes into {} sentences", text.len(), sentences.len());
        sentences
    }

    /// Split text into owned sentence strings
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_borrowed(text)
            .into_iter()
            .map(|sentence| sentence.raw_content.to_string())
            .collect()
    }
}

fn push_fragment<'a>(sentences: &mut Vec<DetectedSentence<'a>>, text: &'a str, start: usize, end: usize) {
    let fragment = &text[start..end];
    if fragment.trim().is_empty() {
        return;
    }
    sentences.push(DetectedSentence {
        index: sentences.len(),
        raw_content: fragment,
        span: Span { start, end },
    });
}

static DEFAULT_SPLITTER: OnceLock<SentenceSplitter> = OnceLock::new();

/// Process-wide splitter with default rules
pub fn default_splitter() -> &'static SentenceSplitter {
    DEFAULT_SPLITTER.get_or_init(|| {
        SentenceSplitter::with_default_rules().expect("default boundary pattern is a valid regex")
    })
}

/// Split text with the default rules
pub fn split_sentences(text: &str) -> Vec<String> {
    default_splitter().split(text)
}
