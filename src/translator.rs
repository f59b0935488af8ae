// WHY: Request-level aggregation - split, match every sentence, summarize
// Everything here lives for one request; the phrase table is the only shared state

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::matcher::{PhraseMatcher, RandomSource};
use crate::phrase_table::PhraseTable;
use crate::sentence_detector::{default_splitter, SentenceSplitter};

/// The one user-facing failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("No text provided")]
    EmptyText,
}

/// Outcome for a single input sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceResult {
    pub original: String,
    pub translated: Option<String>,
    pub matched_phrase: Option<String>,
    /// 0 when nothing matched
    pub confidence: u8,
}

impl SentenceResult {
    pub fn is_translated(&self) -> bool {
        self.translated.is_some()
    }
}

/// Per-request totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranslationSummary {
    pub total_sentences: usize,
    /// Number of sentences that matched a known phrase
    #[serde(rename = "translated")]
    pub translated_count: usize,
    pub corporate_density: u8,
}

impl TranslationSummary {
    pub fn from_results(results: &[SentenceResult]) -> Self {
        let total_sentences = results.len();
        let translated_count = results.iter().filter(|r| r.is_translated()).count();
        Self {
            total_sentences,
            translated_count,
            corporate_density: corporate_density(translated_count, total_sentences),
        }
    }
}

/// Full response body for a translated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub results: Vec<SentenceResult>,
    pub summary: TranslationSummary,
}

/// Percentage of matched sentences, rounded half to even.
/// The denominator is floored at 1 so an empty result set reports 0.
pub fn corporate_density(translated: usize, total: usize) -> u8 {
    let denominator = total.max(1) as u128;
    let numerator = translated.min(total) as u128 * 100;

    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;
    let rounded = if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    // numerator <= 100 * denominator, so this never exceeds 100
    rounded.min(100) as u8
}

/// Splits a text block and decodes each sentence against a phrase table
pub struct Translator<'t> {
    splitter: &'t SentenceSplitter,
    matcher: PhraseMatcher<'t>,
}

impl<'t> Translator<'t> {
    pub fn new(table: &'t PhraseTable) -> Self {
        Self::with_splitter(table, default_splitter())
    }

    pub fn with_splitter(table: &'t PhraseTable, splitter: &'t SentenceSplitter) -> Self {
        Self {
            splitter,
            matcher: PhraseMatcher::new(table),
        }
    }

    /// Translator over the built-in table and default splitter
    pub fn global() -> Translator<'static> {
        Translator::new(PhraseTable::global())
    }

    /// Decode a text block; blank input is rejected before any splitting
    pub fn translate<R>(&self, text: &str, rng: &mut R) -> Result<Translation, TranslateError>
    where
        R: RandomSource + ?Sized,
    {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyText);
        }

        let results = self.translate_sentences(text, rng);
        let summary = TranslationSummary::from_results(&results);

        info!(
            total_sentences = summary.total_sentences,
            translated = summary.translated_count,
            corporate_density = summary.corporate_density,
            "Translated text block"
        );
        Ok(Translation { results, summary })
    }

    /// Per-sentence results in original order; never fails
    pub fn translate_sentences<R>(&self, text: &str, rng: &mut R) -> Vec<SentenceResult>
    where
        R: RandomSource + ?Sized,
    {
        let sentences = self.splitter.split_borrowed(text);
        let mut buffer = String::new();
        let mut results = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let result = match self.matcher.match_sentence_with_buffer(sentence.raw(), rng, &mut buffer) {
                Some(found) => SentenceResult {
                    original: sentence.raw().to_string(),
                    translated: Some(found.translation.to_string()),
                    matched_phrase: Some(found.phrase.to_string()),
                    confidence: found.confidence,
                },
                None => SentenceResult {
                    original: sentence.raw().to_string(),
                    translated: None,
                    matched_phrase: None,
                    confidence: 0,
                },
            };
            results.push(result);
        }

        debug!("Produced {} sentence results", results.len());
        results
    }
}
