// WHY: First-in-table-order containment lookup, with the random choices routed
// through a trait so callers can pin them down

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::trace;

use crate::phrase_table::{PhraseEntry, PhraseTable};
use crate::sentence_detector::normalize_for_match_into;

/// Lowest confidence ever reported for a match
pub const MIN_CONFIDENCE: u8 = 85;
/// Highest confidence ever reported for a match
pub const MAX_CONFIDENCE: u8 = 99;

pub const CONFIDENCE_RANGE: RangeInclusive<u8> = MIN_CONFIDENCE..=MAX_CONFIDENCE;

/// Source of the two random choices made per match
pub trait RandomSource {
    /// Uniform index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform confidence in `MIN_CONFIDENCE..=MAX_CONFIDENCE`
    fn confidence(&mut self) -> u8;
}

impl RandomSource for StdRng {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn confidence(&mut self) -> u8 {
        self.gen_range(CONFIDENCE_RANGE)
    }
}

impl RandomSource for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn confidence(&mut self) -> u8 {
        self.gen_range(CONFIDENCE_RANGE)
    }
}

/// A phrase found in a sentence together with the chosen translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch<'t> {
    pub phrase: &'t str,
    pub translation: &'t str,
    pub confidence: u8,
}

/// Looks sentences up against a phrase table
pub struct PhraseMatcher<'t> {
    table: &'t PhraseTable,
}

impl<'t> PhraseMatcher<'t> {
    pub fn new(table: &'t PhraseTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t PhraseTable {
        self.table
    }

    /// First table entry, in registration order, whose phrase occurs in the sentence
    pub fn find_phrase(&self, sentence: &str) -> Option<&'t PhraseEntry> {
        let mut normalized = String::new();
        self.find_phrase_with_buffer(sentence, &mut normalized)
    }

    fn find_phrase_with_buffer(&self, sentence: &str, buffer: &mut String) -> Option<&'t PhraseEntry> {
        normalize_for_match_into(sentence, buffer);
        let haystack = buffer.as_str();
        self.table
            .iter()
            .find(|entry| haystack.contains(entry.phrase.as_str()))
    }

    /// Match one sentence, choosing a translation and confidence from `rng`
    pub fn match_sentence<R>(&self, sentence: &str, rng: &mut R) -> Option<PhraseMatch<'t>>
    where
        R: RandomSource + ?Sized,
    {
        let mut normalized = String::new();
        self.match_sentence_with_buffer(sentence, rng, &mut normalized)
    }

    /// Same as `match_sentence`, reusing `buffer` for the normalized sentence
    pub fn match_sentence_with_buffer<R>(
        &self,
        sentence: &str,
        rng: &mut R,
        buffer: &mut String,
    ) -> Option<PhraseMatch<'t>>
    where
        R: RandomSource + ?Sized,
    {
        let Some(entry) = self.find_phrase_with_buffer(sentence, buffer) else {
            trace!("No phrase matched: {:?}", sentence);
            return None;
        };

        let choice = rng.pick(entry.translations.len()).min(entry.translations.len() - 1);
        let confidence = rng.confidence().clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        trace!(phrase = %entry.phrase, choice, confidence, "Phrase matched");

        Some(PhraseMatch {
            phrase: &entry.phrase,
            translation: &entry.translations[choice],
            confidence,
        })
    }
}
