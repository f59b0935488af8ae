pub mod sentence_detector;
pub mod phrase_table;
pub mod matcher;
pub mod translator;
pub mod server;

// Re-export main types for convenient access
pub use sentence_detector::{
    split_sentences, DetectedSentence, SentenceBoundaryRules, SentenceSplitter, Span
};

pub use phrase_table::{PhraseEntry, PhraseTable, PhraseTableError};

pub use matcher::{PhraseMatch, PhraseMatcher, RandomSource, MAX_CONFIDENCE, MIN_CONFIDENCE};

// Re-export request-level aggregation
pub use translator::{
    corporate_density, SentenceResult, TranslateError, Translation, TranslationSummary, Translator
};
