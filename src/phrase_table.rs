// WHY: Static corporate-speak table, kept as an ordered sequence because the first
// matching phrase in registration order wins

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Built-in phrases in registration order, each with its candidate real meanings
pub const BUILTIN_PHRASES: &[(&str, &[&str])] = &[
    (
        "let's circle back",
        &[
            "I'm ignoring this for now",
            "I need time to come up with an excuse",
            "This is going in the 'never' pile",
        ],
    ),
    (
        "circle back",
        &[
            "revisit this when we've all forgotten about it",
            "procrastinate professionally",
        ],
    ),
    (
        "let's take this offline",
        &[
            "This is getting awkward and I want it to stop",
            "I don't want witnesses for what I'm about to say",
            "You're embarrassing yourself and I'm giving you an exit",
        ],
    ),
    (
        "take this offline",
        &[
            "stop talking about this in front of everyone",
            "we need to fight in private",
        ],
    ),
    (
        "let's table this",
        &[
            "I'm killing this idea but politely",
            "We'll never discuss this again",
            "This idea is going to die of natural causes",
        ],
    ),
    (
        "great question",
        &[
            "I don't know the answer",
            "I wasn't expecting you to push back",
            "I'm stalling while I make something up",
        ],
    ),
    (
        "that's a great point",
        &[
            "I hadn't thought of that and I'm slightly annoyed",
            "You just made my job harder",
            "This is going to derail my whole presentation",
        ],
    ),
    (
        "per my last email",
        &[
            "I already told you this, can you read?",
            "Check your inbox before wasting my time",
            "I'm creating a paper trail because I don't trust you",
        ],
    ),
    (
        "as per my previous email",
        &[
            "I'm documenting your incompetence",
            "Read. Your. Email.",
        ],
    ),
    (
        "just to clarify",
        &[
            "You clearly didn't understand what I said",
            "Let me speak more slowly",
            "I'm going to repeat myself but make it sound like your fault",
        ],
    ),
    (
        "going forward",
        &[
            "I'm pretending the past didn't happen",
            "Don't bring up our previous failures",
            "Let's all collectively agree to amnesia",
        ],
    ),
    (
        "let's be strategic",
        &[
            "I don't have a plan but I need to sound smart",
            "Let's overthink this instead of doing it",
            "I'm about to suggest something obvious but with more words",
        ],
    ),
    (
        "synergy",
        &[
            "I have no idea what I'm talking about",
            "buzzword filler, please ignore",
            "I read a business book from 2003",
        ],
    ),
    (
        "deep dive",
        &[
            "we're going to waste a lot of time on this",
            "I want to micromanage every detail",
            "prepare for a very long meeting",
        ],
    ),
    (
        "bandwidth",
        &[
            "time and energy (but make it corporate)",
            "I'm too busy (but can't say that)",
            "my capacity to care is at zero",
        ],
    ),
    (
        "i don't have the bandwidth",
        &[
            "I don't want to do this",
            "This is not my problem",
            "Please find someone else to bother",
        ],
    ),
    (
        "quick sync",
        &[
            "A meeting that will not be quick",
            "I have no idea what's going on and I'm panicking",
            "I need to appear busy",
        ],
    ),
    (
        "quick chat",
        &[
            "An uncomfortable conversation is coming",
            "You're about to get feedback you don't want",
            "This will not be quick",
        ],
    ),
    (
        "touch base",
        &[
            "Check if you've done your job",
            "I'm micromanaging but making it sound friendly",
            "I need something from you but I'm easing into it",
        ],
    ),
    (
        "low-hanging fruit",
        &[
            "The easy stuff you should have already done",
            "I'm going to take credit for obvious wins",
            "Let's do the minimum and call it strategy",
        ],
    ),
    (
        "move the needle",
        &[
            "Actually make a difference (unlikely)",
            "I need metrics that make me look good",
            "Do something that matters for once",
        ],
    ),
    (
        "loop me in",
        &[
            "I want to know everything but do nothing",
            "Add me to emails so I can feel important",
            "I have FOMO about work decisions",
        ],
    ),
    (
        "keep me in the loop",
        &[
            "I don't trust you to handle this",
            "CC me on everything",
            "I want plausible deniability",
        ],
    ),
    (
        "let's align",
        &[
            "I want you to agree with me",
            "I'm about to overrule you but collaboratively",
            "Your opinion is wrong but I'll pretend to consider it",
        ],
    ),
    (
        "we're aligned",
        &[
            "You've agreed to do what I want",
            "I've won this argument politely",
            "I'm declaring victory before you realize what happened",
        ],
    ),
    (
        "let me push back",
        &[
            "I disagree and I'm about to tell you why",
            "Your idea is bad and I have receipts",
            "Prepare for conflict but make it professional",
        ],
    ),
    (
        "with all due respect",
        &[
            "I'm about to be disrespectful",
            "You're wrong and I have opinions",
            "This is the professional version of 'no offense, but...'",
        ],
    ),
    (
        "to be transparent",
        &[
            "I'm about to tell you something you won't like",
            "Here comes the bad news",
            "I've been hiding something but now I have to share",
        ],
    ),
    (
        "let's be honest",
        &[
            "I'm about to be brutally honest and you might cry",
            "I've been diplomatic but I'm done",
            "Prepare for the truth you've been avoiding",
        ],
    ),
    (
        "it is what it is",
        &[
            "This situation sucks and there's nothing we can do",
            "I've given up but professionally",
            "Acceptance is the final stage of corporate grief",
        ],
    ),
    (
        "we'll see",
        &[
            "No, but I don't want to fight about it",
            "This is never happening",
            "I'm hoping you'll forget about this",
        ],
    ),
    (
        "interesting",
        &[
            "I completely disagree",
            "This is the worst idea I've heard today",
            "I'm processing how to diplomatically destroy this",
        ],
    ),
    (
        "that's one way to look at it",
        &[
            "That's the wrong way to look at it",
            "Allow me to correct you politely",
            "Your perspective is creative but incorrect",
        ],
    ),
    (
        "i'll try",
        &[
            "I will not try",
            "This is already a no",
            "I'm managing your expectations down to zero",
        ],
    ),
    (
        "noted",
        &[
            "I've heard you but I'm ignoring you",
            "Your input has been acknowledged and discarded",
            "This is going straight to my mental trash folder",
        ],
    ),
    (
        "thanks for your input",
        &[
            "I did not ask for this",
            "Your opinion is noted and will be ignored",
            "Please stop talking",
        ],
    ),
    (
        "happy to help",
        &[
            "I am not happy about this",
            "Adding this to my resentment collection",
            "I'm helping because I have to, not because I want to",
        ],
    ),
    (
        "no worries",
        &[
            "I'm definitely worried but it's fine",
            "This is going to be a problem later",
            "I'm absorbing your failure as my own",
        ],
    ),
    (
        "sounds good",
        &[
            "I stopped listening 30 seconds ago",
            "Whatever, fine",
            "I'm agreeing to end this conversation",
        ],
    ),
    (
        "makes sense",
        &[
            "I don't fully understand but I'm pretending I do",
            "I'm too tired to ask clarifying questions",
            "Sure, why not",
        ],
    ),
    (
        "let me know if you have any questions",
        &[
            "Please don't have questions",
            "Figure it out yourself",
            "I'm ending this conversation",
        ],
    ),
    (
        "i'll get back to you",
        &[
            "I'm hoping you forget about this",
            "I need to Google this first",
            "This is going to my 'maybe never' list",
        ],
    ),
];

/// Errors raised while assembling a phrase table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseTableError {
    #[error("phrase at position {0} is blank")]
    BlankPhrase(usize),
    #[error("phrase {0:?} must be lowercase with no surrounding whitespace")]
    NotNormalized(String),
    #[error("phrase {0:?} is registered more than once")]
    Duplicate(String),
    #[error("phrase {0:?} has no translations")]
    NoTranslations(String),
}

/// One known phrase and its candidate translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub translations: Vec<String>,
}

/// Ordered, immutable phrase table
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
    /// Phrase -> position in `entries`
    index: HashMap<String, usize>,
}

impl PhraseTable {
    /// Build a table from (phrase, translations) pairs, keeping their order
    pub fn from_entries<I, P, T, S>(entries: I) -> Result<Self, PhraseTableError>
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (position, (phrase, translations)) in entries.into_iter().enumerate() {
            let phrase: String = phrase.into();
            if phrase.trim().is_empty() {
                return Err(PhraseTableError::BlankPhrase(position));
            }
            if phrase.trim() != phrase || phrase.to_lowercase() != phrase {
                return Err(PhraseTableError::NotNormalized(phrase));
            }
            if table.index.contains_key(&phrase) {
                return Err(PhraseTableError::Duplicate(phrase));
            }

            let translations: Vec<String> = translations.into_iter().map(Into::into).collect();
            if translations.is_empty() {
                return Err(PhraseTableError::NoTranslations(phrase));
            }

            table.index.insert(phrase.clone(), table.entries.len());
            table.entries.push(PhraseEntry { phrase, translations });
        }

        Ok(table)
    }

    /// Build the built-in corporate-speak table
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_PHRASES
                .iter()
                .map(|(phrase, translations)| (*phrase, translations.iter().copied())),
        )
        .expect("built-in phrase table is well formed")
    }

    /// Process-wide built-in table, built on first use and never mutated
    pub fn global() -> &'static PhraseTable {
        static GLOBAL: OnceLock<PhraseTable> = OnceLock::new();
        GLOBAL.get_or_init(Self::builtin)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, PhraseEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    /// Exact lookup by phrase
    pub fn get(&self, phrase: &str) -> Option<&PhraseEntry> {
        self.index.get(phrase).map(|&position| &self.entries[position])
    }
}

impl<'a> IntoIterator for &'a PhraseTable {
    type Item = &'a PhraseEntry;
    type IntoIter = std::slice::Iter<'a, PhraseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let table = PhraseTable::builtin();
        assert_eq!(table.len(), BUILTIN_PHRASES.len());
        assert_eq!(table.len(), 42);
        assert!(table.iter().all(|entry| !entry.translations.is_empty()));
    }

    #[test]
    fn test_builtin_order_is_registration_order() {
        let table = PhraseTable::builtin();
        let phrases: Vec<_> = table.iter().map(|e| e.phrase.as_str()).take(3).collect();
        assert_eq!(phrases, vec!["let's circle back", "circle back", "let's take this offline"]);
        assert_eq!(table.entries().last().unwrap().phrase, "i'll get back to you");
    }

    #[test]
    fn test_get_exact_phrase() {
        let table = PhraseTable::global();
        let entry = table.get("let's circle back").unwrap();
        assert_eq!(entry.translations.len(), 3);
        assert_eq!(entry.translations[0], "I'm ignoring this for now");
        assert!(table.get("Let's circle back").is_none());
        assert!(table.get("nonexistent").is_none());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(PhraseTable::global(), PhraseTable::global()));
    }

    #[test]
    fn test_rejects_invalid_entries() {
        let blank = PhraseTable::from_entries(vec![("  ", vec!["x"])]);
        assert_eq!(blank.unwrap_err(), PhraseTableError::BlankPhrase(0));

        let upper = PhraseTable::from_entries(vec![("Synergy", vec!["x"])]);
        assert_eq!(upper.unwrap_err(), PhraseTableError::NotNormalized("Synergy".into()));

        let padded = PhraseTable::from_entries(vec![(" noted", vec!["x"])]);
        assert!(matches!(padded, Err(PhraseTableError::NotNormalized(_))));

        let duplicate = PhraseTable::from_entries(vec![("noted", vec!["a"]), ("noted", vec!["b"])]);
        assert_eq!(duplicate.unwrap_err(), PhraseTableError::Duplicate("noted".into()));

        let empty = PhraseTable::from_entries(vec![("noted", Vec::<&str>::new())]);
        assert_eq!(empty.unwrap_err(), PhraseTableError::NoTranslations("noted".into()));
    }

    #[test]
    fn test_entry_serializes_with_wire_names() {
        let table = PhraseTable::from_entries(vec![("noted", vec!["ignored"])]).unwrap();
        let json = serde_json::to_value(&table.entries()[0]).unwrap();
        assert_eq!(json, serde_json::json!({"phrase": "noted", "translations": ["ignored"]}));
    }
}
