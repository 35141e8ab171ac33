use crate::dictionary::DictionaryEntry;

/// Keywords whose presence in a definition marks a word as female-associated.
pub const DEFAULT_KEYWORDS: [&str; 14] = [
    "woman", "women", "girl", "lady", "ladies", "female", "femin",
    "wife", "whore", "prostitute", "slut", "womb", "daughter", "sister",
];

/// Case-insensitive substring match against a set of keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new<I>(keywords: I) -> KeywordClassifier
        where I: IntoIterator, I::Item: AsRef<str> {
        KeywordClassifier {
            keywords: keywords.into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    pub fn filter_entries<'e>(&self, entries: &'e [DictionaryEntry]) -> Vec<&'e DictionaryEntry> {
        entries.iter().filter(|entry| self.matches(&entry.definition)).collect()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        KeywordClassifier::new(DEFAULT_KEYWORDS)
    }
}
