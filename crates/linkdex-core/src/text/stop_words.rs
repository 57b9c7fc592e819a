use std::collections::HashSet;

const ENGLISH: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could",
    "dear", "did", "do", "does", "either", "else", "ever", "every", "for", "from", "get", "got",
    "had", "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "just", "least", "let", "like", "likely", "may", "me", "might",
    "most", "must", "my", "neither", "no", "nor", "not", "of", "off", "often", "on", "only", "or",
    "other", "our", "own", "rather", "said", "say", "says", "she", "should", "since", "so",
    "some", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "tis", "to", "too", "twas", "us", "wants", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you", "your",
];

// URL and page-chrome noise that shows up in link names and descriptions.
const DOMAIN: &[&str] = &[
    "http", "https", "www", "com", "org", "net", "io", "html", "link", "links", "page",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}

impl StopWords {
    /// Built-in words plus `extra`. Extra entries are trimmed and lowercased;
    /// blank entries are ignored.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = ENGLISH
            .iter()
            .chain(DOMAIN.iter())
            .map(|word| (*word).to_string())
            .collect::<HashSet<_>>();
        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Self { words }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        token.chars().any(char::is_uppercase) && self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::StopWords;

    #[test]
    fn builtin_lists_cover_articles_and_url_noise() {
        let words = StopWords::default();
        for token in ["the", "and", "of", "https", "www"] {
            assert!(words.is_stop_word(token), "{token} should be a stop word");
        }
        assert!(!words.is_stop_word("elm"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let words = StopWords::default();
        assert!(words.is_stop_word("The"));
        assert!(words.is_stop_word("HTTPS"));
    }

    #[test]
    fn extra_words_are_normalized_and_blank_entries_ignored() {
        let base = StopWords::default();
        let words = StopWords::with_extra([" Talk ", "", "  "]);
        assert!(words.is_stop_word("talk"));
        assert_eq!(words.len(), base.len() + 1);
    }
}
