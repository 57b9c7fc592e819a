use std::sync::Arc;

mod stop_words;

pub use stop_words::StopWords;

/// Lowercases and splits on every non-alphanumeric character.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|x| !x.is_empty())
        .map(|x| x.to_string())
        .collect()
}

/// Tokenizer plus stop-word exclusion. Index construction and query parsing
/// must go through the same analyzer.
#[derive(Debug, Clone)]
pub struct Analyzer {
    stop_words: Arc<StopWords>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(StopWords::default())
    }
}

impl Analyzer {
    #[must_use]
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words: Arc::new(stop_words),
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.is_stop_word(token)
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }
}
