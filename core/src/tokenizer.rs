use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("valid regex");
    static ref NON_SPACE_RE: Regex = Regex::new(r"\S+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could","did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves",
            // fragments left behind once apostrophes delimit tokens
            "s","t","d","ll","m","re","ve",
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token) || STOPWORDS.contains(token.to_lowercase().as_str())
}

/// How raw text is split into terms.
///
/// The defaults produce lowercase tokens delimited by whitespace and punctuation,
/// with no stop word removal and no stemming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Fold terms to lowercase.
    pub lowercase: bool,
    /// Treat punctuation as a delimiter. When false only whitespace delimits.
    pub strip_punctuation: bool,
    /// Apply NFKC normalization before splitting.
    pub normalize_unicode: bool,
    pub remove_stopwords: bool,
    /// English snowball stemming.
    pub stem: bool,
    /// Tokens shorter than this many chars are dropped.
    pub min_token_len: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_punctuation: true,
            normalize_unicode: true,
            remove_stopwords: false,
            stem: false,
            min_token_len: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text into (term, position). Position is the index of the raw match,
    /// so dropped stop words and short tokens leave gaps.
    pub fn tokenize(&self, text: &str) -> Vec<(String, usize)> {
        let cfg = &self.config;
        let mut text: Cow<'_, str> = Cow::Borrowed(text);
        if cfg.normalize_unicode {
            text = Cow::Owned(text.nfkc().collect());
        }
        if cfg.lowercase {
            text = Cow::Owned(text.to_lowercase());
        }
        let re: &Regex = if cfg.strip_punctuation { &*WORD_RE } else { &*NON_SPACE_RE };

        let mut tokens = Vec::new();
        for (pos, mat) in re.find_iter(&text).enumerate() {
            let token = mat.as_str();
            if token.chars().count() < cfg.min_token_len {
                continue;
            }
            if cfg.remove_stopwords && is_stopword(token) {
                continue;
            }
            let term = if cfg.stem { STEMMER.stem(token).into_owned() } else { token.to_string() };
            tokens.push((term, pos));
        }
        tokens
    }

    /// Terms only, in order of appearance.
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|(t, _)| t).collect()
    }
}

/// Tokenize with the default configuration.
pub fn tokenize(text: &str) -> Vec<(String, usize)> {
    Tokenizer::default().tokenize(text)
}
