use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;
use crate::vocab::Vocabulary;
use serde::Serialize;

/// Term counts over a vocabulary, one entry per term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentVector(Vec<u32>);

impl DocumentVector {
    pub fn as_slice(&self) -> &[u32] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// True when no vocabulary term occurs in the text.
    pub fn is_zero(&self) -> bool { self.0.iter().all(|&c| c == 0) }

    /// Total number of counted tokens.
    pub fn total(&self) -> u64 { self.0.iter().map(|&c| c as u64).sum() }
}

impl AsRef<[u32]> for DocumentVector {
    fn as_ref(&self) -> &[u32] { &self.0 }
}

/// Output of a joint fit: the shared vocabulary and one vector per input text.
#[derive(Debug, Clone, Serialize)]
pub struct Vectorized {
    pub vocabulary: Vocabulary,
    pub vectors: Vec<DocumentVector>,
}

/// Bag-of-words count vectorizer.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    tokenizer: Tokenizer,
}

impl CountVectorizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Build the vocabulary across all texts jointly, then count each text against it.
    /// The query belongs in `texts` so its dimensions line up with the documents.
    pub fn fit_transform<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vectorized> {
        if texts.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let token_lists: Vec<Vec<String>> =
            texts.iter().map(|t| self.tokenizer.terms(t.as_ref())).collect();
        let vocabulary = Vocabulary::from_documents(&token_lists);
        let vectors = token_lists.iter().map(|tokens| count(&vocabulary, tokens)).collect();
        Ok(Vectorized { vocabulary, vectors })
    }

    /// Count a text against an existing vocabulary. Terms outside it are ignored.
    pub fn transform(&self, vocabulary: &Vocabulary, text: &str) -> DocumentVector {
        count(vocabulary, &self.tokenizer.terms(text))
    }
}

fn count<T: AsRef<str>>(vocabulary: &Vocabulary, tokens: &[T]) -> DocumentVector {
    let mut counts = vec![0u32; vocabulary.len()];
    for token in tokens {
        if let Some(tid) = vocabulary.get(token.as_ref()) {
            counts[tid as usize] += 1;
        }
    }
    DocumentVector(counts)
}
