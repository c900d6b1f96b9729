/// Errors surfaced by the vectorize → score → rank pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No documents, or no text to build a vocabulary from.
    #[error("empty corpus: at least one document is required")]
    EmptyCorpus,

    /// Query and document vectors have different lengths.
    #[error("dimension mismatch: query has {expected} dimensions, document has {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
