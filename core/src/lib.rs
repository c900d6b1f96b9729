//! Vector space model text similarity.
//!
//! Texts are tokenized, counted over a shared vocabulary, scored against a query
//! with cosine similarity and ranked. Each stage is a plain function or value
//! type so it can be used and tested on its own.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rank;
pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;
pub mod vocab;
pub mod weighting;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use pipeline::{rank_texts, Pipeline};
pub use rank::{rank, top_k, Ranked};
pub use similarity::cosine_similarity;
pub use tokenizer::{Tokenizer, TokenizerConfig};
pub use vectorizer::{CountVectorizer, DocumentVector, Vectorized};
pub use vocab::{TermId, Vocabulary};
pub use weighting::Weighting;
