use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::rank::{rank, Ranked};
use crate::tokenizer::Tokenizer;
use crate::vectorizer::{CountVectorizer, DocumentVector, Vectorized};
use tracing::debug;

/// Tokenize → vectorize → weight → score → rank, with no state kept between calls.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    vectorizer: CountVectorizer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let vectorizer = CountVectorizer::new(Tokenizer::new(config.tokenizer.clone()));
        Self { config, vectorizer }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    /// Rank `(id, text)` documents against a query.
    ///
    /// The vocabulary is built from the documents and the query together, with
    /// the query last so document term order comes first.
    pub fn rank_texts<Id, S>(&self, documents: &[(Id, S)], query: &str) -> Result<Vec<Ranked<Id>>>
    where
        Id: Clone,
        S: AsRef<str>,
    {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let mut texts: Vec<&str> = documents.iter().map(|(_, text)| text.as_ref()).collect();
        texts.push(query);

        let Vectorized { vocabulary, mut vectors } = self.vectorizer.fit_transform(&texts)?;
        let Some(query_vector) = vectors.pop() else {
            return Err(Error::EmptyCorpus);
        };
        debug!(
            num_docs = vectors.len(),
            num_terms = vocabulary.len(),
            query_terms = query_vector.total(),
            "vectorized corpus"
        );

        let doc_refs: Vec<&DocumentVector> = vectors.iter().collect();
        let (weighted_docs, weighted_query) = self.config.weighting.apply(&doc_refs, &query_vector);
        let pairs: Vec<(Id, Vec<f64>)> = documents
            .iter()
            .map(|(id, _)| id.clone())
            .zip(weighted_docs)
            .collect();

        let ranked = rank(&weighted_query, &pairs)?;
        debug!(top_score = ranked.first().map(|r| r.score), "ranked documents");
        Ok(ranked)
    }
}

/// Rank with the default configuration: lowercase, punctuation-delimited term counts.
pub fn rank_texts<Id: Clone, S: AsRef<str>>(documents: &[(Id, S)], query: &str) -> Result<Vec<Ranked<Id>>> {
    Pipeline::default().rank_texts(documents, query)
}
