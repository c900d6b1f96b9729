use crate::error::{Error, Result};
use crate::similarity::cosine_similarity;
use serde::Serialize;

/// One document and its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<Id> {
    pub id: Id,
    pub score: f64,
}

/// Score every document against `query` and sort by score, highest first.
///
/// The sort is stable: equal scores keep their input order. Nothing is truncated;
/// see [`top_k`].
pub fn rank<Id, V, T>(query: &[T], documents: &[(Id, V)]) -> Result<Vec<Ranked<Id>>>
where
    Id: Clone,
    V: AsRef<[T]>,
    T: Copy + Into<f64>,
{
    if documents.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let mut scored = documents
        .iter()
        .map(|(id, vector)| {
            cosine_similarity(query, vector.as_ref()).map(|score| Ranked { id: id.clone(), score })
        })
        .collect::<Result<Vec<_>>>()?;
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(scored)
}

/// Keep the first `k` results.
pub fn top_k<Id>(mut results: Vec<Ranked<Id>>, k: usize) -> Vec<Ranked<Id>> {
    results.truncate(k);
    results
}
