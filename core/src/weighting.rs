//! Term weighting applied to count vectors before scoring.

use crate::vectorizer::DocumentVector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Weighting {
    /// Raw term counts.
    #[default]
    Count,
    /// Sublinear tf (`1 + ln tf`) times idf. Idf is `ln(N/df)`, or `ln(1 + N/df)` when smoothed.
    TfIdf {
        #[serde(default)]
        smoothed_idf: bool,
    },
}

impl Weighting {
    /// Weight document vectors and the query vector over the same dimensions.
    ///
    /// Document frequency is taken from `documents` only; the query never
    /// counts towards it.
    pub fn apply(&self, documents: &[&DocumentVector], query: &DocumentVector) -> (Vec<Vec<f64>>, Vec<f64>) {
        match *self {
            Weighting::Count => (
                documents.iter().map(|d| to_f64(d)).collect(),
                to_f64(query),
            ),
            Weighting::TfIdf { smoothed_idf } => {
                let idf = idf(documents, query.len(), smoothed_idf);
                (
                    documents.iter().map(|d| tfidf(d, &idf)).collect(),
                    tfidf(query, &idf),
                )
            }
        }
    }
}

fn to_f64(v: &DocumentVector) -> Vec<f64> {
    v.as_slice().iter().map(|&c| c as f64).collect()
}

fn idf(documents: &[&DocumentVector], dims: usize, smoothed: bool) -> Vec<f64> {
    let mut df = vec![0u32; dims];
    for doc in documents {
        for (slot, &c) in df.iter_mut().zip(doc.as_slice()) {
            if c > 0 {
                *slot += 1;
            }
        }
    }
    let n = documents.len().max(1) as f64;
    df.into_iter()
        .map(|df_t| {
            let ratio = n / df_t.max(1) as f64;
            if smoothed { (1.0 + ratio).ln() } else { ratio.ln() }
        })
        .collect()
}

fn tfidf(v: &DocumentVector, idf: &[f64]) -> Vec<f64> {
    v.as_slice()
        .iter()
        .zip(idf)
        .map(|(&tf_raw, &idf)| {
            let tf = if tf_raw > 0 { 1.0 + (tf_raw as f64).ln() } else { 0.0 };
            tf * idf
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::CountVectorizer;

    #[test]
    fn count_is_identity() {
        let v = CountVectorizer::default().fit_transform(&["a a b", "b"]).unwrap();
        let (docs, q) = Weighting::Count.apply(&[&v.vectors[0]], &v.vectors[1]);
        assert_eq!(docs[0], vec![2.0, 1.0]);
        assert_eq!(q, vec![0.0, 1.0]);
    }

    #[test]
    fn term_in_every_document_gets_zero_idf() {
        let v = CountVectorizer::default().fit_transform(&["gap rich", "gap poor", "rich"]).unwrap();
        let docs = [&v.vectors[0], &v.vectors[1]];
        let (weighted, q) = Weighting::TfIdf { smoothed_idf: false }.apply(&docs, &v.vectors[2]);
        // "gap" occurs in both documents
        assert_eq!(weighted[0][0], 0.0);
        assert!((weighted[0][1] - 2f64.ln()).abs() < 1e-12);
        assert!((q[1] - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn smoothed_idf_stays_positive() {
        let v = CountVectorizer::default().fit_transform(&["gap", "gap"]).unwrap();
        let (weighted, _) = Weighting::TfIdf { smoothed_idf: true }.apply(&[&v.vectors[0]], &v.vectors[1]);
        assert!((weighted[0][0] - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn deserializes_tagged() {
        let w: Weighting = serde_json::from_str(r#"{"kind":"tfidf","smoothed_idf":true}"#).unwrap();
        assert_eq!(w, Weighting::TfIdf { smoothed_idf: true });
        let w: Weighting = serde_json::from_str(r#"{"kind":"count"}"#).unwrap();
        assert_eq!(w, Weighting::Count);
    }
}
