use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

pub type TermId = u32;

/// Ordered set of unique terms spanning a corpus.
///
/// Insertion order fixes the dimension order of every vector built against it.
/// There is no way to add terms after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    lookup: HashMap<String, TermId>,
}

impl Vocabulary {
    /// Build from token streams, one per text, keeping terms in first-seen order.
    pub fn from_documents<D, T>(documents: D) -> Self
    where
        D: IntoIterator,
        D::Item: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut terms: Vec<String> = Vec::new();
        let mut lookup: HashMap<String, TermId> = HashMap::new();
        for tokens in documents {
            for token in tokens {
                let token = token.as_ref();
                if !lookup.contains_key(token) {
                    lookup.insert(token.to_string(), terms.len() as TermId);
                    terms.push(token.to_string());
                }
            }
        }
        Self { terms, lookup }
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn get(&self, term: &str) -> Option<TermId> { self.lookup.get(term).copied() }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> + '_ {
        self.terms.iter().enumerate().map(|(i, t)| (i as TermId, t.as_str()))
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.terms.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vocabulary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let terms: Vec<String> = Vec::deserialize(deserializer)?;
        Ok(Self::from_documents([terms]))
    }
}
