use serde::Serialize;

use crate::core::types::Term;

/// Summary of a loaded index, reported by the index-stats tool.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub average_doc_length: f64,
    pub shortest_doc: i32,
    pub longest_doc: i32,
    pub terms: usize,
    /// Term with the largest postings list, i.e. the most documents.
    pub most_common_term: Option<String>,
}

impl IndexStats {
    /// Computed from raw parts rather than a reader so this stays at the
    /// bottom of the module graph.
    pub fn compute<'a, I>(doc_lengths: &[i32], vocab: I) -> Self
    where
        I: Iterator<Item = (&'a Term, i32)>,
    {
        let documents = doc_lengths.len();
        let total: i64 = doc_lengths.iter().map(|&l| l as i64).sum();
        let average_doc_length = total as f64 / documents as f64;

        let mut terms = 0;
        let mut best: Option<(&Term, i32)> = None;
        for (term, size) in vocab {
            terms += 1;
            if best.map_or(true, |(_, s)| size > s) {
                best = Some((term, size));
            }
        }

        IndexStats {
            documents,
            average_doc_length,
            shortest_doc: doc_lengths.iter().copied().min().unwrap_or(0),
            longest_doc: doc_lengths.iter().copied().max().unwrap_or(0),
            terms,
            most_common_term: best.map(|(term, _)| term.to_string()),
        }
    }
}
