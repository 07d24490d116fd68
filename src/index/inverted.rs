use std::collections::HashMap;

use crate::core::types::{DocId, Term};
use crate::index::posting::PostingList;

/// The in-memory index accumulated by one indexing run: the term
/// dictionary with its postings, plus the two per-document vectors that
/// are serialised alongside it.
///
/// `doc_lengths` and `primary_keys` are parallel: entry `i` of each
/// describes internal docid `i`.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<Term, PostingList>,
    doc_lengths: Vec<i32>,
    primary_keys: Vec<Vec<u8>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            doc_lengths: Vec::new(),
            primary_keys: Vec::new(),
        }
    }

    /// Record one occurrence of `term` in `doc_id`: look up the term's
    /// postings list, creating an empty one on first sight, then apply the
    /// last-pair rule.
    pub fn record(&mut self, term: Term, doc_id: DocId) {
        self.postings
            .entry(term)
            .or_insert_with(PostingList::new)
            .record(doc_id);
    }

    pub fn push_doc_length(&mut self, length: i32) {
        self.doc_lengths.push(length);
    }

    pub fn push_primary_key(&mut self, key: Vec<u8>) {
        self.primary_keys.push(key);
    }

    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn postings(&self) -> &HashMap<Term, PostingList> {
        &self.postings
    }

    pub fn doc_lengths(&self) -> &[i32] {
        &self.doc_lengths
    }

    pub fn primary_keys(&self) -> &[Vec<u8>] {
        &self.primary_keys
    }
}
