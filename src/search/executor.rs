use std::cmp::Ordering;

use crate::core::types::DocId;
use crate::scoring::scorer::{Bm25Scorer, idf};
use crate::search::results::{ScoredDocument, SearchResults};
use crate::storage::reader::IndexReader;

/// At most this many documents are returned per query.
pub const TOP_K: usize = 1000;

/// Split a query line on ASCII whitespace. A leading token of pure decimal
/// digits is the TREC query identifier (echoed back verbatim); without one
/// the identifier defaults to "0".
pub fn parse_query(line: &[u8]) -> (String, Vec<&[u8]>) {
    let mut terms: Vec<&[u8]> = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let query_id = if terms
        .first()
        .is_some_and(|t| t.iter().all(|b| b.is_ascii_digit()))
    {
        String::from_utf8_lossy(terms.remove(0)).into_owned()
    } else {
        "0".to_string()
    };

    (query_id, terms)
}

/// Accumulator-based BM25 evaluation over a loaded index.
pub struct QueryExecutor<'a> {
    reader: &'a IndexReader,
    scorer: Bm25Scorer,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(reader: &'a IndexReader) -> Self {
        QueryExecutor {
            reader,
            scorer: Bm25Scorer::default(),
        }
    }

    /// Evaluate one query line.
    ///
    /// Terms are matched case-sensitively against the (lowercased)
    /// vocabulary; unknown terms are skipped, so a query whose every term
    /// is unknown produces an empty result set.
    pub fn execute(&self, line: &[u8]) -> SearchResults {
        let (query_id, terms) = parse_query(line);

        let total_docs = self.reader.doc_count();
        let avg_doc_length = self.reader.average_length();
        let mut accumulators = vec![0.0f64; total_docs];

        for term in &terms {
            let Some(postings) = self.reader.postings(term) else {
                continue;
            };
            let term_idf = idf(total_docs, postings.doc_freq());
            for posting in postings.iter() {
                let doc_length = self.reader.doc_length(posting.doc_id) as f64;
                accumulators[posting.doc_id.as_usize()] += self.scorer.score(
                    term_idf,
                    posting.term_freq as f64,
                    doc_length,
                    avg_doc_length,
                );
            }
        }

        // Zero accumulators never rank, which is also what cuts off a term
        // that occurs in every document (idf 0).
        let mut hits: Vec<ScoredDocument> = accumulators
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score > 0.0)
            .map(|(doc, &score)| ScoredDocument {
                doc_id: DocId(doc as i32),
                score,
            })
            .collect();

        // Highest score first; equal scores break to the highest docid.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.doc_id.cmp(&a.doc_id))
        });
        hits.truncate(TOP_K);

        SearchResults { query_id, hits }
    }
}
