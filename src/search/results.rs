use std::io::{self, Write};

use crate::core::types::DocId;
use crate::storage::reader::IndexReader;

/// Run tag emitted in the last column of every result line.
pub const RUN_TAG: &str = "JASSjr";

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub doc_id: DocId,
    pub score: f64,
}

/// Ranked answer to one query, ready for TREC-eval output.
#[derive(Debug)]
pub struct SearchResults {
    pub query_id: String,
    pub hits: Vec<ScoredDocument>,
}

impl SearchResults {
    /// One line per hit: `{qid} Q0 {primary_key} {rank} {score:.4} {tag}`.
    /// Primary keys are opaque bytes and are written back verbatim.
    pub fn write_trec<W: Write>(&self, reader: &IndexReader, out: &mut W) -> io::Result<()> {
        for (rank, hit) in self.hits.iter().enumerate() {
            write!(out, "{} Q0 ", self.query_id)?;
            out.write_all(reader.primary_key(hit.doc_id))?;
            writeln!(out, " {} {:.4} {}", rank + 1, hit.score, RUN_TAG)?;
        }
        Ok(())
    }
}
