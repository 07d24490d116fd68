use crate::core::types::DocId;

/// One document's entry in a postings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: i32,
}

/// Postings for one term, held as the interleaved sequence
/// `[docid, tf, docid, tf, ...]` exactly as it is laid out on disk.
///
/// Note: Sorted by doc_id because documents are indexed in docid order.
#[derive(Debug, Default)]
pub struct PostingList {
    data: Vec<i32>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList { data: Vec::new() }
    }

    /// Record one occurrence of the term in `doc_id`.
    ///
    /// Documents arrive in ascending docid order, so the last pair is
    /// always the most recent one: either bump its tf or start a new pair.
    pub fn record(&mut self, doc_id: DocId) {
        let n = self.data.len();
        if n == 0 || self.data[n - 2] != doc_id.0 {
            self.data.push(doc_id.0);
            self.data.push(1);
        } else {
            self.data[n - 1] += 1;
        }
    }

    /// Number of documents containing this term (document frequency)
    pub fn doc_freq(&self) -> usize {
        self.data.len() / 2
    }

    /// Size of the serialised list in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len() * 4
    }

    pub fn iter(&self) -> impl Iterator<Item = Posting> + '_ {
        self.data.chunks_exact(2).map(|pair| Posting {
            doc_id: DocId(pair[0]),
            term_freq: pair[1],
        })
    }
}
