use crate::analysis::lexer::{Lexer, Token};
use crate::core::types::{DocId, Term};
use crate::index::inverted::InvertedIndex;

/// Streams corpus tokens through the document state machine and into an
/// `InvertedIndex`.
///
/// States: between documents (until the first `<DOC>`), in-document, and
/// expect-docno after a `<DOCNO>` tag, where the very next token of any
/// kind is captured as the document's primary key. The captured token is
/// still indexed as an ordinary term and counted in the document length;
/// only the tags themselves are excluded.
#[derive(Debug)]
pub struct Indexer {
    index: InvertedIndex,
    doc_id: i32, // -1 until the first <DOC>
    doc_length: i32,
    push_next: bool,
}

impl Indexer {
    pub fn new() -> Self {
        Indexer {
            index: InvertedIndex::new(),
            doc_id: -1,
            doc_length: 0,
            push_next: false,
        }
    }

    /// Consume a corpus. `progress` fires with the running document count
    /// every 1000 documents, starting at 0 for the first one.
    pub fn index_corpus<F: FnMut(usize)>(&mut self, corpus: &[u8], mut progress: F) {
        for token in Lexer::new(corpus) {
            self.consume(token, &mut progress);
        }
    }

    fn consume<F: FnMut(usize)>(&mut self, token: Token, progress: &mut F) {
        if token == Token::DocOpen {
            // Terminates the previous document, if any.
            if self.doc_id >= 0 {
                self.index.push_doc_length(self.doc_length);
            }
            self.doc_id += 1;
            self.doc_length = 0;
            if self.doc_id % 1000 == 0 {
                progress(self.doc_id as usize);
            }
        }

        // Between documents nothing is indexed and no capture is honoured.
        if self.doc_id < 0 {
            return;
        }

        if self.push_next {
            self.index.push_primary_key(token.text().to_vec());
            self.push_next = false;
        }
        if token == Token::DocnoOpen {
            self.push_next = true;
        }

        let Token::Word(word) = token else {
            return; // tags are not terms
        };
        self.index.record(Term::from_token(word), DocId(self.doc_id));
        self.doc_length += 1;
    }

    /// Documents seen so far.
    pub fn doc_count(&self) -> usize {
        (self.doc_id + 1) as usize
    }

    /// Flush the pending document length and hand back the index.
    pub fn finish(mut self) -> InvertedIndex {
        if self.doc_id >= 0 {
            self.index.push_doc_length(self.doc_length);
        }
        self.index
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new()
    }
}
