use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bytes::Buf;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Term};
use crate::index::posting::Posting;
use crate::storage::layout::IndexLayout;

/// Decode a vocabulary buffer into (term, offset, size) triples.
///
/// Record layout: one length byte, the term, a null byte, then the
/// native-endian i32 offset and size of the term's postings list. The file
/// carries no header or count; it is scanned to the end.
pub fn decode_vocab(buffer: &[u8]) -> Result<Vec<(Term, i32, i32)>> {
    let mut buf = buffer;
    let mut entries = Vec::new();

    while !buf.is_empty() {
        let length = buf.get_u8() as usize;
        if length == 0 {
            return Err(Error::new(
                ErrorKind::Format,
                "vocabulary record with zero term length".to_string(),
            ));
        }
        // term + null terminator + offset + size
        if buf.remaining() < length + 9 {
            return Err(Error::new(
                ErrorKind::Format,
                "vocabulary record extends past end of file".to_string(),
            ));
        }

        let term = Term::from_bytes(&buf[..length]);
        buf.advance(length + 1);
        let offset = buf.get_i32_ne();
        let size = buf.get_i32_ne();

        if size <= 0 || size % 8 != 0 {
            return Err(Error::new(
                ErrorKind::Format,
                format!("postings size {size} is not a positive multiple of 8"),
            ));
        }

        entries.push((term, offset, size));
    }

    Ok(entries)
}

/// A whole index resident in memory: the decoded vocabulary, the raw
/// postings bytes for random access, and the two per-document vectors.
pub struct IndexReader {
    vocab: HashMap<Term, (i32, i32)>,
    postings: Vec<u8>,
    doc_lengths: Vec<i32>,
    primary_keys: Vec<Vec<u8>>,
    average_length: f64,
}

impl IndexReader {
    /// Slurp and decode the four index files.
    pub fn open(layout: &IndexLayout) -> Result<Self> {
        let vocab_bytes = read_file(&layout.vocab_path())?;
        let postings = read_file(&layout.postings_path())?;
        let lengths_bytes = read_file(&layout.lengths_path())?;
        let keys_bytes = read_file(&layout.primary_keys_path())?;

        if lengths_bytes.len() % 4 != 0 {
            return Err(Error::new(
                ErrorKind::Format,
                "lengths file is not a whole number of i32s".to_string(),
            ));
        }
        let mut doc_lengths = Vec::with_capacity(lengths_bytes.len() / 4);
        let mut buf = &lengths_bytes[..];
        while buf.has_remaining() {
            doc_lengths.push(buf.get_i32_ne());
        }

        let mut primary_keys: Vec<Vec<u8>> = keys_bytes
            .split(|&b| b == b'\n')
            .map(|line| line.to_vec())
            .collect();
        // split() leaves one empty chunk after the final newline
        if primary_keys.last().is_some_and(|line| line.is_empty()) {
            primary_keys.pop();
        }

        let mut vocab = HashMap::new();
        for (term, offset, size) in decode_vocab(&vocab_bytes)? {
            let end = offset as i64 + size as i64;
            if offset < 0 || end > postings.len() as i64 {
                return Err(Error::new(
                    ErrorKind::Format,
                    format!("term '{term}' addresses bytes outside the postings file"),
                ));
            }
            vocab.insert(term, (offset, size));
        }

        let total: i64 = doc_lengths.iter().map(|&l| l as i64).sum();
        let average_length = total as f64 / doc_lengths.len() as f64;

        Ok(IndexReader {
            vocab,
            postings,
            doc_lengths,
            primary_keys,
            average_length,
        })
    }

    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn term_count(&self) -> usize {
        self.vocab.len()
    }

    pub fn average_length(&self) -> f64 {
        self.average_length
    }

    pub fn doc_length(&self, doc_id: DocId) -> i32 {
        self.doc_lengths[doc_id.as_usize()]
    }

    pub fn doc_lengths(&self) -> &[i32] {
        &self.doc_lengths
    }

    pub fn primary_key(&self, doc_id: DocId) -> &[u8] {
        &self.primary_keys[doc_id.as_usize()]
    }

    /// (term, postings byte size) pairs, for diagnostics.
    pub fn vocab_iter(&self) -> impl Iterator<Item = (&Term, i32)> + '_ {
        self.vocab.iter().map(|(term, &(_, size))| (term, size))
    }

    /// The postings list for an exact term, if present. Query bytes are
    /// looked up as-is; the searcher never normalises them.
    pub fn postings(&self, term: &[u8]) -> Option<Postings<'_>> {
        let &(offset, size) = self.vocab.get(term)?;
        let start = offset as usize;
        Some(Postings {
            buf: &self.postings[start..start + size as usize],
        })
    }
}

/// Borrowed view of one serialised postings list.
pub struct Postings<'a> {
    buf: &'a [u8],
}

impl<'a> Postings<'a> {
    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> usize {
        self.buf.len() / 8
    }

    pub fn iter(&self) -> PostingsIter<'a> {
        PostingsIter { buf: self.buf }
    }
}

pub struct PostingsIter<'a> {
    buf: &'a [u8],
}

impl Iterator for PostingsIter<'_> {
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        if self.buf.remaining() < 8 {
            return None;
        }
        Some(Posting {
            doc_id: DocId(self.buf.get_i32_ne()),
            term_freq: self.buf.get_i32_ne(),
        })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| {
        Error::new(ErrorKind::Io, format!("{}: {}", path.display(), err))
    })
}
