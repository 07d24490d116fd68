use std::fs::File;
use std::io::{BufWriter, Write};

use bytes::BufMut;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::Term;
use crate::index::inverted::InvertedIndex;
use crate::storage::layout::IndexLayout;

/// Serialises an `InvertedIndex` as the four on-disk artifacts,
/// overwriting any previous index in the target directory.
///
/// All integers are native-endian i32; the format is deliberately not
/// portable across differing-endian machines.
pub struct IndexWriter {
    layout: IndexLayout,
}

impl IndexWriter {
    pub fn new(layout: IndexLayout) -> Self {
        IndexWriter { layout }
    }

    pub fn write(&self, index: &InvertedIndex) -> Result<()> {
        self.write_primary_keys(index)?;
        self.write_lengths(index)?;
        self.write_postings_and_vocab(index)?;
        Ok(())
    }

    /// docids.bin: one primary key per line, in internal docid order.
    fn write_primary_keys(&self, index: &InvertedIndex) -> Result<()> {
        let mut out = BufWriter::new(File::create(self.layout.primary_keys_path())?);
        for key in index.primary_keys() {
            out.write_all(key)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }

    /// lengths.bin: one i32 token count per document.
    fn write_lengths(&self, index: &InvertedIndex) -> Result<()> {
        let mut buf = Vec::with_capacity(index.doc_count() * 4);
        for &length in index.doc_lengths() {
            buf.put_i32_ne(length);
        }
        let mut out = File::create(self.layout.lengths_path())?;
        out.write_all(&buf)?;
        Ok(())
    }

    /// postings.bin and vocab.bin, written in lock-step: each term's
    /// postings are appended and the vocabulary records where they landed.
    ///
    /// Terms go out in ascending byte order so that two runs over the same
    /// corpus produce byte-identical files; a reader never depends on the
    /// order, only on the recorded (offset, size) pairs.
    fn write_postings_and_vocab(&self, index: &InvertedIndex) -> Result<()> {
        let mut terms: Vec<&Term> = index.postings().keys().collect();
        terms.sort();

        let mut postings_out = BufWriter::new(File::create(self.layout.postings_path())?);
        let mut vocab_out = BufWriter::new(File::create(self.layout.vocab_path())?);

        let mut written: usize = 0;
        let mut list_buf = Vec::new();
        let mut record_buf = Vec::new();

        for term in terms {
            let list = &index.postings()[term];

            list_buf.clear();
            for posting in list.iter() {
                list_buf.put_i32_ne(posting.doc_id.0);
                list_buf.put_i32_ne(posting.term_freq);
            }
            postings_out.write_all(&list_buf)?;

            let offset = i32::try_from(written).map_err(|_| {
                Error::new(
                    ErrorKind::Format,
                    "postings file exceeds the 2 GiB format limit".to_string(),
                )
            })?;

            record_buf.clear();
            record_buf.put_u8(term.len() as u8);
            record_buf.put_slice(term.as_bytes());
            record_buf.put_u8(0); // null termination
            record_buf.put_i32_ne(offset);
            record_buf.put_i32_ne(list_buf.len() as i32);
            vocab_out.write_all(&record_buf)?;

            written += list_buf.len();
        }

        postings_out.flush()?;
        vocab_out.flush()?;
        Ok(())
    }
}
