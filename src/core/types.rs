use std::borrow::Borrow;
use std::fmt;

/// Terms longer than this are truncated before indexing.
pub const MAX_TERM_BYTES: usize = 255;

/// Dense zero-based document number assigned in corpus order.
/// Stored on disk as a native-endian i32, so it is i32 here too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub i32);

impl DocId {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dictionary term: a byte string of 1..=255 bytes.
///
/// The indexer lowercases and truncates before constructing one; the
/// searcher builds terms from raw query bytes without normalisation, which
/// is why `Fox` misses an index containing `fox`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(Vec<u8>);

impl Term {
    /// Normalise a corpus token: ASCII lowercase, then truncate.
    pub fn from_token(raw: &[u8]) -> Self {
        let end = raw.len().min(MAX_TERM_BYTES);
        let mut bytes = raw[..end].to_vec();
        bytes.make_ascii_lowercase();
        Term(bytes)
    }

    /// A term taken verbatim, as the searcher and vocabulary decoder do.
    pub fn from_bytes(raw: &[u8]) -> Self {
        Term(raw.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// Lets a HashMap<Term, _> be probed with raw query bytes.
impl Borrow<[u8]> for Term {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
