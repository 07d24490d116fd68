use std::path::PathBuf;

pub const PRIMARY_KEYS_FILE: &str = "docids.bin";
pub const LENGTHS_FILE: &str = "lengths.bin";
pub const POSTINGS_FILE: &str = "postings.bin";
pub const VOCAB_FILE: &str = "vocab.bin";

/// Where the four index files live. The tools use the current working
/// directory; tests point this at a temp dir.
#[derive(Debug, Clone)]
pub struct IndexLayout {
    pub base_dir: PathBuf,
}

impl IndexLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        IndexLayout {
            base_dir: base_dir.into(),
        }
    }

    pub fn current_dir() -> Self {
        IndexLayout::new(".")
    }

    pub fn primary_keys_path(&self) -> PathBuf {
        self.base_dir.join(PRIMARY_KEYS_FILE)
    }

    pub fn lengths_path(&self) -> PathBuf {
        self.base_dir.join(LENGTHS_FILE)
    }

    pub fn postings_path(&self) -> PathBuf {
        self.base_dir.join(POSTINGS_FILE)
    }

    pub fn vocab_path(&self) -> PathBuf {
        self.base_dir.join(VOCAB_FILE)
    }
}
