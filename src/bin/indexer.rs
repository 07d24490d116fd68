use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use minnow::core::error::{Error, ErrorKind, Result};
use minnow::index::indexer::Indexer;
use minnow::storage::layout::IndexLayout;
use minnow::storage::writer::IndexWriter;

/// Build a BM25 index from a TREC-style XML corpus.
///
/// Writes docids.bin, lengths.bin, postings.bin and vocab.bin to the
/// current directory, replacing any existing index.
#[derive(Parser)]
#[command(name = "indexer")]
struct Args {
    /// Corpus file to index
    infile: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    let corpus = fs::read(&args.infile).map_err(|err| {
        Error::new(ErrorKind::Io, format!("{}: {}", args.infile.display(), err))
    })?;

    let mut indexer = Indexer::new();
    indexer.index_corpus(&corpus, |count| println!("{count} documents indexed"));

    // A corpus with no <DOC> produces no files at all.
    if indexer.doc_count() == 0 {
        return Ok(());
    }

    println!("Indexed {} documents. Serialising...", indexer.doc_count());
    IndexWriter::new(IndexLayout::current_dir()).write(&indexer.finish())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
