use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use clap::Parser;

use minnow::core::error::Result;
use minnow::search::executor::QueryExecutor;
use minnow::storage::layout::IndexLayout;
use minnow::storage::reader::IndexReader;

/// Answer ranked queries against the index in the current directory.
///
/// Queries arrive one per line on stdin until end-of-stream; results go to
/// stdout in TREC-eval format. A leading run of digits on a query line is
/// taken as the TREC query identifier.
#[derive(Parser)]
#[command(name = "searcher")]
struct Args {}

fn run() -> Result<()> {
    let reader = IndexReader::open(&IndexLayout::current_dir())?;
    let executor = QueryExecutor::new(&reader);

    let mut input = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let results = executor.execute(&line);
        results.write_trec(&reader, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let _args = Args::parse();
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
