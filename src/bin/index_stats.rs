use std::process;

use clap::{Parser, ValueEnum};

use minnow::core::error::Result;
use minnow::core::stats::IndexStats;
use minnow::storage::layout::IndexLayout;
use minnow::storage::reader::IndexReader;

/// Report statistics for the index in the current directory.
#[derive(Parser)]
#[command(name = "index-stats")]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn run(args: &Args) -> Result<()> {
    let reader = IndexReader::open(&IndexLayout::current_dir())?;
    let stats = IndexStats::compute(reader.doc_lengths(), reader.vocab_iter());

    match args.format {
        Format::Table => {
            println!("Documents:        {}", stats.documents);
            println!("Average length:   {}", stats.average_doc_length);
            println!("Shortest doc:     {}", stats.shortest_doc);
            println!("Longest doc:      {}", stats.longest_doc);
            println!("Terms:            {}", stats.terms);
            println!(
                "Most common term: {}",
                stats.most_common_term.as_deref().unwrap_or("-")
            );
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
