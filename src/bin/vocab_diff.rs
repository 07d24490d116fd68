use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use minnow::core::error::{Error, ErrorKind, Result};
use minnow::core::types::Term;
use minnow::storage::reader::decode_vocab;

/// Compare two vocabulary files, reporting terms present in only one and
/// terms whose postings sizes differ.
#[derive(Parser)]
#[command(name = "vocab-diff")]
struct Args {
    left: PathBuf,
    right: PathBuf,
}

/// Listings are capped so a diff of unrelated indexes stays readable.
const MAX_LISTED: usize = 100;

fn load(path: &Path) -> Result<HashMap<Term, i32>> {
    let bytes = fs::read(path)
        .map_err(|err| Error::new(ErrorKind::Io, format!("{}: {}", path.display(), err)))?;
    Ok(decode_vocab(&bytes)?
        .into_iter()
        .map(|(term, _, size)| (term, size))
        .collect())
}

fn print_capped<T: std::fmt::Display>(items: &[T]) {
    for item in items.iter().take(MAX_LISTED) {
        println!("  {item}");
    }
    if items.len() > MAX_LISTED {
        println!("  ... {} more", items.len() - MAX_LISTED);
    }
}

fn run(args: &Args) -> Result<()> {
    let left = load(&args.left)?;
    let right = load(&args.right)?;

    let mut only_left: Vec<&Term> = left.keys().filter(|t| !right.contains_key(*t)).collect();
    only_left.sort();
    println!("These terms are only in {}", args.left.display());
    print_capped(&only_left);

    let mut only_right: Vec<&Term> = right.keys().filter(|t| !left.contains_key(*t)).collect();
    only_right.sort();
    println!();
    println!("These terms are only in {}", args.right.display());
    print_capped(&only_right);

    let mut differing: Vec<(&Term, i32, i32)> = left
        .iter()
        .filter_map(|(term, &size)| {
            let other = *right.get(term)?;
            (other != size).then_some((term, size, other))
        })
        .collect();
    differing.sort();
    println!();
    println!("These terms have differing sizes");
    let lines: Vec<String> = differing
        .iter()
        .map(|(term, l, r)| format!("{term}: {l} != {r}"))
        .collect();
    print_capped(&lines);

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
