use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use minnow::core::types::{DocId, Term};
use minnow::index::indexer::Indexer;
use minnow::search::executor::QueryExecutor;
use minnow::storage::layout::IndexLayout;
use minnow::storage::reader::{IndexReader, decode_vocab};
use minnow::storage::writer::IndexWriter;

const TWO_DOCS: &[u8] = b"<DOC><DOCNO>A-1</DOCNO>the quick brown fox</DOC>\n\
                          <DOC><DOCNO>A-2</DOCNO>the lazy dog</DOC>\n";

fn build(corpus: &[u8]) -> (TempDir, IndexLayout) {
    let dir = tempfile::tempdir().unwrap();
    let layout = IndexLayout::new(dir.path());
    let mut indexer = Indexer::new();
    indexer.index_corpus(corpus, |_| {});
    IndexWriter::new(layout.clone()).write(&indexer.finish()).unwrap();
    (dir, layout)
}

fn search(reader: &IndexReader, query: &[u8]) -> String {
    let results = QueryExecutor::new(reader).execute(query);
    let mut out = Vec::new();
    results.write_trec(reader, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn two_documents_one_shared_term() {
    let (_dir, layout) = build(TWO_DOCS);
    let reader = IndexReader::open(&layout).unwrap();

    assert_eq!(reader.doc_count(), 2);
    assert_eq!(reader.primary_key(DocId(0)), b"A-1");
    assert_eq!(reader.primary_key(DocId(1)), b"A-2");
    assert_eq!(reader.doc_lengths(), &[5, 4]);
    assert_eq!(reader.average_length(), 4.5);

    // "the" is in both documents, so its idf is zero and nothing prints.
    assert_eq!(search(&reader, b"the"), "");

    let out = search(&reader, b"fox");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    let fields: Vec<&str> = lines[0].split(' ').collect();
    assert_eq!(fields[0], "0");
    assert_eq!(fields[1], "Q0");
    assert_eq!(fields[2], "A-1");
    assert_eq!(fields[3], "1");
    assert_eq!(fields[5], "JASSjr");
    // Four decimal digits, always.
    assert_eq!(fields[4].split('.').nth(1).unwrap().len(), 4);
}

#[test]
fn query_identifier_prefixes_every_line() {
    let (_dir, layout) = build(TWO_DOCS);
    let reader = IndexReader::open(&layout).unwrap();

    let out = search(&reader, b"301 lazy dog");
    for line in out.lines() {
        assert!(line.starts_with("301 Q0 "), "line was: {line}");
    }
    assert!(!out.is_empty());

    let out = search(&reader, b"lazy dog");
    assert!(out.lines().all(|l| l.starts_with("0 Q0 ")));
}

#[test]
fn oversized_tokens_truncate_to_255_bytes() {
    let long_token: String = "a".repeat(300);
    let corpus = format!("<DOC><DOCNO>B-1</DOCNO>{long_token} filler</DOC>");
    let (_dir, layout) = build(corpus.as_bytes());
    let reader = IndexReader::open(&layout).unwrap();

    let truncated = "a".repeat(255);
    assert_eq!(search(&reader, truncated.as_bytes()).lines().count(), 1);
    assert_eq!(search(&reader, long_token.as_bytes()), "");

    // A token of exactly 255 bytes survives whole.
    let exact: String = "b".repeat(255);
    let corpus = format!("<DOC><DOCNO>B-2</DOCNO>{exact} filler</DOC>");
    let (_dir, layout) = build(corpus.as_bytes());
    let reader = IndexReader::open(&layout).unwrap();
    assert_eq!(search(&reader, exact.as_bytes()).lines().count(), 1);
}

#[test]
fn result_lists_cut_off_at_one_thousand() {
    // 1500 documents all containing "x": idf = ln(1) = 0, nothing prints.
    let mut corpus = String::new();
    for i in 0..1500 {
        corpus.push_str(&format!("<DOC><DOCNO>D-{i}</DOCNO>x</DOC>\n"));
    }
    let (_dir, layout) = build(corpus.as_bytes());
    let reader = IndexReader::open(&layout).unwrap();
    assert_eq!(search(&reader, b"x"), "");

    // "x" in 1100 of 1500: positive idf, capped at 1000 lines.
    let mut corpus = String::new();
    for i in 0..1500 {
        let body = if i < 1100 { "x" } else { "y" };
        corpus.push_str(&format!("<DOC><DOCNO>D-{i}</DOCNO>{body}</DOC>\n"));
    }
    let (_dir, layout) = build(corpus.as_bytes());
    let reader = IndexReader::open(&layout).unwrap();
    assert_eq!(search(&reader, b"x").lines().count(), 1000);
}

#[test]
fn indexing_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let layout = IndexLayout::new(dir.path());

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let mut indexer = Indexer::new();
        indexer.index_corpus(TWO_DOCS, |_| {});
        IndexWriter::new(layout.clone()).write(&indexer.finish()).unwrap();
        snapshots.push((
            fs::read(layout.primary_keys_path()).unwrap(),
            fs::read(layout.lengths_path()).unwrap(),
            fs::read(layout.postings_path()).unwrap(),
            fs::read(layout.vocab_path()).unwrap(),
        ));
    }
    assert_eq!(snapshots[0], snapshots[1]);
}

#[test]
fn vocabulary_exactly_covers_postings_file() {
    let (_dir, layout) = build(TWO_DOCS);

    let vocab_bytes = fs::read(layout.vocab_path()).unwrap();
    let postings_len = fs::metadata(layout.postings_path()).unwrap().len() as i64;

    let mut regions: Vec<(i32, i32)> = decode_vocab(&vocab_bytes)
        .unwrap()
        .into_iter()
        .map(|(_, offset, size)| (offset, size))
        .collect();
    regions.sort();

    let mut expected_offset = 0i64;
    for (offset, size) in regions {
        assert_eq!(offset as i64, expected_offset, "gap or overlap in postings");
        expected_offset += size as i64;
    }
    assert_eq!(expected_offset, postings_len);
}

#[test]
fn vocabulary_round_trips() {
    let corpus = b"<DOC><DOCNO>R-1</DOCNO>alpha beta alpha</DOC>\
                   <DOC><DOCNO>R-2</DOCNO>beta gamma</DOC>";
    let (_dir, layout) = build(corpus);

    let vocab_bytes = fs::read(layout.vocab_path()).unwrap();
    let decoded: HashMap<Term, (i32, i32)> = decode_vocab(&vocab_bytes)
        .unwrap()
        .into_iter()
        .map(|(term, offset, size)| (term, (offset, size)))
        .collect();

    // alpha: one doc, tf 2 -> 8 bytes. beta: two docs -> 16 bytes.
    assert_eq!(decoded[&Term::from_token(b"alpha")].1, 8);
    assert_eq!(decoded[&Term::from_token(b"beta")].1, 16);
    assert_eq!(decoded.len(), 5); // alpha beta gamma r-1 r-2
}

#[test]
fn postings_are_monotonic_and_consistent() {
    let corpus = b"<DOC><DOCNO>M-1</DOCNO>one two two three</DOC>\
                   <DOC><DOCNO>M-2</DOCNO>two three three</DOC>\
                   <DOC><DOCNO>M-3</DOCNO>three</DOC>";
    let (_dir, layout) = build(corpus);
    let reader = IndexReader::open(&layout).unwrap();

    let vocab_bytes = fs::read(layout.vocab_path()).unwrap();
    for (term, _, _) in decode_vocab(&vocab_bytes).unwrap() {
        let postings = reader.postings(term.as_bytes()).unwrap();
        let mut last_doc = -1i32;
        let mut tf_sum = 0i64;
        let mut length_sum = 0i64;
        for posting in postings.iter() {
            assert!(posting.doc_id.0 > last_doc, "docids must strictly ascend");
            assert!(posting.term_freq >= 1);
            last_doc = posting.doc_id.0;
            tf_sum += posting.term_freq as i64;
            length_sum += reader.doc_length(posting.doc_id) as i64;
        }
        assert!(tf_sum <= length_sum);
    }

    let three = reader.postings(b"three").unwrap();
    let freqs: Vec<i32> = three.iter().map(|p| p.term_freq).collect();
    assert_eq!(freqs, vec![1, 2, 1]);
}

#[test]
fn missing_index_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let layout = IndexLayout::new(dir.path());
    assert!(IndexReader::open(&layout).is_err());
}
