pub mod analysis;
pub mod core;
pub mod index;
pub mod scoring;
pub mod search;
pub mod storage;

/*
┌──────────────────────────── DATA FLOW ─────────────────────────────┐
│                                                                     │
│  corpus.xml ──> analysis::lexer ──> index::indexer                  │
│                                          │                          │
│                                  index::inverted                    │
│                                          │                          │
│                                  storage::writer                    │
│                                          │                          │
│        docids.bin  lengths.bin  postings.bin  vocab.bin             │
│                                          │                          │
│                                  storage::reader                    │
│                                          │                          │
│  stdin queries ──> search::executor ──> scoring::scorer             │
│                                          │                          │
│                                  search::results ──> TREC lines     │
│                                                                     │
└─────────────────────────────────────────────────────────────────────┘

The indexer half runs once and writes the four files; the searcher half
loads them immutably. The two halves share only the on-disk format.
*/
