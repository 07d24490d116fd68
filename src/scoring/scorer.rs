/// Inverse document frequency: ln(N / n), with no smoothing. A term in
/// every document scores zero and contributes nothing.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    (total_docs as f64 / doc_freq as f64).ln()
}

/// Okapi BM25 term weighting.
pub struct Bm25Scorer {
    pub k1: f64, // Term frequency saturation
    pub b: f64,  // Length normalisation strength
}

impl Default for Bm25Scorer {
    fn default() -> Self {
        Bm25Scorer { k1: 0.9, b: 0.4 }
    }
}

impl Bm25Scorer {
    /// Partial score of one posting; the caller sums these into the
    /// document's accumulator.
    pub fn score(&self, idf: f64, term_freq: f64, doc_length: f64, avg_doc_length: f64) -> f64 {
        let numerator = term_freq * (self.k1 + 1.0);
        let denominator =
            term_freq + self.k1 * (1.0 - self.b + self.b * (doc_length / avg_doc_length));
        idf * numerator / denominator
    }
}
