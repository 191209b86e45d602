//! Sentence similarity matrix
//!
//! Cosine similarity over word sets: `|Vi ∩ Vj| / sqrt(|Vi| * |Vj|)`.
//! The matrix is dense and row-major; articles rarely exceed a few hundred
//! sentences.

use crate::types::Sentence;
use rayon::prelude::*;

/// Sentence count from which rows are computed in parallel
pub const PARALLEL_THRESHOLD: usize = 256;

/// Similarity between two sentences
///
/// The denominator product is floored to 1 so a pair involving an empty word
/// set scores 0 instead of dividing by zero.
pub fn sentence_similarity(a: &Sentence, b: &Sentence) -> f64 {
    let shared = a.shared_words(b) as f64;
    let product = a.word_count() * b.word_count();
    let denom = (product.max(1) as f64).sqrt();
    shared / denom
}

/// A square, symmetric sentence-by-sentence similarity matrix
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityMatrix {
    size: usize,
    /// Row-major scores, `size * size` entries
    values: Vec<f64>,
    /// Row sums, used as outflow by the ranker
    row_sums: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix for a sentence sequence
    pub fn build(sentences: &[Sentence]) -> Self {
        if sentences.len() >= PARALLEL_THRESHOLD {
            Self::build_parallel(sentences)
        } else {
            Self::build_sequential(sentences)
        }
    }

    /// Build row by row on the current thread
    pub fn build_sequential(sentences: &[Sentence]) -> Self {
        let rows: Vec<Vec<f64>> = (0..sentences.len())
            .map(|i| Self::row(sentences, i))
            .collect();
        Self::from_rows(rows)
    }

    /// Build rows on the rayon pool
    ///
    /// Every cell is computed independently, so the result is identical to
    /// [`SimilarityMatrix::build_sequential`].
    pub fn build_parallel(sentences: &[Sentence]) -> Self {
        let rows: Vec<Vec<f64>> = (0..sentences.len())
            .into_par_iter()
            .map(|i| Self::row(sentences, i))
            .collect();
        Self::from_rows(rows)
    }

    fn row(sentences: &[Sentence], i: usize) -> Vec<f64> {
        sentences
            .iter()
            .enumerate()
            .map(|(j, other)| {
                if i == j {
                    0.0
                } else {
                    sentence_similarity(&sentences[i], other)
                }
            })
            .collect()
    }

    fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let size = rows.len();
        let row_sums = rows.iter().map(|r| r.iter().sum()).collect();
        let values = rows.into_iter().flatten().collect();
        Self {
            size,
            values,
            row_sums,
        }
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between sentence `i` and sentence `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// All similarities of sentence `i`
    pub fn row_values(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Sum of sentence `i`'s similarities to every other sentence
    pub fn outflow(&self, i: usize) -> f64 {
        self.row_sums[i]
    }

    /// Sentences whose similarity to every other sentence is zero
    pub fn orphans(&self) -> Vec<usize> {
        (0..self.size).filter(|&i| self.row_sums[i] == 0.0).collect()
    }
}
