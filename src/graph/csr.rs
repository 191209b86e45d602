//! Sparse view of the similarity matrix
//!
//! Row `i` lists the sentences similar to sentence `i`, in ascending sentence
//! order, with their weights. The rank sweep walks these rows so zero cells of
//! the dense matrix cost nothing.

use super::similarity::SimilarityMatrix;

/// Similarity graph in compressed sparse row layout
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Row `i` occupies `targets[offsets[i]..offsets[i + 1]]`
    offsets: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<f64>,
    /// Row sums of the dense matrix
    outflow: Vec<f64>,
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
            weights: Vec::new(),
            outflow: Vec::new(),
        }
    }
}

impl CsrGraph {
    /// Keep the non-zero cells of `matrix`, row by row
    pub fn from_similarity(matrix: &SimilarityMatrix) -> Self {
        let mut graph = Self::default();
        graph.offsets.reserve(matrix.size());
        graph.outflow.reserve(matrix.size());

        for i in 0..matrix.size() {
            for (j, &weight) in matrix.row_values(i).iter().enumerate() {
                if weight > 0.0 {
                    graph.targets.push(j);
                    graph.weights.push(weight);
                }
            }
            graph.offsets.push(graph.targets.len());
            graph.outflow.push(matrix.outflow(i));
        }

        graph
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.outflow.len()
    }

    /// Check if the graph has no sentences
    pub fn is_empty(&self) -> bool {
        self.outflow.is_empty()
    }

    /// Similar sentences of `sentence` with their weights
    pub fn edges(&self, sentence: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let row = self.offsets[sentence]..self.offsets[sentence + 1];
        self.targets[row.clone()]
            .iter()
            .copied()
            .zip(self.weights[row].iter().copied())
    }

    /// Total similarity of `sentence` to all others
    pub fn outflow(&self, sentence: usize) -> f64 {
        self.outflow[sentence]
    }

    /// Stored edges; each similar pair appears once per endpoint
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Sentences with no similar sentence at all
    pub fn orphans(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| self.offsets[i] == self.offsets[i + 1])
            .collect()
    }
}
