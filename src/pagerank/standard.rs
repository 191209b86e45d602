//! Damped power iteration over the sentence graph
//!
//! ```text
//! next[i] = (1 - d) / N + d * Σ_j prev[j] * sim[j][i] / outflow[j]
//! ```
//!
//! Sweeps are synchronous: `next` is computed from the complete `prev` vector,
//! and the two buffers are swapped afterwards. A sentence with zero outflow
//! sends nothing anywhere. Nothing is renormalized, so no score ever drops
//! below the teleport term `(1 - d) / N`.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::types::{SummarizerConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS};

/// Sentence ranker with a fixed sweep budget
#[derive(Debug, Clone, PartialEq)]
pub struct StandardPageRank {
    pub damping: f64,
    /// Sweeps to run; all of them unless `threshold` is set
    pub max_iterations: usize,
    /// Stop once the L1 change of a sweep is at or below this
    pub threshold: Option<f64>,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threshold: None,
        }
    }
}

impl StandardPageRank {
    /// Ranker with damping 0.85 and a 50-sweep budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranker settings taken from a summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the sweep budget
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Allow stopping before the budget is spent
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Rank the sentences of a dense similarity matrix
    pub fn run_matrix(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        self.run(&CsrGraph::from_similarity(matrix))
    }

    /// Rank the sentences of a sparse similarity graph
    ///
    /// Every sentence starts at `1 / N`. An empty graph yields an empty result
    /// without iterating.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.len();
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, false);
        }

        let mut prev = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut delta = 0.0;
        let mut iterations = 0;

        while iterations < self.max_iterations {
            delta = self.sweep(graph, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
            iterations += 1;

            tracing::trace!(iteration = iterations, delta, "rank sweep");

            if self.reached_threshold(delta) {
                break;
            }
        }

        let converged = self.reached_threshold(delta);
        tracing::debug!(sentences = n, iterations, delta, converged, "ranking done");

        PageRankResult::new(prev, iterations, delta, converged)
    }

    /// One synchronous update of `next` from `prev`; returns the L1 change
    fn sweep(&self, graph: &CsrGraph, prev: &[f64], next: &mut [f64]) -> f64 {
        let teleport = (1.0 - self.damping) / prev.len() as f64;

        // Scatter in ascending source order; the per-target sums are then
        // accumulated in sentence order and runs are bit-for-bit repeatable.
        next.fill(0.0);
        for (j, &score) in prev.iter().enumerate() {
            let outflow = graph.outflow(j);
            if outflow == 0.0 {
                continue;
            }
            for (i, weight) in graph.edges(j) {
                next[i] += score * weight / outflow;
            }
        }

        let mut delta = 0.0;
        for (value, old) in next.iter_mut().zip(prev) {
            *value = teleport + self.damping * *value;
            delta += (*value - old).abs();
        }
        delta
    }

    fn reached_threshold(&self, delta: f64) -> bool {
        self.threshold.is_some_and(|t| delta <= t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::AlphabeticTokenizer;
    use crate::types::Sentence;

    fn matrix_for(texts: &[&str]) -> SimilarityMatrix {
        let tokenizer = AlphabeticTokenizer::new();
        let sentences: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::from_text(*t, i, &tokenizer))
            .collect();
        SimilarityMatrix::build(&sentences)
    }

    fn cycle() -> SimilarityMatrix {
        matrix_for(&["red blue", "blue green", "green red"])
    }

    /// First sentence shares one word with each of the others; they share none
    fn hub_and_spokes() -> SimilarityMatrix {
        matrix_for(&["alpha beta gamma", "alpha one", "beta two", "gamma three"])
    }

    fn cats_and_dogs() -> SimilarityMatrix {
        matrix_for(&["cats chase mice", "dogs chase cats", "birds fly high"])
    }

    #[test]
    fn test_regular_graph_stays_uniform() {
        let result = StandardPageRank::new().run_matrix(&cycle());

        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hub_outranks_spokes() {
        let result = StandardPageRank::new().run_matrix(&hub_and_spokes());

        assert!(result.scores[1..].iter().all(|&s| result.scores[0] > s));
    }

    #[test]
    fn test_runs_full_budget_without_threshold() {
        let result = StandardPageRank::new().run_matrix(&hub_and_spokes());

        assert_eq!(result.iterations, 50);
        assert!(!result.converged);
    }

    #[test]
    fn test_threshold_stops_early() {
        let result = StandardPageRank::new()
            .with_max_iterations(1000)
            .with_threshold(1e-9)
            .run_matrix(&hub_and_spokes());

        assert!(result.converged);
        assert!(result.iterations < 1000);
        assert!(result.delta <= 1e-9);
    }

    #[test]
    fn test_orphan_sits_on_teleport_floor() {
        let result = StandardPageRank::new().run_matrix(&cats_and_dogs());

        assert!((result.scores[2] - 0.15 / 3.0).abs() < 1e-12);
        assert!(result.scores[0] > result.scores[2]);
        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_orphan_mass_is_lost() {
        let result = StandardPageRank::new().run_matrix(&cats_and_dogs());

        let total: f64 = result.scores.iter().sum();
        assert!(total < 1.0);
    }

    #[test]
    fn test_single_sentence() {
        let result = StandardPageRank::new().run_matrix(&matrix_for(&["lone sentence"]));

        assert_eq!(result.len(), 1);
        assert!((result.scores[0] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_first_sweep_by_hand() {
        // sim(0,1) is the whole outflow of both, so each passes its full 1/3
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .run_matrix(&cats_and_dogs());

        let teleport = 0.15 / 3.0;
        assert!((result.scores[0] - (teleport + 0.85 / 3.0)).abs() < 1e-12);
        assert!((result.scores[1] - (teleport + 0.85 / 3.0)).abs() < 1e-12);
        assert!((result.scores[2] - teleport).abs() < 1e-12);
    }

    #[test]
    fn test_higher_damping_favors_hub() {
        let matrix = hub_and_spokes();

        let low = StandardPageRank::new().with_damping(0.5).run_matrix(&matrix);
        let high = StandardPageRank::new().with_damping(0.95).run_matrix(&matrix);

        assert!(high.scores[0] - high.scores[1] > low.scores[0] - low.scores[1]);
    }

    #[test]
    fn test_matches_dense_formula_exactly() {
        let matrix = matrix_for(&[
            "The council met on Monday to debate the budget.",
            "The budget cuts funding for parks and libraries.",
            "Library staff protested outside the council chamber.",
            "Parks officials warned of closures.",
            "A storm is expected on Friday.",
            "The mayor will sign the budget next week.",
        ]);
        let n = matrix.size();
        let d = 0.85;

        let mut expected = vec![1.0 / n as f64; n];
        for _ in 0..50 {
            expected = (0..n)
                .map(|i| {
                    let mut sum = 0.0;
                    for (j, &score) in expected.iter().enumerate() {
                        if matrix.outflow(j) > 0.0 {
                            sum += score * matrix.get(j, i) / matrix.outflow(j);
                        }
                    }
                    (1.0 - d) / n as f64 + d * sum
                })
                .collect();
        }

        let result = StandardPageRank::new().run_matrix(&matrix);
        assert_eq!(result.scores, expected);
    }

    #[test]
    fn test_repeat_runs_identical() {
        let matrix = hub_and_spokes();
        let ranker = StandardPageRank::new();

        assert_eq!(ranker.run_matrix(&matrix), ranker.run_matrix(&matrix));
    }

    #[test]
    fn test_from_config() {
        let config = SummarizerConfig::default()
            .with_damping(0.7)
            .with_convergence_threshold(1e-4);
        let ranker = StandardPageRank::from_config(&config);

        assert_eq!(ranker.damping, 0.7);
        assert_eq!(ranker.max_iterations, 50);
        assert_eq!(ranker.threshold, Some(1e-4));
    }
}
