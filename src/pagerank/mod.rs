//! Sentence ranking
//!
//! [`standard::StandardPageRank`] scores sentences by damped power iteration
//! over their similarity graph.

pub mod standard;

/// Scores from one ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// One score per sentence, in sentence order
    pub scores: Vec<f64>,
    /// Sweeps actually run
    pub iterations: usize,
    /// L1 distance between the last two score vectors
    pub delta: f64,
    /// Whether a configured convergence threshold was reached
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new ranking result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// The `n` best sentence indices with their scores, best first
    ///
    /// Equal scores keep the lower index first, so the order is total.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.scores.iter().copied().enumerate().collect();
        ranked.sort_by(|(ia, sa), (ib, sb)| sb.total_cmp(sa).then(ia.cmp(ib)));
        ranked.truncate(n);
        ranked
    }

    /// Score of one sentence; 0 when out of range
    pub fn score(&self, sentence: usize) -> f64 {
        self.scores.get(sentence).copied().unwrap_or(0.0)
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no sentence was scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_tie_breaks_on_index() {
        let result = PageRankResult::new(vec![0.2, 0.5, 0.2, 0.5], 50, 0.0, false);

        let ids: Vec<usize> = result.top_n(3).into_iter().map(|(i, _)| i).collect();
        assert_eq!(ids, vec![1, 3, 0]);
    }

    #[test]
    fn test_top_n_larger_than_len() {
        let result = PageRankResult::new(vec![0.1, 0.3], 50, 0.0, false);
        assert_eq!(result.top_n(10), vec![(1, 0.3), (0, 0.1)]);
    }

    #[test]
    fn test_score_out_of_range() {
        let result = PageRankResult::new(vec![0.4], 1, 0.0, false);
        assert_eq!(result.score(0), 0.4);
        assert_eq!(result.score(7), 0.0);
    }
}
