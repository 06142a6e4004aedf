use serde::{Deserialize, Serialize};

/// Corpus-level roll-up of segment scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    /// Segments the annotator found no errors in (score exactly zero).
    pub clean_segments: usize,
}

pub struct ScoreAggregator;

impl ScoreAggregator {
    pub fn summarize(scores: &[f64]) -> SystemSummary {
        if scores.is_empty() {
            return Self::empty();
        }

        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let sum: f64 = scores.iter().sum();
        let mean = sum / scores.len() as f64;
        let variance =
            scores.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / scores.len() as f64;
        let clean_segments = scores.iter().filter(|score| **score == 0.0).count();

        SystemSummary {
            mean,
            median: Self::percentile(&sorted, 50.0),
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            count: scores.len(),
            clean_segments,
        }
    }

    /// Average of segment scores weighted by, e.g., segment length.
    pub fn weighted_average(scores: &[f64], weights: &[f64]) -> Option<f64> {
        if scores.len() != weights.len() || scores.is_empty() {
            return None;
        }

        let weighted_sum: f64 = scores.iter().zip(weights.iter()).map(|(v, w)| v * w).sum();
        let weight_sum: f64 = weights.iter().sum();

        if weight_sum == 0.0 {
            return None;
        }

        Some(weighted_sum / weight_sum)
    }

    fn percentile(sorted_values: &[f64], percentile: f64) -> f64 {
        if sorted_values.is_empty() {
            return 0.0;
        }
        let index = (percentile / 100.0 * (sorted_values.len() - 1) as f64).round() as usize;
        sorted_values[index.min(sorted_values.len() - 1)]
    }

    fn empty() -> SystemSummary {
        SystemSummary {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            count: 0,
            clean_segments: 0,
        }
    }
}
