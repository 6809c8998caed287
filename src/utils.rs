// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! Vector math shared by the semantic chunker.

use crate::error::AppError;

/// Cosine distance `1 - cos(a, b)`, bounded in [0, 2] for non-degenerate
/// vectors. A zero-magnitude vector yields the maximal distance 2.0 so the
/// caller treats the pair as a forced topic break instead of dividing by zero.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> Result<f32, AppError> {
    if a.len() != b.len() {
        return Err(AppError::SegmentationFailure(format!(
            "Vector dimensions mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|y| y * y).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(2.0);
    }

    Ok(1.0 - dot / (norm_a * norm_b))
}

/// Percentile of `values` with linear interpolation between order statistics.
/// `pct` is clamped to [0, 100]; an empty slice yields 0.0.
pub fn percentile(values: &[f32], pct: f64) -> f32 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = (rank - lo as f64) as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_distance_identical() {
        let v1 = vec![1.0, 0.0, 0.0];
        let v2 = vec![1.0, 0.0, 0.0];
        assert!((cosine_distance(&v1, &v2).unwrap() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_orthogonal() {
        let v1 = vec![1.0, 0.0];
        let v2 = vec![0.0, 1.0];
        assert!((cosine_distance(&v1, &v2).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_opposite() {
        let v1 = vec![1.0, 0.0];
        let v2 = vec![-1.0, 0.0];
        assert!((cosine_distance(&v1, &v2).unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_zero_vector_is_maximal() {
        let v1 = vec![0.0, 0.0];
        let v2 = vec![1.0, 0.0];
        assert!((cosine_distance(&v1, &v2).unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_error_on_mismatch() {
        let v1 = vec![1.0, 2.0];
        let v2 = vec![1.0, 2.0, 3.0];
        assert!(cosine_distance(&v1, &v2).is_err());
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&values, 50.0) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_percentile_bounds() {
        let values = vec![3.0, 1.0, 2.0];
        assert!((percentile(&values, 0.0) - 1.0).abs() < 1e-6);
        assert!((percentile(&values, 100.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_percentile_single_value() {
        assert!((percentile(&[0.7], 95.0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(percentile(&[], 95.0), 0.0);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let values = vec![0.9, 0.1, 0.5];
        assert!((percentile(&values, 50.0) - 0.5).abs() < 1e-6);
    }
}
