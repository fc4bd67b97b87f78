//! Derived Query Vectors
//!
//! Elementwise arithmetic over labeled embeddings, e.g. building an analogy
//! query as the sum or difference of two stored vectors.

use crate::error::SimilarityError;

/// Elementwise operation for combining two vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    Add,
    Subtract,
}

/// Combine two equal-length vectors into a derived query vector
pub fn combine(a: &[f32], b: &[f32], op: CombineOp) -> Result<Vec<f32>, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let combined = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| match op {
            CombineOp::Add => x + y,
            CombineOp::Subtract => x - y,
        })
        .collect();

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_add() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(combine(&a, &b, CombineOp::Add).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_combine_subtract() {
        let a = vec![3.0, 2.0, 1.0];
        let b = vec![1.0, 1.0, 1.0];
        assert_eq!(
            combine(&a, &b, CombineOp::Subtract).unwrap(),
            vec![2.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_combine_dimension_mismatch() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0];
        let err = combine(&a, &b, CombineOp::Add).unwrap_err();
        assert_eq!(
            err,
            SimilarityError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }
}
