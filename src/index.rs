//! Similarity Index
//!
//! Immutable label-to-vector table with ranked nearest-neighbor queries by
//! cosine similarity. Built once, then safe for concurrent reads.

use hashbrown::HashMap;
use tracing::debug;

use crate::error::SimilarityError;
use crate::similarity::cosine_similarity;
use crate::table::EmbeddingTable;
use crate::trainer::EmbeddingTrainer;

/// A ranked query result
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// The matched label
    pub label: String,
    /// Cosine similarity to the query, in [-1, 1]
    pub score: f32,
}

/// Immutable nearest-neighbor index over labeled embedding vectors
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    /// Labels in insertion order
    labels: Vec<String>,
    /// Vectors parallel to `labels`
    vectors: Vec<Vec<f32>>,
    /// Label -> slot for O(1) lookup by label
    slots: HashMap<String, usize>,
    /// Shared dimensionality of every stored vector
    dimension: usize,
}

impl SimilarityIndex {
    /// Build an index from parallel labels and vectors
    ///
    /// Every vector must have the same nonzero length, and labels must be
    /// unique; duplicates are rejected rather than overwritten so rankings
    /// never depend on which copy survived.
    pub fn build(
        labels: Vec<String>,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Self, SimilarityError> {
        if labels.len() != vectors.len() {
            return Err(SimilarityError::DimensionMismatch {
                expected: labels.len(),
                found: vectors.len(),
            });
        }

        let dimension = vectors.first().map(|v| v.len()).unwrap_or(0);
        for vector in &vectors {
            if vector.len() != dimension {
                return Err(SimilarityError::DimensionMismatch {
                    expected: dimension,
                    found: vector.len(),
                });
            }
        }

        let mut slots = HashMap::with_capacity(labels.len());
        for (slot, label) in labels.iter().enumerate() {
            if slots.insert(label.clone(), slot).is_some() {
                return Err(SimilarityError::DuplicateLabel(label.clone()));
            }
        }

        debug!(entries = labels.len(), dimension, "built similarity index");

        Ok(Self {
            labels,
            vectors,
            slots,
            dimension,
        })
    }

    /// Build an index from a trainer's output table
    pub fn from_table(table: EmbeddingTable) -> Result<Self, SimilarityError> {
        Self::build(table.labels, table.vectors)
    }

    /// Train embeddings over `sentences` and index the result
    pub fn from_trainer<T: EmbeddingTrainer>(
        trainer: &mut T,
        sentences: &[Vec<String>],
        epochs: usize,
    ) -> Result<Self, SimilarityError> {
        trainer.build_vocabulary(sentences);
        let table = trainer.train(sentences, epochs);
        Self::from_table(table)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the index has no entries
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Shared dimensionality of stored vectors
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Labels in insertion order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the stored vector for a label
    pub fn vector(&self, label: &str) -> Option<&[f32]> {
        self.slots.get(label).map(|&slot| self.vectors[slot].as_slice())
    }

    /// Find the `k` nearest entries to `query` by cosine similarity
    ///
    /// Results are ordered by descending score; ties keep insertion order.
    /// Asking for more than `len()` entries returns the whole table ranked.
    pub fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, SimilarityError> {
        if self.is_empty() {
            return Err(SimilarityError::EmptyIndex);
        }
        if query.len() != self.dimension {
            return Err(SimilarityError::DimensionMismatch {
                expected: self.dimension,
                found: query.len(),
            });
        }

        let mut results: Vec<Neighbor> = self
            .labels
            .iter()
            .zip(self.vectors.iter())
            .map(|(label, vector)| Neighbor {
                label: label.clone(),
                score: cosine_similarity(query, vector),
            })
            .collect();

        // Stable sort keeps insertion order among equal scores
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(k);

        Ok(results)
    }

    /// Find the `k` nearest entries to a stored label's own vector
    ///
    /// The query label itself is excluded from the results.
    pub fn nearest_to_label(&self, label: &str, k: usize) -> Result<Vec<Neighbor>, SimilarityError> {
        let query = self
            .vector(label)
            .ok_or_else(|| SimilarityError::UnknownLabel(label.to_string()))?
            .to_vec();

        let mut results = self.nearest(&query, k.saturating_add(1))?;
        results.retain(|n| n.label != label);
        results.truncate(k);
        Ok(results)
    }
}
