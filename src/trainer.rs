//! Embedding Trainer Seam
//!
//! Narrow interface for whatever embedding library produces the vectors.
//! The index only ever sees the resulting [`EmbeddingTable`], so a concrete
//! binding (skip-gram, GloVe, a remote service) stays out of the query core.

use crate::table::EmbeddingTable;

/// A source of trained word embeddings
///
/// `sentences` are pre-tokenized: one `Vec<String>` per sentence. Text
/// cleaning and tokenization happen upstream of this trait.
pub trait EmbeddingTrainer {
    /// Scan the corpus and fix the vocabulary before training
    fn build_vocabulary(&mut self, sentences: &[Vec<String>]);

    /// Train for `epochs` passes and return the token-to-vector table
    fn train(&mut self, sentences: &[Vec<String>], epochs: usize) -> EmbeddingTable;
}
