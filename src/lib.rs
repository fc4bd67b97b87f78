//! WORDSIM - Word Embedding Similarity
//!
//! Nearest-neighbor word similarity by cosine distance over small in-memory
//! embedding tables, with a trainer seam for plugging in any embedding
//! library.

pub mod combine;
pub mod error;
pub mod index;
pub mod similarity;
pub mod table;
pub mod trainer;

pub use combine::{combine, CombineOp};
pub use error::SimilarityError;
pub use index::{Neighbor, SimilarityIndex};
pub use similarity::{cosine_similarity, dot_product, magnitude, VectorOps};
pub use table::EmbeddingTable;
pub use trainer::EmbeddingTrainer;
