//! Embedding Table
//!
//! Label-to-vector mapping produced by a trainer, plus a simple line-oriented
//! text persistence format.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

// Table file format: one record per line, whitespace separated:
// `label v1 v2 ... vD`. Every record carries the same number of components.

/// Parallel labels and vectors, as produced by an embedding trainer
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    pub labels: Vec<String>,
    pub vectors: Vec<Vec<f32>>,
}

impl EmbeddingTable {
    pub fn new(labels: Vec<String>, vectors: Vec<Vec<f32>>) -> Self {
        Self { labels, vectors }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Dimensionality of the first vector, or 0 for an empty table
    pub fn dimension(&self) -> usize {
        self.vectors.first().map(|v| v.len()).unwrap_or(0)
    }

    /// Write the table as text records
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        for (label, vector) in self.labels.iter().zip(self.vectors.iter()) {
            write!(writer, "{}", label)?;
            for value in vector {
                write!(writer, " {}", value)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;

        info!(entries = self.len(), path = %path.as_ref().display(), "saved embedding table");
        Ok(())
    }

    /// Read a table from text records
    ///
    /// Blank lines are skipped. A record without a vector component, or with
    /// an unparsable component, is rejected as invalid data.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut labels = Vec::new();
        let mut vectors = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let label = parts.next().unwrap_or_default().to_string();
            let vector = parts
                .map(|p| {
                    p.parse::<f32>().map_err(|e| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("line {}: bad component {:?}: {}", line_no + 1, p, e),
                        )
                    })
                })
                .collect::<io::Result<Vec<f32>>>()?;

            if vector.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: record has no vector components", line_no + 1),
                ));
            }

            labels.push(label);
            vectors.push(vector);
        }

        info!(entries = labels.len(), path = %path.as_ref().display(), "loaded embedding table");
        Ok(Self { labels, vectors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> EmbeddingTable {
        EmbeddingTable::new(
            vec!["united".into(), "states".into(), "america".into()],
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        )
    }

    #[test]
    fn test_dimension() {
        assert_eq!(sample_table().dimension(), 2);
        assert_eq!(EmbeddingTable::default().dimension(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");

        let table = sample_table();
        table.save(&path).unwrap();

        let loaded = EmbeddingTable::load(&path).unwrap();
        assert_eq!(loaded.labels, table.labels);
        assert_eq!(loaded.vectors, table.vectors);
    }

    #[test]
    fn test_load_rejects_bad_component() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, "united 1.0 not-a-number\n").unwrap();

        let err = EmbeddingTable::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_rejects_label_only_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, "united\n").unwrap();

        let err = EmbeddingTable::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, "a 1.0 0.0\n\nb 0.0 1.0\n").unwrap();

        let loaded = EmbeddingTable::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
