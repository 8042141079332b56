//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings with no external
//! dependencies - always works offline.

use async_trait::async_trait;

use souq_domain::error::Result;
use souq_domain::ports::EmbeddingProvider;
use souq_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived deterministically from the input
/// text, so identical texts always embed identically and similarity
/// results are reproducible without an embedding service.
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a provider with the default vector width
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing vectors of the given width
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Generate a deterministic, unit-normalized embedding from text
    fn deterministic_embedding(&self, text: &str) -> Vec<f32> {
        let bytes = text.as_bytes();
        let hash = text.chars().map(|c| c as u32).sum::<u32>();
        let base_value = (hash % 1000) as f32 / 1000.0;

        let mut vector: Vec<f32> = (0..self.dimensions)
            .map(|i| {
                let byte_val = if bytes.is_empty() {
                    0
                } else {
                    bytes[i % bytes.len()]
                };
                let variation = ((byte_val as f32 + i as f32) * 0.01).sin();
                base_value + variation * 0.1
            })
            .collect();

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in &mut vector {
                *val /= norm;
            }
        }

        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: self.deterministic_embedding(text),
                model: "null-test".to_string(),
                dimensions: self.dimensions,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
