use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text a product embeds as: name, description and category space-joined,
/// empty fields dropped, in that order.
///
/// Ranking quality is coupled to this exact composition; tests pin it.
pub fn compose_product_text(name: &str, description: &str, category: Option<&str>) -> String {
    [Some(name), Some(description), category]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Semantic Embedding Interface
///
/// Defines the contract for providers that transform text into semantic
/// embeddings. The abstraction keeps the subsystem independent of any
/// specific embedding service; swapping providers touches one adapter.
///
/// # Output invariant
///
/// Every returned embedding has exactly the store's fixed width: adapters
/// whose native dimensionality differs pad with zeros or truncate at this
/// boundary. Padded dimensions carry no signal.
///
/// # Failure modes
///
/// Implementations fail with [`Error::ProviderUnavailable`] when the
/// service cannot be reached (network, auth, quota, timeout) and
/// [`Error::EmptyResponse`] when it answers without a usable vector.
/// Callers treat both as recoverable and fall back to keyword retrieval.
///
/// [`Error::ProviderUnavailable`]: crate::error::Error::ProviderUnavailable
/// [`Error::EmptyResponse`]: crate::error::Error::EmptyResponse
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        // Default: delegate to embed_batch
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::empty_response("no embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Embed a product's text fields as one string, composed by
    /// [`compose_product_text`] (default implementation provided)
    async fn embed_product(
        &self,
        name: &str,
        description: &str,
        category: Option<&str>,
    ) -> Result<Embedding> {
        self.embed(&compose_product_text(name, description, category))
            .await
    }

    /// Get the dimensionality of embeddings produced by this provider,
    /// after the fixed-width adaptation
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        // Default implementation - try a simple embed operation
        self.embed("health check").await?;
        Ok(())
    }
}
