//! Common helpers for embedding providers
//!
//! Shared functionality used across embedding provider implementations.

use std::time::Duration;

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// Common constructor patterns used by embedding providers
pub mod constructor {
    /// Validate and normalize an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Validate and normalize an optional base URL
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
    }
}

/// Fit a vector to the store's fixed width.
///
/// Pads with zeros when the native dimensionality is smaller, truncates
/// when larger. Lossy by construction: padded dimensions carry no signal
/// and truncation discards tail components. Isolating the compromise here
/// means swapping providers only touches this boundary.
pub fn fit_dimensions(mut vector: Vec<f32>, target: usize) -> Vec<f32> {
    if vector.len() > target {
        vector.truncate(target);
    } else {
        vector.resize(target, 0.0);
    }
    vector
}
