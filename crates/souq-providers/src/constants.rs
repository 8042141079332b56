//! Provider-level constants

/// Default base URL for the OpenAI-compatible embedding API
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Native width of text-embedding-3-small / ada-002
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// Native width of text-embedding-3-large
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// Width of the null provider's deterministic vectors
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";
