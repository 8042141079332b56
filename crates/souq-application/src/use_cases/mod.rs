//! Application Use Cases

mod index_service;
mod search_service;

pub use index_service::ProductIndexService;
pub use search_service::{SearchService, SearchTuning};

pub use souq_domain::ports::compose_product_text;
