//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_entity_api_client;
mod in_memory_entity_api_client;
mod seed_records;

pub use http_entity_api_client::HttpEntityApiClient;
pub use in_memory_entity_api_client::InMemoryEntityApiClient;
pub use seed_records::seed_records;
