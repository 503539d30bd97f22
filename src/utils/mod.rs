pub mod base64;
pub mod http;
pub mod id;
pub mod url;

// Re-export common utilities
pub use http::{DocumentFetcher, FetchPolicy, HttpFetcher};
pub use id::{IdGenerator, UuidGenerator};
