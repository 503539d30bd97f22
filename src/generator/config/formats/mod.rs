pub mod client;
pub mod sip008;
pub mod ss;

// Re-export all format converters
pub use sip008::sip008_to_json;
pub use ss::{UriFormat, AEAD_2022_PREFIX};
