pub mod config;

// Re-export format converters
pub use config::formats::sip008::sip008_to_json;
pub use config::formats::ss::UriFormat;
