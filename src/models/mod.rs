//! Core data models for the crate
//!
//! This module contains the value types used throughout the crate, separated
//! from the codecs that read and write them.
//!
//! # Usage
//!
//! ```rust
//! use ssconf::models::{BaseConfig, ClientRecord, ServerRecord, Sip008Document};
//!
//! let client = ClientRecord::new("example.com", 8388, 1080, "password", "aes-256-gcm")
//!     .with_tag("Tokyo");
//! assert_eq!(client.remarks(), Some("Tokyo"));
//!
//! let mut doc = Sip008Document::new();
//! doc.add_server(ServerRecord::new("id-1", "example.com", 8388, "password", "aes-256-gcm"));
//! assert_eq!(doc.len(), 1);
//! ```

mod document;
mod link;
mod record;

pub use document::*;
pub use link::*;
pub use record::*;
