//! Shadowsocks configuration codecs
//!
//! Converts between SIP002 `ss://` URIs and SIP008 JSON documents.
//!
//! ```rust
//! use ssconf::{Sip002Link, Sip008Document, UuidGenerator};
//!
//! let link = Sip002Link::from_uri("ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ@example.com:8388#Tokyo").unwrap();
//! let doc = Sip008Document::from_sip002(&link, &UuidGenerator);
//! let back = Sip008Document::from_json(&doc.to_json()).unwrap();
//! assert_eq!(back.to_sip002_list()[0].to_uri(), link.to_uri());
//! ```

pub mod error;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the main types for easier access
pub use error::{ConfigError, Result};
pub use generator::UriFormat;
pub use models::{BaseConfig, ClientRecord, ServerRecord, Sip002Link, Sip008Document};
pub use utils::{DocumentFetcher, FetchPolicy, HttpFetcher, IdGenerator, UuidGenerator};
