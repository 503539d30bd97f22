use log::error;
use serde::Serialize;

use crate::models::{BaseConfig, ServerRecord, Sip008Document};

#[derive(Serialize)]
struct Sip008Json<'a> {
    version: u32,
    servers: Vec<Sip008ServerJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_used: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_remaining: Option<u64>,
}

#[derive(Serialize)]
struct Sip008ServerJson<'a> {
    id: &'a str,
    server: &'a str,
    server_port: u16,
    password: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin_opts: Option<&'a str>,
}

/// Standalone server object: base fields first, then the id and plugin.
#[derive(Serialize)]
struct ServerJson<'a> {
    server: &'a str,
    server_port: u16,
    password: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin_opts: Option<&'a str>,
}

impl<'a> From<&'a ServerRecord> for Sip008ServerJson<'a> {
    fn from(server: &'a ServerRecord) -> Self {
        Sip008ServerJson {
            id: server.id(),
            server: server.server(),
            server_port: server.server_port(),
            password: server.password(),
            method: server.method(),
            remarks: server.remarks(),
            plugin: server.plugin(),
            // Options without a plugin are never written
            plugin_opts: server.plugin().and(server.plugin_opts()),
        }
    }
}

/// Convert a SIP008 document to pretty-printed JSON
///
/// Server fields are written as `id, server, server_port, password, method`
/// followed by the optional `remarks`, `plugin` and `plugin_opts`.
/// `bytes_remaining` is only written next to `bytes_used`.
pub fn sip008_to_json(doc: &Sip008Document) -> String {
    let json = Sip008Json {
        version: doc.version(),
        servers: doc.servers().iter().map(Sip008ServerJson::from).collect(),
        bytes_used: doc.bytes_used(),
        bytes_remaining: doc.bytes_used().and(doc.bytes_remaining()),
    };

    match serde_json::to_string_pretty(&json) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to serialize SIP008 document: {}", e);
            String::new()
        }
    }
}

impl Sip008Document {
    /// See [`sip008_to_json`].
    pub fn to_json(&self) -> String {
        sip008_to_json(self)
    }
}

impl ServerRecord {
    /// Compact JSON for this server on its own.
    pub fn to_json(&self) -> String {
        let json = ServerJson {
            server: self.server(),
            server_port: self.server_port(),
            password: self.password(),
            method: self.method(),
            remarks: self.remarks(),
            id: self.id(),
            plugin: self.plugin(),
            plugin_opts: self.plugin_opts(),
        };

        match serde_json::to_string(&json) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to serialize server '{}': {}", self.id(), e);
                String::new()
            }
        }
    }
}
