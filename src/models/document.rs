use log::warn;

use super::record::ServerRecord;

/// SIP008 document version written when none is parsed.
pub const SIP008_VERSION: u32 = 1;

/// A SIP008 online configuration document.
///
/// Servers keep their insertion order and are unique by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sip008Document {
    pub(crate) version: u32,
    servers: Vec<ServerRecord>,
    pub bytes_used: Option<u64>,
    /// Only serialized while `bytes_used` is also set.
    pub bytes_remaining: Option<u64>,
}

impl Default for Sip008Document {
    fn default() -> Self {
        Sip008Document {
            version: SIP008_VERSION,
            servers: Vec::new(),
            bytes_used: None,
            bytes_remaining: None,
        }
    }
}

impl Sip008Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn servers(&self) -> &[ServerRecord] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.servers.iter().any(|s| s.id() == id)
    }

    /// Appends `server` unless an entry with the same id is already present.
    ///
    /// Returns whether the server was added. The first entry for an id wins.
    pub fn add_server(&mut self, server: ServerRecord) -> bool {
        if self.contains_id(server.id()) {
            warn!("Skipping server with duplicate id '{}'", server.id());
            return false;
        }
        self.servers.push(server);
        true
    }

    pub fn with_server(mut self, server: ServerRecord) -> Self {
        self.add_server(server);
        self
    }

    pub fn bytes_used(&self) -> Option<u64> {
        self.bytes_used
    }

    pub fn bytes_remaining(&self) -> Option<u64> {
        self.bytes_remaining
    }

    pub fn with_bytes_used(mut self, bytes: u64) -> Self {
        self.bytes_used = Some(bytes);
        self
    }

    pub fn with_bytes_remaining(mut self, bytes: u64) -> Self {
        self.bytes_remaining = Some(bytes);
        self
    }

    pub fn into_servers(self) -> Vec<ServerRecord> {
        self.servers
    }
}
