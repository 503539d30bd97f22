//! Conversion between single-server links and SIP008 server entries
//!
//! Records are copied across, never shared. New server entries get their id
//! from an [`IdGenerator`] so callers can make ids deterministic.

use log::debug;

use crate::models::{
    BaseConfig, ClientRecord, ServerRecord, Sip002Link, Sip008Document, DEFAULT_LOCAL_PORT,
};
use crate::utils::id::IdGenerator;

impl ServerRecord {
    /// Build a server entry from a client record and optional `name;opts` plugin string.
    pub fn from_client<G: IdGenerator + ?Sized>(
        config: &ClientRecord,
        plugin: Option<&str>,
        ids: &G,
    ) -> Self {
        let mut server = ServerRecord::new(
            &ids.generate_id(),
            config.server(),
            config.server_port(),
            config.password(),
            config.method(),
        );
        server.set_remarks(config.tag().map(str::to_string));
        server.set_plugin_string(plugin);
        server
    }

    /// Client record for this server. `local_port` is not part of a SIP008 entry.
    pub fn to_client_config(&self, local_port: u16) -> ClientRecord {
        let mut config = ClientRecord::new(
            self.server(),
            self.server_port(),
            local_port,
            self.password(),
            self.method(),
        );
        config.set_tag(self.remarks().map(str::to_string));
        config
    }

    /// Link carrying this server's plugin string.
    pub fn to_sip002(&self, local_port: u16) -> Sip002Link {
        Sip002Link {
            config: self.to_client_config(local_port),
            plugin: self.plugin_string(),
        }
    }
}

impl Sip002Link {
    /// Server entry with a freshly generated id.
    pub fn to_server_config<G: IdGenerator + ?Sized>(&self, ids: &G) -> ServerRecord {
        ServerRecord::from_client(&self.config, self.plugin(), ids)
    }
}

impl Sip008Document {
    /// One-server document built from a client record and separate plugin fields.
    pub fn from_config<G: IdGenerator + ?Sized>(
        config: &ClientRecord,
        plugin: Option<&str>,
        plugin_opts: Option<&str>,
        ids: &G,
    ) -> Self {
        let mut server = ServerRecord::from_client(config, None, ids);
        server.plugin = plugin.map(str::to_string);
        server.plugin_opts = plugin_opts.map(str::to_string);
        Sip008Document::new().with_server(server)
    }

    pub fn from_sip002<G: IdGenerator + ?Sized>(link: &Sip002Link, ids: &G) -> Self {
        Sip008Document::new().with_server(link.to_server_config(ids))
    }

    /// Document with one entry per link, in order.
    ///
    /// Entries whose generated id repeats an earlier one are dropped.
    pub fn from_sip002_list<'a, I, G>(links: I, ids: &G) -> Self
    where
        I: IntoIterator<Item = &'a Sip002Link>,
        G: IdGenerator + ?Sized,
    {
        let mut doc = Sip008Document::new();
        for link in links {
            doc.add_server(link.to_server_config(ids));
        }
        debug!("Built SIP008 document with {} server(s)", doc.len());
        doc
    }

    /// One link per server, in order, with the default local port.
    pub fn to_sip002_list(&self) -> Vec<Sip002Link> {
        self.servers()
            .iter()
            .map(|server| server.to_sip002(DEFAULT_LOCAL_PORT))
            .collect()
    }
}
