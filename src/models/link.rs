use super::record::ClientRecord;

/// A single-server SIP002 configuration: the client record plus the
/// optional `name;opts` plugin string carried in the URI query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sip002Link {
    pub config: ClientRecord,
    pub plugin: Option<String>,
}

impl Sip002Link {
    pub fn new(config: ClientRecord) -> Self {
        Sip002Link {
            config,
            plugin: None,
        }
    }

    pub fn config(&self) -> &ClientRecord {
        &self.config
    }

    pub fn plugin(&self) -> Option<&str> {
        self.plugin.as_deref()
    }

    pub fn set_plugin(&mut self, plugin: Option<String>) {
        self.plugin = plugin;
    }

    pub fn with_plugin(mut self, plugin: &str) -> Self {
        self.plugin = Some(plugin.to_string());
        self
    }
}

impl From<ClientRecord> for Sip002Link {
    fn from(config: ClientRecord) -> Self {
        Sip002Link::new(config)
    }
}
