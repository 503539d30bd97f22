//! Record model definitions
//!
//! Contains the value types describing a single Shadowsocks endpoint. The
//! client and server variants embed the same [`BaseRecord`] and expose its
//! fields through the [`BaseConfig`] trait.

/// Cipher used when none is given.
pub const DEFAULT_METHOD: &str = "chacha20-ietf-poly1305";

/// Local SOCKS port used when none is given.
pub const DEFAULT_LOCAL_PORT: u16 = 1080;

/// Fields shared by every endpoint record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRecord {
    /// Hostname or literal IP address. Not validated.
    pub server: String,
    pub port: u16,
    pub password: String,
    pub method: String,
    pub remarks: Option<String>,
}

impl BaseRecord {
    pub fn new(server: &str, port: u16, password: &str, method: &str) -> Self {
        BaseRecord {
            server: server.to_string(),
            port,
            password: password.to_string(),
            method: method.to_string(),
            remarks: None,
        }
    }
}

/// Accessors over the embedded [`BaseRecord`].
pub trait BaseConfig {
    fn base(&self) -> &BaseRecord;
    fn base_mut(&mut self) -> &mut BaseRecord;

    fn server(&self) -> &str {
        &self.base().server
    }

    fn server_port(&self) -> u16 {
        self.base().port
    }

    fn password(&self) -> &str {
        &self.base().password
    }

    fn method(&self) -> &str {
        &self.base().method
    }

    fn remarks(&self) -> Option<&str> {
        self.base().remarks.as_deref()
    }

    fn set_remarks(&mut self, remarks: Option<String>) {
        self.base_mut().remarks = remarks;
    }
}

/// Client-side configuration: an endpoint plus the local listening port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub base: BaseRecord,
    pub local_port: u16,
}

impl ClientRecord {
    pub fn new(server: &str, port: u16, local_port: u16, password: &str, method: &str) -> Self {
        ClientRecord {
            base: BaseRecord::new(server, port, password, method),
            local_port,
        }
    }

    /// Endpoint with an empty password, the default cipher and local port.
    pub fn with_defaults(server: &str, port: u16) -> Self {
        Self::new(server, port, DEFAULT_LOCAL_PORT, "", DEFAULT_METHOD)
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    /// Display label. Same storage as `remarks`.
    pub fn tag(&self) -> Option<&str> {
        self.remarks()
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.set_remarks(tag);
    }

    /// Builder form of [`ClientRecord::set_tag`].
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.set_tag(Some(tag.to_string()));
        self
    }
}

impl BaseConfig for ClientRecord {
    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }
}

/// Server entry of a SIP008 document.
///
/// The `id` is fixed at construction. `plugin_opts` only has meaning while
/// `plugin` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub base: BaseRecord,
    id: String,
    pub plugin: Option<String>,
    pub plugin_opts: Option<String>,
}

impl ServerRecord {
    pub fn new(id: &str, server: &str, port: u16, password: &str, method: &str) -> Self {
        ServerRecord {
            base: BaseRecord::new(server, port, password, method),
            id: id.to_string(),
            plugin: None,
            plugin_opts: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn plugin(&self) -> Option<&str> {
        self.plugin.as_deref()
    }

    pub fn plugin_opts(&self) -> Option<&str> {
        self.plugin_opts.as_deref()
    }

    /// Combined `name;opts` form, `None` when no plugin is set.
    pub fn plugin_string(&self) -> Option<String> {
        let plugin = self.plugin.as_ref()?;
        match &self.plugin_opts {
            Some(opts) => Some(format!("{};{}", plugin, opts)),
            None => Some(plugin.clone()),
        }
    }

    /// Splits `name;opts` on the first `;`.
    ///
    /// An empty or missing name clears both the plugin and its options.
    pub fn set_plugin_string(&mut self, plugin_string: Option<&str>) {
        let plugin_string = match plugin_string {
            Some(s) if !s.is_empty() => s,
            _ => {
                self.plugin = None;
                self.plugin_opts = None;
                return;
            }
        };

        let (name, opts) = match plugin_string.split_once(';') {
            Some((name, opts)) => (name, Some(opts.to_string())),
            None => (plugin_string, None),
        };

        if name.is_empty() {
            self.plugin = None;
            self.plugin_opts = None;
        } else {
            self.plugin = Some(name.to_string());
            self.plugin_opts = opts;
        }
    }

    pub fn with_remarks(mut self, remarks: &str) -> Self {
        self.set_remarks(Some(remarks.to_string()));
        self
    }

    pub fn with_plugin(mut self, plugin: &str, plugin_opts: Option<&str>) -> Self {
        self.plugin = Some(plugin.to_string());
        self.plugin_opts = plugin_opts.map(str::to_string);
        self
    }
}

impl BaseConfig for ServerRecord {
    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }
}
