use std::fs;
use std::path::Path;

use log::{debug, error};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{ClientRecord, Sip002Link, DEFAULT_LOCAL_PORT, DEFAULT_METHOD};

/// A shadowsocks client configuration file.
///
/// Every field is optional. Missing and `null` values fall back to the
/// client defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClientFile {
    server: Option<String>,
    server_port: Option<u16>,
    local_port: Option<u16>,
    password: Option<String>,
    method: Option<String>,
    plugin: Option<String>,
    plugin_opts: Option<String>,
}

/// Parse a client configuration from JSON text.
///
/// `plugin_opts` is appended to `plugin` as `name;opts` when both are set.
pub fn explode_client_json(content: &str) -> Result<Sip002Link> {
    let file: ClientFile = serde_json::from_str(content)?;

    let config = ClientRecord::new(
        file.server.as_deref().unwrap_or(""),
        file.server_port.unwrap_or(0),
        file.local_port.unwrap_or(DEFAULT_LOCAL_PORT),
        file.password.as_deref().unwrap_or(""),
        file.method.as_deref().unwrap_or(DEFAULT_METHOD),
    );

    let plugin = match (file.plugin, file.plugin_opts) {
        (Some(plugin), Some(opts)) if !opts.is_empty() => Some(format!("{};{}", plugin, opts)),
        (plugin, _) => plugin,
    };

    Ok(Sip002Link { config, plugin })
}

impl Sip002Link {
    /// See [`explode_client_json`].
    pub fn from_json_str(content: &str) -> Result<Self> {
        explode_client_json(content)
    }

    /// Load a client configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading client configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            error!("Error reading file '{}': {}", path.display(), e);
            e
        })?;
        explode_client_json(&content)
    }
}
