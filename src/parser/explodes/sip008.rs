use log::{debug, error, info};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{ConfigError, Result};
use crate::models::{BaseConfig, ServerRecord, Sip008Document};
use crate::utils::http::{DocumentFetcher, FetchPolicy, HttpFetcher};

/// Looks up `name`, treating JSON `null` as absent.
fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).filter(|v| !v.is_null())
}

fn as_string(value: &Value, name: &str) -> Result<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        ConfigError::InvalidJsonFormat(format!("field '{}' must be a string", name))
    })
}

/// Integers may also arrive as numeric strings.
fn as_u64(value: &Value, name: &str) -> Result<u64> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ConfigError::InvalidJsonFormat(format!("field '{}' must be a non-negative integer", name))
    })
}

fn required<'a>(obj: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    field(obj, name).ok_or_else(|| ConfigError::missing(name))
}

fn required_string(obj: &Map<String, Value>, name: &str) -> Result<String> {
    as_string(required(obj, name)?, name)
}

fn optional_string(obj: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    field(obj, name).map(|v| as_string(v, name)).transpose()
}

fn optional_u64(obj: &Map<String, Value>, name: &str) -> Result<Option<u64>> {
    field(obj, name).map(|v| as_u64(v, name)).transpose()
}

fn port_of(value: &Value, name: &str) -> Result<u16> {
    let port = as_u64(value, name)?;
    u16::try_from(port).map_err(|_| {
        ConfigError::InvalidJsonFormat(format!("field '{}' out of range: {}", name, port))
    })
}

/// Reads the mandatory fields of a SIP008 server entry.
fn parse_server_base(obj: &Map<String, Value>) -> Result<ServerRecord> {
    let id = required_string(obj, "id")?;
    let server = required_string(obj, "server")?;
    let port = port_of(required(obj, "server_port")?, "server_port")?;
    let password = required_string(obj, "password")?;
    let method = required_string(obj, "method")?;

    let mut record = ServerRecord::new(&id, &server, port, &password, &method);
    record.set_remarks(optional_string(obj, "remarks")?);
    Ok(record)
}

/// Parse one server entry of a SIP008 document.
///
/// `plugin` is only read when non-empty, and `plugin_opts` only alongside it.
pub fn parse_sip008_server(obj: &Map<String, Value>) -> Result<ServerRecord> {
    let mut record = parse_server_base(obj)?;

    if let Some(plugin) = optional_string(obj, "plugin")?.filter(|p| !p.is_empty()) {
        record.plugin = Some(plugin);
        record.plugin_opts = optional_string(obj, "plugin_opts")?.filter(|o| !o.is_empty());
    }

    Ok(record)
}

fn parse_object(content: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(obj) => Ok(obj),
        _ => Err(ConfigError::InvalidJsonFormat(
            "expected a JSON object".to_string(),
        )),
    }
}

/// Parse a SIP008 JSON document
///
/// # Arguments
/// * `content` - The JSON text
///
/// # Returns
/// The document, with servers added in order and duplicate ids dropped.
pub fn explode_sip008(content: &str) -> Result<Sip008Document> {
    let obj = parse_object(content)?;

    let version = as_u64(required(&obj, "version")?, "version")?;
    let version = u32::try_from(version).map_err(|_| {
        ConfigError::InvalidJsonFormat(format!("unsupported version {}", version))
    })?;
    let servers = required(&obj, "servers")?.as_array().ok_or_else(|| {
        ConfigError::InvalidJsonFormat("field 'servers' must be an array".to_string())
    })?;

    let mut doc = Sip008Document::new();
    doc.version = version;

    for entry in servers {
        let entry = entry.as_object().ok_or_else(|| {
            ConfigError::InvalidJsonFormat("server entry must be an object".to_string())
        })?;
        doc.add_server(parse_sip008_server(entry)?);
    }

    if let Some(bytes_used) = optional_u64(&obj, "bytes_used")? {
        doc.bytes_used = Some(bytes_used);
        doc.bytes_remaining = optional_u64(&obj, "bytes_remaining")?;
    }

    debug!(
        "Parsed SIP008 document version {} with {} server(s)",
        doc.version(),
        doc.len()
    );
    Ok(doc)
}

/// Checks that `url` is well formed and uses HTTPS, without any I/O.
pub fn validate_sip008_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", url, e)))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl(format!("{}: missing host", url)));
    }
    if parsed.scheme() != "https" {
        return Err(ConfigError::NonHttpsUrl(url.to_string()));
    }
    Ok(parsed)
}

/// Retrieve and parse a SIP008 document from an HTTPS URL.
///
/// The URL is validated before `fetcher` is called.
pub fn explode_sip008_url<F: DocumentFetcher + ?Sized>(
    url: &str,
    fetcher: &F,
    policy: &FetchPolicy,
) -> Result<Sip008Document> {
    let parsed = validate_sip008_url(url)?;

    info!("Fetching SIP008 document from {}", parsed);
    let content = fetcher.fetch(&parsed, policy).map_err(|e| {
        error!("Error fetching URL '{}': {}", url, e);
        ConfigError::NetworkFetchFailure(e)
    })?;

    explode_sip008(&content)
}

impl Sip008Document {
    /// See [`explode_sip008`].
    pub fn from_json(content: &str) -> Result<Self> {
        explode_sip008(content)
    }

    /// Fetches over HTTPS with the default [`FetchPolicy`].
    pub fn from_url(url: &str) -> Result<Self> {
        explode_sip008_url(url, &HttpFetcher, &FetchPolicy::default())
    }

    /// Fetches through a caller-supplied collaborator.
    pub fn from_url_with<F: DocumentFetcher + ?Sized>(
        url: &str,
        fetcher: &F,
        policy: &FetchPolicy,
    ) -> Result<Self> {
        explode_sip008_url(url, fetcher, policy)
    }
}

impl ServerRecord {
    /// Parse a single SIP008 server object.
    ///
    /// Unlike document entries, `plugin` and `plugin_opts` are copied
    /// whenever present.
    pub fn from_json(content: &str) -> Result<Self> {
        let obj = parse_object(content)?;
        let mut record = parse_server_base(&obj)?;
        record.plugin = optional_string(&obj, "plugin")?;
        record.plugin_opts = optional_string(&obj, "plugin_opts")?;
        Ok(record)
    }
}
