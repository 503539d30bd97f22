use log::debug;
use url::{form_urlencoded, Host, Url};

use crate::error::{ConfigError, Result};
use crate::models::{ClientRecord, Sip002Link, DEFAULT_LOCAL_PORT};
use crate::utils::base64::base64_decode;
use crate::utils::url::url_decode;

/// Scheme marker every Shadowsocks URI starts with.
pub const SS_SCHEME: &str = "ss://";

fn invalid(msg: &str) -> ConfigError {
    ConfigError::InvalidUriFormat(msg.to_string())
}

fn strip_scheme(uri: &str) -> Result<&str> {
    uri.strip_prefix(SS_SCHEME)
        .ok_or_else(|| invalid("URI must start with ss://"))
}

/// Splits `host:port`, accepting a bracketed IPv6 literal as the host.
fn split_host_port(authority: &str) -> Result<(String, u16)> {
    let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
        let (host, port) = bracketed
            .split_once("]:")
            .ok_or_else(|| invalid("malformed IPv6 host and port"))?;
        (host, port)
    } else {
        authority
            .split_once(':')
            .ok_or_else(|| invalid("missing port"))?
    };

    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    let port = port
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid port '{}'", port)))?;
    Ok((host.to_string(), port))
}

/// Host text of `rest` exactly as written, without IPv6 brackets.
///
/// The URI parser normalizes IPv6 literals, so hosts are read back from the
/// raw authority instead.
fn raw_host(rest: &str) -> Option<&str> {
    let authority = rest.split(['/', '?', '#']).next()?;
    let (_, host_port) = authority.rsplit_once('@')?;
    let host = match host_port.strip_prefix('[') {
        Some(bracketed) => bracketed.split_once(']')?.0,
        None => host_port.rsplit_once(':')?.0,
    };
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// IPv6 literal with a zone id, e.g. `fe80::1%eth0`. The URI parser rejects these.
fn has_zoned_host(rest: &str) -> bool {
    raw_host(rest).is_some_and(|host| host.contains(':') && host.contains('%'))
}

fn host_of(rest: &str, url: &Url) -> Option<String> {
    let host = match url.host()? {
        Host::Ipv6(_) => raw_host(rest)?.to_string(),
        Host::Ipv4(addr) => addr.to_string(),
        Host::Domain(domain) => url_decode(domain),
    };
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

fn has_authority(rest: &str, url: &Url) -> bool {
    !url.username().is_empty() && host_of(rest, url).is_some() && url.port().is_some()
}

/// Tries to read SIP002 userinfo as `base64(method:password)`.
fn decode_user_info(user_info: &str) -> Option<(String, String)> {
    let decoded = base64_decode(&url_decode(user_info))?;
    let (method, password) = decoded.split_once(':')?;
    Some((method.to_string(), password.to_string()))
}

fn build_link(
    server: String,
    port: u16,
    password: &str,
    method: &str,
    tag: Option<String>,
    plugin: Option<String>,
) -> Sip002Link {
    let mut config = ClientRecord::new(&server, port, DEFAULT_LOCAL_PORT, password, method);
    config.set_tag(tag);
    Sip002Link { config, plugin }
}

/// Parse a Shadowsocks URI in SIP002 or legacy standard form.
///
/// The full string is tried as a SIP002 URI first. If it has no userinfo,
/// host and port, the part after `ss://` is read as a legacy
/// `method:password@host:port#tag` URI. Base64-wrapped legacy URIs are not
/// detected here, see [`explode_ss_base64`].
pub fn explode_ss(uri: &str) -> Result<Sip002Link> {
    let rest = strip_scheme(uri)?;

    if let Ok(url) = Url::parse(uri) {
        if has_authority(rest, &url) {
            debug!("Parsing '{}' as SIP002 URI", uri);
            return sip002_from_url(rest, &url);
        }
    }

    if has_zoned_host(rest) {
        debug!("Parsing '{}' as SIP002 URI with a zoned IPv6 host", uri);
        return sip002_from_parts(rest);
    }

    debug!("Parsing '{}' as legacy standard URI", uri);
    standard_from_rest(rest)
}

/// Parse a SIP002 URI
///
/// `ss://userinfo@host:port[/][?plugin=...][#tag]` where userinfo is either
/// websafe Base64 of `method:password` or a percent-encoded
/// `method:password` pair.
pub fn explode_ss_sip002(uri: &str) -> Result<Sip002Link> {
    let rest = strip_scheme(uri)?;
    if has_zoned_host(rest) {
        return sip002_from_parts(rest);
    }
    let url = Url::parse(uri).map_err(|e| invalid(&e.to_string()))?;
    sip002_from_url(rest, &url)
}

fn sip002_from_url(rest: &str, url: &Url) -> Result<Sip002Link> {
    let server = host_of(rest, url).ok_or_else(|| invalid("missing host"))?;
    let port = url.port().ok_or_else(|| invalid("missing port"))?;
    let tag = url.fragment().map(url_decode);
    let plugin = url
        .query_pairs()
        .find(|(key, _)| key == "plugin")
        .map(|(_, value)| value.into_owned());

    let user_info = url.username();
    if user_info.is_empty() {
        return Err(invalid("missing user info"));
    }

    let (method, password) = match decode_user_info(user_info) {
        Some(pair) => pair,
        None => (
            user_info.to_string(),
            url.password().unwrap_or("").to_string(),
        ),
    };

    Ok(build_link(
        server,
        port,
        &url_decode(&password),
        &url_decode(&method),
        tag,
        plugin,
    ))
}

/// SIP002 read by hand, for authorities the URI parser refuses.
fn sip002_from_parts(rest: &str) -> Result<Sip002Link> {
    let (body, tag) = match rest.split_once('#') {
        Some((body, fragment)) => (body, Some(url_decode(fragment))),
        None => (rest, None),
    };
    let (body, query) = match body.split_once('?') {
        Some((body, query)) => (body, Some(query)),
        None => (body, None),
    };
    let plugin = query.and_then(|query| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "plugin")
            .map(|(_, value)| value.into_owned())
    });

    let authority = body.split('/').next().unwrap_or(body);
    let (user_info, host_port) = authority
        .rsplit_once('@')
        .ok_or_else(|| invalid("missing user info"))?;
    if user_info.is_empty() {
        return Err(invalid("missing user info"));
    }
    let (server, port) = split_host_port(host_port)?;

    let (method, password) = match decode_user_info(user_info) {
        Some(pair) => pair,
        None => {
            let (method, password) = user_info.split_once(':').unwrap_or((user_info, ""));
            (method.to_string(), password.to_string())
        }
    };

    Ok(build_link(
        server,
        port,
        &url_decode(&password),
        &url_decode(&method),
        tag,
        plugin,
    ))
}

/// Parse a legacy `ss://method:password@host:port#tag` URI.
///
/// Method and password are taken literally and plugins are not supported.
pub fn explode_ss_standard(uri: &str) -> Result<Sip002Link> {
    standard_from_rest(strip_scheme(uri)?)
}

fn standard_from_rest(rest: &str) -> Result<Sip002Link> {
    let (body, fragment) = match rest.split_once('#') {
        Some((body, fragment)) => (body, Some(fragment)),
        None => (rest, None),
    };

    let (user_info, authority) = body
        .rsplit_once('@')
        .ok_or_else(|| invalid("missing user info"))?;
    // Drop any path or query after the port
    let authority = authority.split(['/', '?']).next().unwrap_or(authority);
    let (server, port) = split_host_port(authority)?;

    let (method, password) = user_info.split_once(':').unwrap_or((user_info, ""));
    if method.is_empty() {
        return Err(invalid("missing user info"));
    }

    Ok(build_link(
        server,
        port,
        password,
        method,
        fragment.map(url_decode),
        None,
    ))
}

/// Parse a legacy `ss://BASE64(method:password@host:port)#tag` URI.
///
/// The tag is kept exactly as written, without percent-decoding. None of
/// the decoded fields are percent-decoded either.
pub fn explode_ss_base64(uri: &str) -> Result<Sip002Link> {
    let rest = strip_scheme(uri)?;

    let (encoded, tag) = match rest.split_once('#') {
        Some((encoded, tag)) => (encoded, Some(tag.to_string())),
        None => (rest, None),
    };

    let decoded = base64_decode(encoded).ok_or_else(|| {
        ConfigError::InvalidBase64(format!("cannot decode '{}'", encoded))
    })?;

    // Hosts never contain '@', passwords may
    let (method_pass, host_port) = decoded
        .rsplit_once('@')
        .ok_or_else(|| invalid("missing '@' in decoded URI"))?;

    let (method, password) = method_pass
        .split_once(':')
        .ok_or_else(|| invalid("malformed method and password"))?;
    let (server, port) = split_host_port(host_port)?;

    Ok(build_link(server, port, password, method, tag, None))
}

/// Whether `server` needs brackets inside a URI authority.
///
/// Any `:` marks an IPv6 literal, zone ids and uppercase digits included.
pub(crate) fn is_ipv6_literal(server: &str) -> bool {
    server.contains(':')
}

impl Sip002Link {
    /// See [`explode_ss`].
    pub fn from_uri(uri: &str) -> Result<Self> {
        explode_ss(uri)
    }

    /// See [`explode_ss_sip002`].
    pub fn from_sip002_uri(uri: &str) -> Result<Self> {
        explode_ss_sip002(uri)
    }

    /// See [`explode_ss_standard`].
    pub fn from_standard_uri(uri: &str) -> Result<Self> {
        explode_ss_standard(uri)
    }

    /// See [`explode_ss_base64`].
    pub fn from_base64_uri(uri: &str) -> Result<Self> {
        explode_ss_base64(uri)
    }
}
