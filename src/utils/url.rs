//! Percent-encoding for the text parts of `ss://` URIs

/// Percent-encodes a tag, plugin string or userinfo part.
///
/// Only RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through,
/// so a space in a tag is written as `%20`, never `+`.
///
/// # Examples
/// ```
/// use ssconf::utils::url::url_encode;
///
/// let encoded = url_encode("v2ray-plugin;server");
/// assert_eq!(encoded, "v2ray-plugin%3Bserver");
/// assert_eq!(url_encode("Test Server"), "Test%20Server");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Reverses [`url_encode`] on a tag, host or userinfo part.
///
/// `+` stays a literal plus. Text whose escapes do not form valid UTF-8 is
/// returned as written.
///
/// # Examples
/// ```
/// use ssconf::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// assert_eq!(url_decode("aes-256-gcm"), "aes-256-gcm");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}
