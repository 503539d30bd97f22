use base64::{engine::general_purpose, Engine as _};

/// Standard-alphabet Base64 with padding.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Standard-alphabet Base64 without `=`, as in the legacy whole-URI form.
pub fn base64_encode_unpadded(input: &str) -> String {
    base64_encode(input).trim_end_matches('=').to_string()
}

/// Maps the websafe alphabet used in SIP002 userinfo back to `+` and `/`.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Rewrites standard Base64 into the unpadded websafe form SIP002 userinfo uses.
///
/// A standard `/` would end the URI authority.
pub fn url_safe_base64_apply(input: &str) -> String {
    input.replace('+', "-").replace('/', "_").replace('=', "")
}

/// Encodes `method:password` as SIP002 userinfo.
pub fn url_safe_base64_encode(input: &str) -> String {
    url_safe_base64_apply(&base64_encode(input))
}

/// Pads a Base64 string with `=` up to a multiple of four characters.
pub fn base64_pad(input: &str) -> String {
    let mut padded = input.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    padded
}

/// Decodes standard or URL-safe Base64, padded or not.
///
/// # Returns
/// The decoded bytes, or `None` if the input is not valid Base64.
pub fn base64_decode_bytes(input: &str) -> Option<Vec<u8>> {
    let normalized = base64_pad(&url_safe_base64_reverse(input.trim()));
    general_purpose::STANDARD.decode(normalized).ok()
}

/// Decodes standard or URL-safe Base64 into a UTF-8 string.
///
/// # Returns
/// The decoded string, or `None` if the input is not valid Base64 or the
/// decoded bytes are not UTF-8.
pub fn base64_decode(input: &str) -> Option<String> {
    base64_decode_bytes(input).and_then(|bytes| String::from_utf8(bytes).ok())
}
