use std::borrow::Cow;

use crate::models::{BaseConfig, Sip002Link};
use crate::parser::explodes::ss::{is_ipv6_literal, SS_SCHEME};
use crate::utils::base64::{base64_encode_unpadded, url_safe_base64_encode};
use crate::utils::url::url_encode;

/// Prefix shared by the AEAD-2022 cipher family.
pub const AEAD_2022_PREFIX: &str = "2022-";

/// The URI layouts a [`Sip002Link`] can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriFormat {
    /// Plain userinfo for AEAD-2022 ciphers, Base64 userinfo otherwise.
    #[default]
    Auto,
    /// `ss://method:password@host:port`, percent-encoded.
    PlainUserInfo,
    /// `ss://BASE64(method:password)@host:port`.
    Base64UserInfo,
    /// Legacy `ss://method:password@host:port#tag`, nothing encoded.
    Standard,
    /// Legacy `ss://BASE64(method:password@host:port)#tag`.
    Base64,
}

/// Server as it appears in a URI authority. IPv6 literals get brackets.
fn uri_host(server: &str) -> Cow<'_, str> {
    if is_ipv6_literal(server) {
        Cow::Owned(format!("[{}]", server))
    } else {
        Cow::Borrowed(server)
    }
}

impl Sip002Link {
    /// Whether the cipher requires plain (non-Base64) userinfo.
    pub fn is_aead_2022(&self) -> bool {
        self.config.method().starts_with(AEAD_2022_PREFIX)
    }

    /// Write the recommended SIP002 form for this cipher.
    pub fn to_uri(&self) -> String {
        if self.is_aead_2022() {
            self.to_uri_with_plain_user_info()
        } else {
            self.to_uri_with_base64_user_info()
        }
    }

    /// Write the link in a specific layout.
    pub fn to_uri_as(&self, format: UriFormat) -> String {
        match format {
            UriFormat::Auto => self.to_uri(),
            UriFormat::PlainUserInfo => self.to_uri_with_plain_user_info(),
            UriFormat::Base64UserInfo => self.to_uri_with_base64_user_info(),
            UriFormat::Standard => self.to_standard_uri(),
            UriFormat::Base64 => self.to_base64_uri(),
        }
    }

    /// Format: ss://method:password@server:port/?plugin=plugin_data#tag
    pub fn to_uri_with_plain_user_info(&self) -> String {
        let user_info = format!(
            "{}:{}",
            url_encode(self.config.method()),
            url_encode(self.config.password())
        );
        self.sip002_uri(&user_info)
    }

    /// Format: ss://BASE64(method:password)@server:port/?plugin=plugin_data#tag
    ///
    /// The userinfo uses the URL-safe alphabet without padding.
    pub fn to_uri_with_base64_user_info(&self) -> String {
        let user_info = url_safe_base64_encode(&format!(
            "{}:{}",
            self.config.method(),
            self.config.password()
        ));
        self.sip002_uri(&user_info)
    }

    fn sip002_uri(&self, user_info: &str) -> String {
        let mut uri = format!(
            "{}{}@{}:{}",
            SS_SCHEME,
            user_info,
            uri_host(self.config.server()),
            self.config.server_port()
        );

        if let Some(plugin) = &self.plugin {
            uri.push_str(&format!("/?plugin={}", url_encode(plugin)));
        }

        if let Some(tag) = self.config.tag() {
            uri.push_str(&format!("#{}", url_encode(tag)));
        }

        uri
    }

    /// Format: ss://method:password@server:port#tag
    ///
    /// Method and password are written as-is; the plugin is dropped.
    pub fn to_standard_uri(&self) -> String {
        let mut uri = format!(
            "{}{}:{}@{}:{}",
            SS_SCHEME,
            self.config.method(),
            self.config.password(),
            uri_host(self.config.server()),
            self.config.server_port()
        );

        if let Some(tag) = self.config.tag() {
            uri.push_str(&format!("#{}", url_encode(tag)));
        }

        uri
    }

    /// Format: ss://BASE64(method:password@server:port)#tag
    ///
    /// The tag is appended without percent-encoding; the plugin is dropped.
    pub fn to_base64_uri(&self) -> String {
        let plain = format!(
            "{}:{}@{}:{}",
            self.config.method(),
            self.config.password(),
            uri_host(self.config.server()),
            self.config.server_port()
        );

        let mut uri = format!("{}{}", SS_SCHEME, base64_encode_unpadded(&plain));
        if let Some(tag) = self.config.tag() {
            uri.push('#');
            uri.push_str(tag);
        }

        uri
    }
}
