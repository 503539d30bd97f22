use ssconf::{BaseConfig, ClientRecord, ConfigError, Sip002Link, UriFormat};

#[cfg(test)]
mod sip002_tests {
    use super::*;

    fn link(server: &str, password: &str, method: &str) -> Sip002Link {
        Sip002Link::new(ClientRecord::new(server, 8388, 1080, password, method))
    }

    fn samples() -> Vec<Sip002Link> {
        vec![
            link("example.com", "password", "aes-256-gcm"),
            link("example.com", "", "chacha20-ietf-poly1305"),
            link("192.168.1.1", "p@ss:w/rd?#", "aes-128-gcm"),
            link("2001:db8:85a3::8a2e:370:7334", "password", "aes-256-gcm"),
            link("2001:0DB8::0001", "password", "aes-256-gcm"),
            link("2001:DB8::1", "p@ss", "chacha20-ietf-poly1305").with_plugin("v2ray-plugin"),
            link("fe80::1%eth0", "password", "aes-256-gcm"),
            link(
                "example.org",
                "YctPZ6U7xPPcU+gp3u+0tx/tRizJN9K8y+uKlW2qjlI=",
                "2022-blake3-aes-256-gcm",
            )
            .with_plugin("obfs-local;obfs=http;obfs-host=www.bing.com"),
            Sip002Link::new(
                ClientRecord::new("example.net", 443, 1080, "密码", "aes-256-gcm")
                    .with_tag("Special & 特殊 <> 字符 + 测试 % ! ?"),
            )
            .with_plugin("v2ray-plugin;server"),
            Sip002Link::new(
                ClientRecord::new("example.net", 443, 1080, "pw", "aes-256-gcm").with_tag(""),
            ),
        ]
    }

    #[test]
    fn test_sip002_encoders_round_trip() {
        for original in samples() {
            for uri in [
                original.to_uri_with_plain_user_info(),
                original.to_uri_with_base64_user_info(),
                original.to_uri(),
            ] {
                let decoded = Sip002Link::from_sip002_uri(&uri).unwrap();
                assert_eq!(decoded, original, "round trip through {}", uri);

                let classified = Sip002Link::from_uri(&uri).unwrap();
                assert_eq!(classified, original, "classification of {}", uri);
            }
        }
    }

    #[test]
    fn test_base64_uri_round_trip_without_plugin() {
        for original in samples() {
            let decoded = Sip002Link::from_base64_uri(&original.to_base64_uri()).unwrap();
            assert_eq!(decoded.config, original.config);
            assert_eq!(decoded.plugin(), None);
        }
    }

    #[test]
    fn test_base64_uri_tag_is_literal() {
        let original = Sip002Link::new(
            ClientRecord::new("example.com", 8388, 1080, "password", "aes-256-gcm")
                .with_tag("Test%20Server"),
        );
        let uri = original.to_base64_uri();
        assert!(uri.ends_with("#Test%20Server"));

        let decoded = Sip002Link::from_base64_uri(&uri).unwrap();
        assert_eq!(decoded.config.tag(), Some("Test%20Server"));
    }

    #[test]
    fn test_plain_user_info_scenario() {
        let config = ClientRecord::new("example.com", 8388, 1080, "password", "aes-256-gcm")
            .with_tag("Test Server");
        let link = Sip002Link::new(config).with_plugin("v2ray-plugin;server");

        assert_eq!(
            link.to_uri_with_plain_user_info(),
            "ss://aes-256-gcm:password@example.com:8388/?plugin=v2ray-plugin%3Bserver#Test%20Server"
        );
    }

    #[test]
    fn test_policy_selector() {
        for link in samples() {
            if link.config.method().starts_with("2022-") {
                assert_eq!(link.to_uri(), link.to_uri_with_plain_user_info());
                assert_eq!(link.to_uri_as(UriFormat::Auto), link.to_uri_with_plain_user_info());
            } else {
                assert_eq!(link.to_uri(), link.to_uri_with_base64_user_info());
            }
        }
    }

    #[test]
    fn test_standard_uri_round_trip() {
        let original = Sip002Link::new(
            ClientRecord::new("example.com", 8388, 1080, "password", "aes-256-gcm")
                .with_tag("Test Server"),
        );
        let uri = original.to_standard_uri();
        assert_eq!(uri, "ss://aes-256-gcm:password@example.com:8388#Test%20Server");

        assert_eq!(Sip002Link::from_standard_uri(&uri).unwrap(), original);
        assert_eq!(Sip002Link::from_uri(&uri).unwrap(), original);
    }

    #[test]
    fn test_standard_uri_drops_plugin() {
        let link = link("example.com", "password", "aes-256-gcm").with_plugin("obfs-local");
        assert!(!link.to_standard_uri().contains("plugin"));
        assert!(!link.to_base64_uri().contains("plugin"));
    }

    #[test]
    fn test_invalid_uris() {
        assert!(matches!(
            Sip002Link::from_uri("vmess://abc"),
            Err(ConfigError::InvalidUriFormat(_))
        ));
        assert!(matches!(
            Sip002Link::from_uri("ss://"),
            Err(ConfigError::InvalidUriFormat(_))
        ));
        assert!(matches!(
            Sip002Link::from_sip002_uri("ss://aes-256-gcm:pw@example.com"),
            Err(ConfigError::InvalidUriFormat(_))
        ));
        assert!(matches!(
            Sip002Link::from_base64_uri("ss://%%%"),
            Err(ConfigError::InvalidBase64(_))
        ));
    }
}
