use serde_json::{json, Value};
use ssconf::{BaseConfig, ConfigError, DocumentFetcher, FetchPolicy, ServerRecord, Sip008Document};
use url::Url;

#[cfg(test)]
mod sip008_tests {
    use super::*;

    struct PanicFetcher;

    impl DocumentFetcher for PanicFetcher {
        fn fetch(&self, url: &Url, _policy: &FetchPolicy) -> Result<String, String> {
            panic!("unexpected fetch of {}", url);
        }
    }

    #[test]
    fn test_minimal_document_round_trip() {
        let input = r#"{"version":1,"servers":[{"id":"X","server":"a.com","server_port":1,"password":"p","method":"m"}]}"#;

        let doc = Sip008Document::from_json(input).unwrap();
        let output: Value = serde_json::from_str(&doc.to_json()).unwrap();
        let expected: Value = serde_json::from_str(input).unwrap();
        assert_eq!(output, expected);

        let server = output["servers"][0].as_object().unwrap();
        assert!(!server.contains_key("remarks"));
        assert!(!server.contains_key("plugin"));
        assert!(!server.contains_key("plugin_opts"));
    }

    #[test]
    fn test_full_document_round_trip() {
        let doc = Sip008Document::new()
            .with_server(
                ServerRecord::new(
                    "27b8a625-4f4b-4428-9f0f-8a2317db7c79",
                    "server1.example.com",
                    8388,
                    "password1",
                    "aes-256-gcm",
                )
                .with_remarks("Server 1")
                .with_plugin("v2ray-plugin", Some("server;tls;host=example.com/path")),
            )
            .with_server(ServerRecord::new(
                "7842c068-c667-41f2-8f7d-04feece3cb67",
                "2001:db8:85a3::8a2e:370:7334",
                8389,
                "password2",
                "chacha20-ietf-poly1305",
            ))
            .with_bytes_used(i64::MAX as u64)
            .with_bytes_remaining(i64::MAX as u64);

        let json = doc.to_json();
        assert!(json.contains("example.com/path"));

        let decoded = Sip008Document::from_json(&json).unwrap();
        assert_eq!(decoded, doc);
        assert_eq!(decoded.bytes_used(), Some(9223372036854775807));
        assert_eq!(decoded.servers()[1].server(), "2001:db8:85a3::8a2e:370:7334");
    }

    #[test]
    fn test_empty_document_round_trip() {
        let doc = Sip008Document::new();
        let decoded = Sip008Document::from_json(&doc.to_json()).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded.version(), 1);
    }

    #[test]
    fn test_version_is_preserved() {
        let doc = Sip008Document::from_json(r#"{"version": 2, "servers": []}"#).unwrap();
        assert_eq!(doc.version(), 2);
        let value: Value = serde_json::from_str(&doc.to_json()).unwrap();
        assert_eq!(value, json!({"version": 2, "servers": []}));
    }

    #[test]
    fn test_large_document() {
        let mut doc = Sip008Document::new();
        for i in 0..100u16 {
            let added = doc.add_server(ServerRecord::new(
                &format!("id-{}", i),
                &format!("server{}.example.com", i),
                8388 + i,
                &format!("password{}", i),
                "aes-256-gcm",
            ));
            assert!(added);
        }

        let decoded = Sip008Document::from_json(&doc.to_json()).unwrap();
        assert_eq!(decoded.len(), 100);
        assert_eq!(decoded.servers()[99].server_port(), 8487);
    }

    #[test]
    fn test_dedup_on_add() {
        let mut doc = Sip008Document::new();
        doc.add_server(ServerRecord::new("X", "a.com", 1, "p", "m"));
        doc.add_server(ServerRecord::new("X", "b.com", 2, "q", "n"));
        assert_eq!(doc.len(), 1);

        doc.add_server(ServerRecord::new("Y", "a.com", 1, "p", "m"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_missing_server_field_names_field() {
        for field in ["id", "server", "server_port", "password", "method"] {
            let mut entry = json!({
                "id": "X", "server": "a.com", "server_port": 1, "password": "p", "method": "m"
            });
            entry.as_object_mut().unwrap().remove(field);
            let text = json!({"version": 1, "servers": [entry]}).to_string();

            match Sip008Document::from_json(&text) {
                Err(ConfigError::MissingRequiredField { field: missing }) => {
                    assert_eq!(missing, field)
                }
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_non_https_url_fails_before_io() {
        let result =
            Sip008Document::from_url_with("http://example.com/c.json", &PanicFetcher, &FetchPolicy::default());
        assert!(matches!(result, Err(ConfigError::NonHttpsUrl(_))));

        let result =
            Sip008Document::from_url_with("ftp://example.com/c.json", &PanicFetcher, &FetchPolicy::default());
        assert!(matches!(result, Err(ConfigError::NonHttpsUrl(_))));

        let result = Sip008Document::from_url_with("https://", &PanicFetcher, &FetchPolicy::default());
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
