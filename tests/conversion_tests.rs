use std::cell::Cell;

use ssconf::{BaseConfig, ClientRecord, ServerRecord, Sip002Link, Sip008Document, UuidGenerator};

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_uri_to_document_and_back() {
        let uris = [
            "ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ@example.com:8388/?plugin=v2ray-plugin%3Bserver#Test%20Server",
            "ss://2022-blake3-aes-128-gcm:YctPZ6U7xPPcU%2Bgp3u%2B0tw%3D%3D@example.org:8389#Plain",
        ];
        let links: Vec<Sip002Link> = uris.iter().map(|uri| Sip002Link::from_uri(uri).unwrap()).collect();

        let doc = Sip008Document::from_sip002_list(&links, &UuidGenerator);
        assert_eq!(doc.len(), 2);
        assert_ne!(doc.servers()[0].id(), doc.servers()[1].id());
        assert_eq!(doc.servers()[0].plugin(), Some("v2ray-plugin"));
        assert_eq!(doc.servers()[0].plugin_opts(), Some("server"));
        assert_eq!(doc.servers()[1].remarks(), Some("Plain"));

        let reparsed = Sip008Document::from_json(&doc.to_json()).unwrap();
        let back: Vec<String> = reparsed.to_sip002_list().iter().map(Sip002Link::to_uri).collect();
        assert_eq!(back, uris);
    }

    #[test]
    fn test_server_id_is_stable() {
        let next = Cell::new(0);
        let ids = || {
            next.set(next.get() + 1);
            format!("fixed-{}", next.get())
        };

        let link = Sip002Link::new(ClientRecord::with_defaults("example.com", 8388));
        let server = link.to_server_config(&ids);
        assert_eq!(server.id(), "fixed-1");

        let doc = Sip008Document::new().with_server(server.clone());
        let reparsed = Sip008Document::from_json(&doc.to_json()).unwrap();
        assert_eq!(reparsed.servers()[0].id(), "fixed-1");
        assert_eq!(next.get(), 1);
    }

    #[test]
    fn test_server_to_client_uses_caller_local_port() {
        let server = ServerRecord::new("X", "example.com", 8388, "pw", "aes-256-gcm")
            .with_remarks("Tokyo")
            .with_plugin("obfs-local", None);

        let link = server.to_sip002(1090);
        assert_eq!(link.config.local_port(), 1090);
        assert_eq!(link.config.tag(), Some("Tokyo"));
        assert_eq!(link.plugin(), Some("obfs-local"));

        let client = server.to_client_config(1080);
        assert_eq!(client.remarks(), Some("Tokyo"));
    }
}
