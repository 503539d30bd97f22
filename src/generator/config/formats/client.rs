use log::error;
use serde::Serialize;

use crate::models::{BaseConfig, ClientRecord};

#[derive(Serialize)]
struct ClientJson<'a> {
    server: &'a str,
    server_port: u16,
    password: &'a str,
    method: &'a str,
    local_port: u16,
}

impl ClientRecord {
    /// Pretty-printed client configuration file. The tag is not written.
    pub fn to_json(&self) -> String {
        let json = ClientJson {
            server: self.server(),
            server_port: self.server_port(),
            password: self.password(),
            method: self.method(),
            local_port: self.local_port(),
        };

        match serde_json::to_string_pretty(&json) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to serialize client configuration: {}", e);
                String::new()
            }
        }
    }
}
