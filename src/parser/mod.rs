pub mod explodes;

// Re-export the decoders
pub use explodes::client::explode_client_json;
pub use explodes::sip008::{explode_sip008, explode_sip008_url, validate_sip008_url};
pub use explodes::ss::{explode_ss, explode_ss_base64, explode_ss_sip002, explode_ss_standard};
