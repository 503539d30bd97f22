pub mod client;
pub mod sip008;
pub mod ss;
