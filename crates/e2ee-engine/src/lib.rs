#![forbid(unsafe_code)]
#![doc = "Diffie-Hellman style pairing engine built on e2ee-bignum."]

mod config;
mod engine;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::Engine;
