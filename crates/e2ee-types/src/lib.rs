#![forbid(unsafe_code)]
#![doc = "Common error types shared by the e2ee crates."]

pub mod error;

pub use error::*;
