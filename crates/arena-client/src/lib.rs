//! # arena-client
//!
//! Client runtime for arena game servers.
//!
//! This crate provides:
//! - `Runner` for the connect/handshake/turn loop
//! - `Strategy` trait for contestant decision logic
//! - `DebugChannel` and `DebugInterface` for the debug overlay
//! - `ClientConfig` connection settings

pub mod config;
pub mod debug;
pub mod runner;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use debug::{DebugChannel, DebugInterface};
pub use runner::{RunSummary, Runner};
pub use strategy::Strategy;
