//! # arena-core
//!
//! Core types and traits for the arena client protocol.
//!
//! This crate provides the foundational pieces shared by the client and
//! contestant binaries:
//! - Binary wire encoding (`Wire`)
//! - Game model binding (`GameModel`)
//! - Protocol messages and their envelopes
//! - Error types

pub mod error;
pub mod game;
pub mod message;
pub mod wire;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use error::{ArenaError, Result};
pub use game::{GameModel, ModelType};
pub use message::{ClientMessage, DebugCommand, ServerMessage};
pub use wire::{MAX_LENGTH, Wire, from_bytes, to_bytes};
