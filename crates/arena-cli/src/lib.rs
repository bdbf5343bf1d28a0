//! # arena-cli
//!
//! Contestant template: a game model and the `MyStrategy` stub that the
//! `arena-client` binary runs.

pub mod model;
pub mod my_strategy;

pub use model::DemoGame;
pub use my_strategy::MyStrategy;
