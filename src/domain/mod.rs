//! Domain layer: network model, parser and walker
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod network;
pub mod walker;

pub use error::{DomainError, DomainResult};
pub use network::{Instructions, Network, Node, Step};
pub use walker::{walk, WalkOptions, Walker, DEFAULT_START, DEFAULT_TERMINAL};
