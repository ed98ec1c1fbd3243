//! Command implementations behind the `abcore` binary.

pub mod commands;

pub use commands::{ConfigOverrides, IndexKind};
