//! Text edge-list input.

pub mod reader;

pub use reader::EdgeReader;
