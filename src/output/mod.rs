//! Tree formatting and display

mod plain;

pub use plain::{INDENT, PlainFormatter};
