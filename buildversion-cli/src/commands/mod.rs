//! CLI command implementations.

pub mod bump;
pub mod common;
pub mod compare;
pub mod config;
pub mod extract;
pub mod parsers;
