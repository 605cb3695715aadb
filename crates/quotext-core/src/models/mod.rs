//! Data models: quote structures, output rows, configuration.

pub mod config;
pub mod quote;
pub mod row;
