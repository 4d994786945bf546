//! GraphDB DDL - tag schema executors for a graph database
//!
//! This crate provides the executors behind the tag DDL statements
//! (CREATE / ALTER / DESC / DROP / SHOW TAGS / SHOW CREATE TAG).
//! Each statement issues exactly one request to the meta service and
//! turns the reply into a tabular result or a classified status.

pub mod common;
pub mod config;
pub mod core;
pub mod meta;
pub mod query;
pub mod utils;
