// Query module for the graph database
//
// This module provides the DDL execution path:
// - Plan nodes consumed by executors
// - Executors dispatching requests to the meta service
// - Formatting of schema descriptions

pub mod executor;
pub mod planner;
pub mod util;

pub use executor::{ExecutionContext, ExecutionResult, TagExecutor};
pub use planner::TagCommand;
