//! 执行器模块
//!
//! - base   - 结果、上下文、统计等基础类型
//! - runner - 后续逻辑的执行位置
//! - admin  - schema 管理执行器

pub mod admin;
pub mod base;
pub mod runner;

pub use admin::TagExecutor;
pub use base::{ExecutionContext, ExecutionResult, ExecutorStats, ResultBuilder};
pub use runner::{Runner, RunnerPool};
