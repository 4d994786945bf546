//! 执行器基础类型统一模块
//!
//! 模块结构：
//! - executor_stats.rs    - 执行器统计信息
//! - execution_result.rs  - 执行结果类型
//! - execution_context.rs - 执行上下文
//! - result_builder.rs    - 结果构建器

pub mod execution_context;
pub mod execution_result;
pub mod executor_stats;
pub mod result_builder;

pub use execution_context::ExecutionContext;
pub use execution_result::ExecutionResult;
pub use executor_stats::ExecutorStats;
pub use result_builder::ResultBuilder;
