//! 管理执行器模块
//!
//! 提供 schema 管理功能。当前只包含标签 DDL。

pub mod tag;

pub use self::tag::{
    AlterTagExecutor, CreateTagExecutor, DescTagExecutor, DropTagExecutor, ShowCreateTagExecutor,
    ShowTagsExecutor, TagExecutor, TagOperation,
};
