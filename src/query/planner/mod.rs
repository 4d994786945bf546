//! 计划节点
//!
//! 语句解析与规划不在本 crate 内，这里只定义执行器消费的计划节点。

pub mod tag_ops;

pub use tag_ops::{
    AlterTag, CreateTag, DescTag, DropTag, ShowCreateTag, ShowTags, TagCommand, TagCommandKind,
};
