//! 核心类型定义

pub mod metadata;
pub mod property;

pub use metadata::{
    AlterSchemaItem, AlterSchemaOp, Schema, SchemaProp, SchemaVer, SpaceId, TagId, TagItem,
};
pub use property::{DataType, PropertyDef};
