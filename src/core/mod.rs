//! 核心模块：错误、类型与值

pub mod error;
pub mod types;
pub mod value;

pub use error::{DBError, DBResult, ErrorCode, FailureKind, MetaError, MetaResult};
pub use types::{
    AlterSchemaItem, AlterSchemaOp, DataType, PropertyDef, Schema, SchemaProp, SpaceId, TagId, TagItem,
};
pub use value::{DataSet, Row, Value};
