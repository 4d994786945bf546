//! 测试数据生成器
//!
//! 提供常用的标签 schema

use graphdb_ddl::core::types::{DataType, PropertyDef, Schema, SchemaProp};
use graphdb_ddl::core::Value;

/// person(name string NOT NULL, age int64 DEFAULT 18, created timestamp)
pub fn person_schema() -> Schema {
    Schema::new(vec![
        PropertyDef::new("name".to_string(), DataType::String)
            .with_nullable(false)
            .with_comment("full name".to_string()),
        PropertyDef::new("age".to_string(), DataType::Int64).with_default(Some(Value::Int(18))),
        PropertyDef::new("created".to_string(), DataType::Timestamp),
    ])
}

/// 带 TTL 的 person
pub fn person_schema_with_ttl() -> Schema {
    person_schema().with_schema_prop(SchemaProp::new().with_ttl(100, "created".to_string()))
}

/// 只有一个属性的简单 schema
pub fn single_property_schema(name: &str, data_type: DataType) -> Schema {
    Schema::new(vec![PropertyDef::new(name.to_string(), data_type)])
}
