//! 数据定义语言(DDL)集成测试
//!
//! 测试范围:
//! - CREATE TAG - 创建标签
//! - ALTER TAG - 修改标签
//! - DROP TAG - 删除标签
//! - DESC TAG - 描述标签
//! - SHOW TAGS - 列出标签
//! - SHOW CREATE TAG - 显示建标签语句

mod common;

use std::sync::Arc;

use common::{
    assertions::{assert_dataset, assert_failure, assert_string_column, assert_success},
    data_fixtures::{person_schema, person_schema_with_ttl, single_property_schema},
    TestMeta, TEST_SPACE,
};

use graphdb_ddl::common::memory::MemoryTracker;
use graphdb_ddl::core::error::ErrorCode;
use graphdb_ddl::core::types::{AlterSchemaItem, DataType, PropertyDef, SchemaProp};
use graphdb_ddl::core::{FailureKind, Value};
use graphdb_ddl::meta::MetaClient;
use graphdb_ddl::query::planner::{
    AlterTag, CreateTag, DescTag, DropTag, ShowCreateTag, ShowTags,
};

// ==================== CREATE TAG 语句测试 ====================

#[tokio::test]
async fn test_create_tag_basic() {
    let mut meta = TestMeta::new();

    let result = meta.run(CreateTag::new("person", person_schema(), false)).await;

    assert_success(&result);
    assert_eq!(meta.client().tag_count(TEST_SPACE), 1);
}

#[tokio::test]
async fn test_create_tag_if_not_exists() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    let result = meta
        .run(CreateTag::new("person", single_property_schema("x", DataType::Bool), true))
        .await;
    assert_success(&result);

    // 已存在的定义不被覆盖
    let schema = meta
        .client()
        .get_tag_schema(TEST_SPACE, "person")
        .await
        .expect("标签应该存在");
    assert_eq!(schema, person_schema());
}

#[tokio::test]
async fn test_create_tag_duplicate() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    let result = meta.run(CreateTag::new("person", person_schema(), false)).await;

    assert_failure(&result, FailureKind::AuthorityFailure, "person");
    assert_eq!(result.error_code(), ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_create_tag_in_unknown_space() {
    let mut meta = TestMeta::new();

    let result = meta
        .run_in(42, CreateTag::new("person", person_schema(), false))
        .await;

    assert_failure(&result, FailureKind::AuthorityFailure, "42");
    assert_eq!(result.status().code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_create_tag_invalid_ttl_col() {
    let mut meta = TestMeta::new();
    let schema = person_schema().with_schema_prop(SchemaProp::new().with_ttl(60, "name".to_string()));

    let result = meta.run(CreateTag::new("person", schema, false)).await;

    assert_failure(&result, FailureKind::AuthorityFailure, "name");
    assert_eq!(meta.client().tag_count(TEST_SPACE), 0);
}

// ==================== DROP TAG 语句测试 ====================

#[tokio::test]
async fn test_drop_tag() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    assert_success(&meta.run(DropTag::new(false, "person")).await);
    assert_eq!(meta.client().tag_count(TEST_SPACE), 0);

    let again = meta.run(DropTag::new(false, "person")).await;
    assert_failure(&again, FailureKind::AuthorityFailure, "person");

    assert_success(&meta.run(DropTag::new(true, "person")).await);
}

// ==================== DESC TAG 语句测试 ====================

#[tokio::test]
async fn test_desc_tag() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    let result = meta.run(DescTag::new("person")).await;
    let ds = assert_dataset(&result);

    assert_eq!(ds.col_names, vec!["Field", "Type", "Null", "Default", "Comment"]);
    assert_string_column(ds, "Field", &["name", "age", "created"]);
    assert_string_column(ds, "Type", &["string", "int64", "timestamp"]);
    assert_string_column(ds, "Null", &["NO", "YES", "YES"]);
    assert_eq!(ds.rows[0].get(4), Some(&Value::String("full name".to_string())));
    assert_eq!(ds.rows[1].get(3), Some(&Value::Int(18)));
    assert_eq!(ds.rows[2].get(3), Some(&Value::Empty));
}

#[tokio::test]
async fn test_desc_missing_tag() {
    let mut meta = TestMeta::new();

    let result = meta.run(DescTag::new("ghost")).await;

    assert_failure(&result, FailureKind::AuthorityFailure, "ghost");
}

// ==================== SHOW TAGS 语句测试 ====================

#[tokio::test]
async fn test_show_tags_sorted() {
    let mut meta = TestMeta::new();
    for name in ["team", "person", "city"] {
        meta.run(CreateTag::new(name, single_property_schema("id", DataType::Int64), false))
            .await;
    }

    let result = meta.run(ShowTags::new()).await;
    let ds = assert_dataset(&result);

    assert_string_column(ds, "Name", &["city", "person", "team"]);
}

#[tokio::test]
async fn test_show_tags_over_memory_limit() {
    let memory = Arc::new(MemoryTracker::new(8 * 1024));
    let mut meta = TestMeta::with_memory(memory.clone());
    for i in 0..256 {
        let name = format!("tag_{:04}", i);
        meta.run(CreateTag::new(&name, single_property_schema("id", DataType::Int64), false))
            .await;
    }

    let result = meta.run(ShowTags::new()).await;

    assert_failure(&result, FailureKind::ResourceExhausted, "");
    assert_eq!(result.error_code(), ErrorCode::ResourceExhausted);
    assert_eq!(memory.current_usage(), 0);
}

// ==================== SHOW CREATE TAG 语句测试 ====================

#[tokio::test]
async fn test_show_create_tag() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema_with_ttl(), false)).await;

    let result = meta.run(ShowCreateTag::new("person")).await;
    let ds = assert_dataset(&result);

    assert_eq!(ds.col_names, vec!["Tag", "Create Tag"]);
    let expected = "CREATE TAG `person` (\n \
                    `name` string NOT NULL COMMENT \"full name\",\n \
                    `age` int64 NULL DEFAULT 18,\n \
                    `created` timestamp NULL\n\
                    ) ttl_duration = 100, ttl_col = \"created\"";
    assert_eq!(ds.rows[0].get(0), Some(&Value::String("person".to_string())));
    assert_eq!(ds.rows[0].get(1), Some(&Value::String(expected.to_string())));
}

// ==================== ALTER TAG 语句测试 ====================

#[tokio::test]
async fn test_alter_tag_add_change_drop() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    let items = vec![
        AlterSchemaItem::add_property(PropertyDef::new("email".to_string(), DataType::String)),
        AlterSchemaItem::change_property(
            PropertyDef::new("age".to_string(), DataType::Int32).with_nullable(false),
        ),
        AlterSchemaItem::drop_property("created".to_string()),
    ];
    let result = meta.run(AlterTag::new("person", items, SchemaProp::new())).await;
    assert_success(&result);

    let desc = meta.run(DescTag::new("person")).await;
    let ds = assert_dataset(&desc);
    assert_string_column(ds, "Field", &["name", "age", "email"]);
    assert_string_column(ds, "Type", &["string", "int32", "string"]);
}

#[tokio::test]
async fn test_alter_tag_rejected_atomically() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    let items = vec![
        AlterSchemaItem::add_property(PropertyDef::new("email".to_string(), DataType::String)),
        AlterSchemaItem::drop_property("missing".to_string()),
    ];
    let result = meta.run(AlterTag::new("person", items, SchemaProp::new())).await;
    assert_failure(&result, FailureKind::AuthorityFailure, "missing");

    let schema = meta
        .client()
        .get_tag_schema(TEST_SPACE, "person")
        .await
        .expect("标签应该存在");
    assert!(schema.column("email").is_none());
}

#[tokio::test]
async fn test_alter_tag_ttl_options() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;

    let ttl = SchemaProp::new().with_ttl(3600, "created".to_string());
    assert_success(&meta.run(AlterTag::new("person", Vec::new(), ttl)).await);

    let show = meta.run(ShowCreateTag::new("person")).await;
    match assert_dataset(&show).rows[0].get(1) {
        Some(Value::String(text)) => {
            assert!(text.ends_with("ttl_duration = 3600, ttl_col = \"created\""), "{}", text)
        }
        other => panic!("unexpected create statement: {:?}", other),
    }
}

// ==================== 统计 ====================

#[tokio::test]
async fn test_executor_stats() {
    let mut meta = TestMeta::new();
    meta.run(CreateTag::new("person", person_schema(), false)).await;
    meta.run(DescTag::new("person")).await;
    meta.run(DropTag::new(false, "ghost")).await;

    let stats = meta.executor().stats();
    assert_eq!(stats.executions, 3);
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.num_rows, 3);
    assert!(stats.to_json().expect("stats serialize").contains("\"executions\":3"));
}
