//! Schema 格式化工具
//!
//! 把元数据服务返回的 schema 转换为 DESC 结果行，或还原为 CREATE 语句。

use crate::core::error::{DBError, DBResult};
use crate::core::types::{PropertyDef, Schema};
use crate::core::value::escape_string;
use crate::core::{DataSet, Row, Value};

/// DESC 结果列名
pub const DESC_COLUMNS: [&str; 5] = ["Field", "Type", "Null", "Default", "Comment"];

/// 转换为 DESC 结果：每个属性一行
pub fn to_desc_schema(schema: &Schema) -> DBResult<DataSet> {
    let mut dataset = DataSet::new(DESC_COLUMNS.iter().map(|c| c.to_string()).collect());
    for column in &schema.columns {
        check_column(column)?;
        dataset.push(Row::new(vec![
            Value::String(column.name.clone()),
            Value::String(column.data_type.to_string()),
            Value::String(if column.nullable { "YES" } else { "NO" }.to_string()),
            column.default.clone().unwrap_or(Value::Empty),
            column
                .comment
                .as_ref()
                .map(|c| Value::String(c.clone()))
                .unwrap_or(Value::Empty),
        ]));
    }
    Ok(dataset)
}

/// 转换为 SHOW CREATE 结果：一行，包含名称与还原出的建表语句
pub fn to_show_create_schema(is_tag: bool, name: &str, schema: &Schema) -> DBResult<DataSet> {
    let text = to_create_statement(is_tag, name, schema)?;
    let col_names = if is_tag {
        vec!["Tag".to_string(), "Create Tag".to_string()]
    } else {
        vec!["Edge".to_string(), "Create Edge".to_string()]
    };
    Ok(DataSet::with_rows(
        col_names,
        vec![Row::new(vec![Value::String(name.to_string()), Value::String(text)])],
    ))
}

/// 还原 CREATE TAG / CREATE EDGE 语句
pub fn to_create_statement(is_tag: bool, name: &str, schema: &Schema) -> DBResult<String> {
    if name.is_empty() {
        return Err(DBError::SchemaFormat("schema name is empty".to_string()));
    }

    let mut out = String::with_capacity(256);
    out.push_str(if is_tag { "CREATE TAG " } else { "CREATE EDGE " });
    out.push_str(&quote_identifier(name));
    out.push_str(" (\n");

    let columns = schema
        .columns
        .iter()
        .map(column_definition)
        .collect::<DBResult<Vec<_>>>()?;
    if !columns.is_empty() {
        out.push_str(&columns.join(",\n"));
        out.push('\n');
    }
    out.push(')');

    let prop = &schema.schema_prop;
    out.push_str(&format!(" ttl_duration = {}", prop.ttl_duration.unwrap_or(0)));
    match prop.ttl_col.as_deref() {
        Some(col) if !col.is_empty() => {
            if schema.column(col).is_none() {
                return Err(DBError::SchemaFormat(format!(
                    "ttl_col `{}' of `{}' is not a property",
                    col, name
                )));
            }
            out.push_str(&format!(", ttl_col = \"{}\"", escape_string(col)));
        }
        _ => out.push_str(", ttl_col = \"\""),
    }
    if let Some(comment) = &prop.comment {
        out.push_str(&format!(", comment = \"{}\"", escape_string(comment)));
    }
    Ok(out)
}

fn column_definition(column: &PropertyDef) -> DBResult<String> {
    check_column(column)?;
    let mut def = format!(" {} {}", quote_identifier(&column.name), column.data_type);
    def.push_str(if column.nullable { " NULL" } else { " NOT NULL" });
    if let Some(default) = &column.default {
        def.push_str(" DEFAULT ");
        def.push_str(&default.to_literal());
    }
    if let Some(comment) = &column.comment {
        def.push_str(&format!(" COMMENT \"{}\"", escape_string(comment)));
    }
    Ok(def)
}

/// 反引号包裹的标识符，内部的反引号与反斜杠前加反斜杠
fn quote_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('`');
    for c in name.chars() {
        if c == '`' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('`');
    out
}

fn check_column(column: &PropertyDef) -> DBResult<()> {
    if column.name.is_empty() {
        return Err(DBError::SchemaFormat("property name is empty".to_string()));
    }
    Ok(())
}
