//! 值类型模块
//!
//! 执行结果中单元格的取值。

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod dataset;

pub use dataset::{DataSet, Row};

/// 执行结果中的单个值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 未设置（如属性没有默认值）
    Empty,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// 估算该值占用的内存字节数
    pub fn estimated_size(&self) -> usize {
        let heap = match self {
            Value::String(s) => s.capacity(),
            _ => 0,
        };
        std::mem::size_of::<Value>() + heap
    }

    /// 转换为可出现在 DDL 语句中的字面量
    pub fn to_literal(&self) -> String {
        match self {
            Value::String(s) => format!("\"{}\"", escape_string(s)),
            Value::Empty | Value::Null => "NULL".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// 转义双引号字符串中的特殊字符
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
