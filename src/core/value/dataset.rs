//! 数据集类型模块
//!
//! 执行器输出的表格结构：有序列名 + 有序行。

use serde::{Deserialize, Serialize};

use super::Value;

/// 数据行
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Row>() + self.values.iter().map(Value::estimated_size).sum::<usize>()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

/// 数据集
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSet {
    pub col_names: Vec<String>,
    pub rows: Vec<Row>,
}

impl DataSet {
    pub fn new(col_names: Vec<String>) -> Self {
        Self {
            col_names,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(col_names: Vec<String>, rows: Vec<Row>) -> Self {
        Self { col_names, rows }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_names.len()
    }

    /// 第一个与列数不一致的行号
    pub fn first_malformed_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.len() != self.col_names.len())
    }

    /// 取出指定列的全部值
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.col_names.iter().position(|c| c == name)?;
        Some(self.rows.iter().filter_map(|r| r.get(idx)).collect())
    }
}
