//! 结果构建器
//!
//! 由状态、列名和行组装 `ExecutionResult`。构建器不修正行数据：
//! 行宽与列数不一致时直接报告内部错误。

use super::execution_result::ExecutionResult;
use crate::core::error::{DBError, DBResult};
use crate::core::{DataSet, Row};

/// 结果构建器
#[derive(Debug, Default)]
pub struct ResultBuilder {
    col_names: Option<Vec<String>>,
    rows: Vec<Row>,
    error: Option<DBError>,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置列名
    pub fn col_names(mut self, col_names: Vec<String>) -> Self {
        self.col_names = Some(col_names);
        self
    }

    /// 追加一行
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// 追加多行
    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// 设置完整数据集
    pub fn value(mut self, dataset: DataSet) -> Self {
        self.col_names = Some(dataset.col_names);
        self.rows = dataset.rows;
        self
    }

    /// 设置失败状态
    pub fn error(mut self, error: DBError) -> Self {
        self.error = Some(error);
        self
    }

    /// 构建结果
    pub fn build(self) -> DBResult<ExecutionResult> {
        if let Some(error) = self.error {
            return Ok(ExecutionResult::Error(error));
        }

        match self.col_names {
            None if self.rows.is_empty() => Ok(ExecutionResult::Success),
            None => Err(DBError::Internal(format!(
                "{} rows built without column names",
                self.rows.len()
            ))),
            Some(col_names) => {
                let dataset = DataSet::with_rows(col_names, self.rows);
                if let Some(idx) = dataset.first_malformed_row() {
                    return Err(DBError::Internal(format!(
                        "row {} has {} values, expected {}",
                        idx,
                        dataset.rows[idx].len(),
                        dataset.col_count()
                    )));
                }
                Ok(ExecutionResult::DataSet(dataset))
            }
        }
    }
}
