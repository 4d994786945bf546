//! 执行器统计信息
//!
//! 记录执行器的调用次数、输出行数、耗时等。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 执行器统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorStats {
    /// 输出的行数
    pub num_rows: usize,
    /// 执行时间（微秒）
    pub exec_time_us: u64,
    /// 执行次数
    pub executions: usize,
    /// 失败次数
    pub failures: usize,
    /// 内存使用峰值（字节）
    pub memory_peak: usize,
}

impl ExecutorStats {
    /// 创建新的统计信息实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 增加输出的行数
    pub fn add_row(&mut self, count: usize) {
        self.num_rows += count;
    }

    /// 增加执行时间
    pub fn add_exec_time(&mut self, duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.exec_time_us = self.exec_time_us.saturating_add(micros);
    }

    /// 记录一次执行
    pub fn record_execution(&mut self, failed: bool) {
        self.executions += 1;
        if failed {
            self.failures += 1;
        }
    }

    /// 设置内存使用峰值
    pub fn set_memory_peak(&mut self, peak: usize) {
        if peak > self.memory_peak {
            self.memory_peak = peak;
        }
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 从 JSON 字符串导入
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 导出为格式化字符串
    pub fn to_formatted_string(&self) -> String {
        format!(
            "executions: {}, failures: {}, rows: {}, exec_time: {}us, memory_peak: {}B",
            self.executions, self.failures, self.num_rows, self.exec_time_us, self.memory_peak
        )
    }
}
