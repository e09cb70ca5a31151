//! # 批量执行器
//!
//! 并行执行批量运行任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{FringeError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 单次运行结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 运行成功
    Success(String),
    /// 跳过（如输出已存在）
    Skipped(String),
    /// 运行失败
    Failed(String, String), // (运行标识, 错误信息)
}

/// 批量运行结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 成功消息，按输入顺序
    pub messages: Vec<String>,
    /// 跳过消息，按输入顺序
    pub skips: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(msg) => {
                self.success += 1;
                self.messages.push(msg);
            }
            ProcessResult::Skipped(msg) => {
                self.skipped += 1;
                self.skips.push(msg);
            }
            ProcessResult::Failed(label, err) => {
                self.failed += 1;
                self.failures.push((label, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = CPU 核数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行作业数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理任务列表，结果按输入顺序汇总
    pub fn run<T, F>(&self, items: Vec<T>, processor: F) -> Result<BatchResult>
    where
        T: Sync,
        F: Fn(&T) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, "Evaluating");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| FringeError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}
