// 進捗監視の具象実装

use crate::core::PipelineReporter;
use async_trait::async_trait;
use std::time::Duration;

/// ログ出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsolePipelineReporter {
    quiet: bool,
}

impl ConsolePipelineReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl PipelineReporter for ConsolePipelineReporter {
    async fn report_started(&self, stage_count: usize) {
        if !self.quiet {
            log::info!("🚀 Starting pipeline with {stage_count} stages");
        }
    }

    async fn report_stage_completed(&self, index: usize, stage: &str) {
        if !self.quiet {
            log::info!("📊 Stage #{index} ({stage}) drained");
        }
    }

    async fn report_completed(&self, elapsed: Duration) {
        if !self.quiet {
            log::info!("✅ Pipeline completed in {:.3}s", elapsed.as_secs_f64());
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpPipelineReporter;

impl NoOpPipelineReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for NoOpPipelineReporter {
    async fn report_started(&self, _stage_count: usize) {
        // 何もしない
    }

    async fn report_stage_completed(&self, _index: usize, _stage: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _elapsed: Duration) {
        // 何もしない
    }
}
