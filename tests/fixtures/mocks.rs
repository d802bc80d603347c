// テスト用のダイジェスト・進捗報告実装

use async_trait::async_trait;
use signer_pipeline::{DigestProvider, PipelineReporter, StandardDigestProvider};
use std::sync::Mutex;
use std::time::Duration;

/// 標準ダイジェストの結果に、入力ごとの人工遅延を加える実装
///
/// 遅延は入力先頭の数字 `d` に対して `(10 - d) * step` となり、
/// MultiHashの添字0が最後に完了する。
#[derive(Debug, Clone)]
pub struct DelayedDigestProvider {
    inner: StandardDigestProvider,
    step: Duration,
}

impl DelayedDigestProvider {
    pub fn new(step: Duration) -> Self {
        Self {
            inner: StandardDigestProvider::new(),
            step,
        }
    }

    fn delay_for(&self, data: &str) -> Duration {
        let lead = data
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);
        self.step * (10 - lead)
    }
}

#[async_trait]
impl DigestProvider for DelayedDigestProvider {
    async fn fast_digest(&self, data: &str) -> String {
        tokio::time::sleep(self.delay_for(data)).await;
        self.inner.fast_digest(data).await
    }

    async fn slow_digest(&self, data: &str) -> String {
        tokio::time::sleep(self.step).await;
        self.inner.slow_digest(data).await
    }
}

/// 報告内容を記録する進捗報告実装
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl PipelineReporter for RecordingReporter {
    async fn report_started(&self, stage_count: usize) {
        self.record(format!("started:{stage_count}"));
    }

    async fn report_stage_completed(&self, index: usize, stage: &str) {
        self.record(format!("stage:{index}:{stage}"));
    }

    async fn report_completed(&self, _elapsed: Duration) {
        self.record("completed".to_string());
    }
}
