// ダイジェスト提供者の具象実装
// アルゴリズム自体は外部クレートに任せ、ここでは文字列化と遅延の再現のみ行う

use crate::core::DigestProvider;
use async_trait::async_trait;
use std::time::Duration;

/// 各ダイジェスト呼び出しに付与する疑似遅延
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestSettings {
    pub fast_latency: Duration,
    pub slow_latency: Duration,
}

impl DigestSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fast_latency(mut self, latency: Duration) -> Self {
        self.fast_latency = latency;
        self
    }

    pub fn with_slow_latency(mut self, latency: Duration) -> Self {
        self.slow_latency = latency;
        self
    }

    /// ミリ秒指定から作成（CLI用）
    pub fn from_millis(fast_ms: u64, slow_ms: u64) -> Self {
        Self::new()
            .with_fast_latency(Duration::from_millis(fast_ms))
            .with_slow_latency(Duration::from_millis(slow_ms))
    }
}

/// CRC32（10進文字列）とMD5（16進小文字）による標準実装
#[derive(Debug, Clone, Default)]
pub struct StandardDigestProvider {
    settings: DigestSettings,
}

impl StandardDigestProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DigestSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DigestSettings {
        &self.settings
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[async_trait]
impl DigestProvider for StandardDigestProvider {
    async fn fast_digest(&self, data: &str) -> String {
        simulate_latency(self.settings.fast_latency).await;
        crc32fast::hash(data.as_bytes()).to_string()
    }

    async fn slow_digest(&self, data: &str) -> String {
        simulate_latency(self.settings.slow_latency).await;
        format!("{:x}", md5::compute(data.as_bytes()))
    }
}
