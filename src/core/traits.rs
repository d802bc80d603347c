// パイプラインのトレイト定義
// ステージ・ダイジェスト・設定・進捗報告の抽象化インターフェース

use super::types::{ItemReceiver, ItemSender};
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;
use std::time::Duration;

/// パイプラインの1段を表すトレイト
///
/// 入力バッファが閉じられるまで読み続け、結果を出力バッファに書き込む。
/// 出力バッファは `output` の所有権で表現されるため、
/// `process` から戻った時点で必ずちょうど一度だけ閉じられる。
#[async_trait]
pub trait Stage: Send + Sync {
    /// ステージ名（ログ・進捗報告用）
    fn name(&self) -> &str;

    /// ステージ処理の実行
    async fn process(&self, input: ItemReceiver, output: ItemSender);
}

/// ハッシュ関数の提供者を抽象化するトレイト
///
/// 実装は純粋かつ決定的であること。`slow_digest` は遅延を伴う前提。
#[automock]
#[async_trait]
pub trait DigestProvider: Send + Sync {
    /// 高速ダイジェスト（CRC系）
    async fn fast_digest(&self, data: &str) -> String;

    /// 低速ダイジェスト（MD5系）
    async fn slow_digest(&self, data: &str) -> String;
}

// DigestProvider for Arc<dyn DigestProvider>
#[async_trait]
impl DigestProvider for Arc<dyn DigestProvider> {
    async fn fast_digest(&self, data: &str) -> String {
        self.as_ref().fast_digest(data).await
    }

    async fn slow_digest(&self, data: &str) -> String {
        self.as_ref().slow_digest(data).await
    }
}

/// パイプライン設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 先頭バッファの容量
    fn source_buffer_size(&self) -> usize;

    /// ステージ間バッファの容量
    ///
    /// tokioのmpscは容量0（同期的な受け渡し）を作れないため、最小値は1。
    /// 容量1でも送信側は受信を待たずに1件先行できる点が同期受け渡しと異なる。
    fn handoff_buffer_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// パイプライン開始時の報告
    async fn report_started(&self, stage_count: usize);

    /// ステージ完了時の報告
    async fn report_stage_completed(&self, index: usize, stage: &str);

    /// パイプライン完了時の報告
    async fn report_completed(&self, elapsed: Duration);
}
