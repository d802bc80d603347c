// 高レベル公開API
// SignerEngine / StagePipeline を簡単に使用できるようにするための便利な関数

use super::{pipeline::StagePipeline, SignerEngine};
use crate::{
    core::{DigestProvider, PipelineReport, PipelineResult, Stage},
    services::{
        ConsolePipelineReporter, DefaultPipelineConfig, DigestSettings, NoOpPipelineReporter,
        StandardDigestProvider,
    },
};
use std::sync::Arc;

/// 任意のステージ列をデフォルト設定で実行
///
/// 先頭バッファ容量2、ステージ間容量1、進捗報告なし
pub async fn execute_pipeline(stages: Vec<Box<dyn Stage>>) -> PipelineResult<PipelineReport> {
    StagePipeline::new(stages)
        .execute(
            &DefaultPipelineConfig::default(),
            Arc::new(NoOpPipelineReporter::new()),
        )
        .await
}

/// SignerEngine作成のヘルパー関数
///
/// 標準ダイジェスト（指定の疑似遅延付き）とコンソール進捗報告を使用
pub fn create_default_signer_engine(
    settings: DigestSettings,
) -> SignerEngine<StandardDigestProvider, DefaultPipelineConfig, ConsolePipelineReporter> {
    SignerEngine::new(
        StandardDigestProvider::with_settings(settings),
        DefaultPipelineConfig::default(),
        ConsolePipelineReporter::new(),
    )
}

/// SignerEngine作成のヘルパー関数（静音版）
///
/// テストやベンチマーク用。任意のダイジェスト提供者を注入できる
pub fn create_quiet_signer_engine<D>(
    digest: D,
) -> SignerEngine<D, DefaultPipelineConfig, NoOpPipelineReporter>
where
    D: DigestProvider + 'static,
{
    SignerEngine::new(
        digest,
        DefaultPipelineConfig::default().with_progress_reporting(false),
        NoOpPipelineReporter::new(),
    )
}

/// 値列の署名を計算（遅延なしの標準ダイジェスト使用）
pub async fn compute_signature(values: &[i64]) -> PipelineResult<String> {
    let engine = create_quiet_signer_engine(StandardDigestProvider::new());
    let summary = engine.run(values.to_vec()).await?;
    Ok(summary.output)
}
