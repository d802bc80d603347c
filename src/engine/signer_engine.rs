// SignerEngine - 依存性注入による署名パイプラインエンジン
// ソース → SingleHash → MultiHash → CombineResults → シンク の固定チェーンを構築・実行

use super::pipeline::StagePipeline;
use crate::{
    core::{
        DigestProvider, PipelineConfig, PipelineError, PipelineReporter, PipelineResult,
        PipelineSummary, Stage,
    },
    stages::{CombineResultsStage, MultiHashStage, SingleHashStage, SinkHandle, SinkStage, SourceStage},
};
use std::sync::Arc;

/// 署名パイプラインエンジン
///
/// ダイジェスト提供者・設定・進捗報告の全てをコンストラクタで注入する。
/// ダイジェスト提供者は各ステージのタスク間で共有されるためArcで保持する。
pub struct SignerEngine<D, C, R> {
    digest: Arc<D>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<D, C, R> SignerEngine<D, C, R>
where
    D: DigestProvider + 'static,
    C: PipelineConfig,
    R: PipelineReporter + 'static,
{
    /// 新しいエンジンを作成
    pub fn new(digest: D, config: C, reporter: R) -> Self {
        Self {
            digest: Arc::new(digest),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// 固定ステージチェーンを構築
    ///
    /// シンクが受け取る最終値は返却される `SinkHandle` から読み取る。
    pub fn build_stages(&self, values: Vec<i64>) -> (Vec<Box<dyn Stage>>, SinkHandle) {
        let sink = SinkStage::new();
        let handle = sink.handle();

        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(SourceStage::new(values)),
            Box::new(SingleHashStage::new(Arc::clone(&self.digest))),
            Box::new(MultiHashStage::new(Arc::clone(&self.digest))),
            Box::new(CombineResultsStage::new()),
            Box::new(sink),
        ];

        (stages, handle)
    }

    /// 値列に対して署名パイプラインを実行
    pub async fn run(&self, values: Vec<i64>) -> PipelineResult<PipelineSummary> {
        let started_at = chrono::Utc::now();
        let (stages, sink) = self.build_stages(values.clone());

        let report = StagePipeline::new(stages)
            .execute(self.config.as_ref(), Arc::clone(&self.reporter))
            .await?;

        let output = sink
            .text()
            .map(str::to_string)
            .ok_or(PipelineError::MissingOutputError)?;

        Ok(PipelineSummary {
            input_values: values,
            output,
            stage_count: report.stage_count,
            elapsed_secs: report.elapsed.as_secs_f64(),
            started_at,
        })
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// ダイジェスト提供者への参照を取得
    pub fn digest(&self) -> &D {
        &self.digest
    }

    /// 進捗報告への参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
