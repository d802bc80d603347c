// Pipeline - ステージチェーンの実行器
// 各ステージをタスクとして起動し、受け渡しバッファで数珠つなぎにする

use crate::{
    core::{
        Item, ItemReceiver, ItemSender, PipelineConfig, PipelineError, PipelineReport,
        PipelineReporter, PipelineResult, Stage,
    },
    services::validate_config,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// 順序付きステージ列を並行実行するパイプライン
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// 新しいパイプラインを作成
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// 先頭バッファへの入力なしで実行
    pub async fn execute<C, R>(self, config: &C, reporter: Arc<R>) -> PipelineResult<PipelineReport>
    where
        C: PipelineConfig + ?Sized,
        R: PipelineReporter + ?Sized,
    {
        self.execute_with_input(Vec::new(), config, reporter).await
    }

    /// 先頭バッファに `seed` を流し込んで実行
    ///
    /// 全ステージの完了まで待機する。パニックしたステージがあっても
    /// 他のステージは最後まで待機し、最初の失敗をエラーとして返す。
    pub async fn execute_with_input<C, R>(
        self,
        seed: Vec<Item>,
        config: &C,
        reporter: Arc<R>,
    ) -> PipelineResult<PipelineReport>
    where
        C: PipelineConfig + ?Sized,
        R: PipelineReporter + ?Sized,
    {
        validate_config(config)?;

        let start_time = Instant::now();
        let stage_count = self.stages.len();
        let reporting = config.enable_progress_reporting();

        if reporting {
            reporter.report_started(stage_count).await;
        }

        // 先頭バッファ（容量制限付き）
        let (seed_tx, mut input) = mpsc::channel::<Item>(config.source_buffer_size());
        let feeder_handle = spawn_feeder(seed, seed_tx);

        // ステージ起動
        let mut stage_handles = Vec::with_capacity(stage_count);
        for stage in self.stages {
            let (output, next_input) = mpsc::channel::<Item>(config.handoff_buffer_size());
            let name = stage.name().to_string();
            let handle = spawn_stage(stage, input, output);
            stage_handles.push((name, handle));
            input = next_input;
        }

        // 末尾ステージの出力は読み捨てる
        let drain_handle = spawn_drain(input);

        // 全ステージの完了を待機
        let mut first_failure = None;
        for (index, (name, handle)) in stage_handles.into_iter().enumerate() {
            match handle.await {
                Ok(()) => {
                    if reporting {
                        reporter.report_stage_completed(index, &name).await;
                    }
                }
                Err(source) => {
                    log::error!("pipeline: stage #{index} ({name}) failed: {source}");
                    if first_failure.is_none() {
                        first_failure = Some(PipelineError::stage_task(name, source));
                    }
                }
            }
        }

        if let Err(source) = feeder_handle.await {
            log::error!("pipeline: seed feeder failed: {source}");
        }

        let discarded_items = match drain_handle.await {
            Ok(count) => count,
            Err(source) => {
                log::error!("pipeline: output drain failed: {source}");
                0
            }
        };

        if let Some(error) = first_failure {
            return Err(error);
        }

        let elapsed = start_time.elapsed();
        if reporting {
            reporter.report_completed(elapsed).await;
        }

        Ok(PipelineReport {
            stage_count,
            discarded_items,
            elapsed,
        })
    }
}

/// ステージをタスクとして起動
///
/// `output` はタスク終了時（パニック時のアンワインドを含む）にドロップされ、
/// 下流の受け渡しバッファがちょうど一度閉じられる。
fn spawn_stage(stage: Box<dyn Stage>, input: ItemReceiver, output: ItemSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let name = stage.name().to_string();
        log::debug!("pipeline: stage {name} started");
        stage.process(input, output).await;
        log::debug!("pipeline: stage {name} finished");
    })
}

/// 先頭バッファへの投入タスク
fn spawn_feeder(seed: Vec<Item>, seed_tx: ItemSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        for item in seed {
            if seed_tx.send(item).await.is_err() {
                // 先頭ステージが入力を読まない場合は正常終了
                break;
            }
        }
    })
}

/// 末尾バッファの排出タスク
fn spawn_drain(mut output: ItemReceiver) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut discarded = 0;
        while let Some(item) = output.recv().await {
            log::debug!("pipeline: discarding trailing item {item}");
            discarded += 1;
        }
        discarded
    })
}
