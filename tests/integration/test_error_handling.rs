// エラーハンドリングの統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::*;
use signer_pipeline::core::{ItemReceiver, ItemSender};
use signer_pipeline::{
    execute_pipeline, CombineResultsStage, DefaultPipelineConfig, FnStage, Item, MultiHashStage,
    NoOpPipelineReporter, PipelineError, SignerEngine, SingleHashStage, SinkStage, SourceStage,
    Stage, StagePipeline, StandardDigestProvider,
};
use std::sync::Arc;
use std::time::Duration;

fn mixed_source() -> Box<dyn Stage> {
    Box::new(FnStage::new("mixed_source", |_input: ItemReceiver, output: ItemSender| async move {
        let items = vec![
            Item::Unsupported { kind: "float".to_string() },
            Item::Int(0),
            Item::Unsupported { kind: "bytes".to_string() },
            Item::Int(1),
        ];
        for item in items {
            if output.send(item).await.is_err() {
                break;
            }
        }
    }))
}

#[tokio::test]
async fn test_unsupported_items_are_skipped() {
    let digest = Arc::new(StandardDigestProvider::new());
    let sink = SinkStage::new();
    let handle = sink.handle();

    let stages: Vec<Box<dyn Stage>> = vec![
        mixed_source(),
        Box::new(SingleHashStage::new(Arc::clone(&digest))),
        Box::new(MultiHashStage::new(Arc::clone(&digest))),
        Box::new(CombineResultsStage::new()),
        Box::new(sink),
    ];

    execute_pipeline(stages).await.unwrap();

    assert_eq!(handle.text(), Some(GOLDEN_ZERO_ONE));
}

#[tokio::test]
async fn test_zero_source_buffer_is_rejected() {
    let config = DefaultPipelineConfig::new().with_source_buffer_size(0);
    let pipeline = StagePipeline::new(vec![Box::new(SourceStage::new(vec![0]))]);

    let result = pipeline
        .execute(&config, Arc::new(NoOpPipelineReporter::new()))
        .await;

    assert!(matches!(result, Err(PipelineError::ConfigurationError { .. })));
}

#[tokio::test]
async fn test_zero_handoff_buffer_is_rejected_by_engine() {
    let engine = SignerEngine::new(
        StandardDigestProvider::new(),
        DefaultPipelineConfig::new().with_handoff_buffer_size(0),
        RecordingReporter::new(),
    );

    let error = engine.run(vec![0, 1]).await.unwrap_err();

    assert!(matches!(error, PipelineError::ConfigurationError { .. }));
    // 実行前に失敗するため報告は行われない
    assert!(engine.reporter().events().is_empty());
}

#[tokio::test]
async fn test_panicking_stage_surfaces_without_deadlock() {
    let exploding: Box<dyn Stage> = Box::new(FnStage::new(
        "exploding",
        |mut input: ItemReceiver, _output: ItemSender| async move {
            if let Some(item) = input.recv().await {
                panic!("cannot handle {item}");
            }
        },
    ));

    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(SourceStage::new(vec![0, 1, 1, 2, 3, 5, 8])),
        exploding,
        Box::new(CombineResultsStage::new()),
        Box::new(SinkStage::new()),
    ];

    let result = tokio::time::timeout(Duration::from_secs(5), execute_pipeline(stages))
        .await
        .expect("pipeline must not deadlock after a stage panic");

    let error = result.unwrap_err();
    assert!(matches!(error, PipelineError::StageTaskError { .. }));
    assert_eq!(error.stage(), Some("exploding"));
}

#[tokio::test]
async fn test_sink_stops_after_first_value() {
    let sink = SinkStage::new();
    let handle = sink.handle();

    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(SourceStage::new((0..100).collect())),
        Box::new(sink),
    ];

    let report = tokio::time::timeout(Duration::from_secs(5), execute_pipeline(stages))
        .await
        .expect("source must stop once the sink closes its input")
        .unwrap();

    assert_eq!(report.stage_count, 2);
    assert_eq!(handle.item(), Some(&Item::Int(0)));
    // 整数は最終値として文字列にならない
    assert_eq!(handle.text(), None);
}

#[tokio::test]
async fn test_sink_without_input_records_nothing() {
    let sink = SinkStage::new();
    let handle = sink.handle();

    let stages: Vec<Box<dyn Stage>> = vec![Box::new(SourceStage::new(Vec::new())), Box::new(sink)];

    execute_pipeline(stages).await.unwrap();

    assert!(!handle.is_received());
}
