// エンドツーエンド統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::*;
use signer_pipeline::{
    compute_signature, create_quiet_signer_engine, execute_pipeline, CombineResultsStage, Item,
    MultiHashStage, SignerEngine, SingleHashStage, SinkStage, SourceStage, Stage,
    StandardDigestProvider,
};
use signer_pipeline::{DefaultPipelineConfig, DigestSettings};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fibonacci_input_matches_golden_value() {
    let signature = compute_signature(&FIBONACCI_INPUT).await.unwrap();

    assert_eq!(signature, GOLDEN_FIBONACCI);
}

#[tokio::test]
async fn test_two_values_match_golden_value() {
    let signature = compute_signature(&[0, 1]).await.unwrap();

    assert_eq!(signature, GOLDEN_ZERO_ONE);
}

#[tokio::test]
async fn test_sink_receives_exactly_one_string() {
    let digest = Arc::new(StandardDigestProvider::new());
    let sink = SinkStage::new();
    let handle = sink.handle();

    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(SourceStage::new(FIBONACCI_INPUT.to_vec())),
        Box::new(SingleHashStage::new(Arc::clone(&digest))),
        Box::new(MultiHashStage::new(Arc::clone(&digest))),
        Box::new(CombineResultsStage::new()),
        Box::new(sink),
    ];

    let report = execute_pipeline(stages).await.unwrap();

    assert_eq!(report.stage_count, 5);
    assert_eq!(report.discarded_items, 0);
    assert_eq!(handle.item(), Some(&Item::from(GOLDEN_FIBONACCI)));
}

#[tokio::test]
async fn test_empty_input_yields_empty_string() {
    let signature = compute_signature(&[]).await.unwrap();

    assert_eq!(signature, "");
}

#[tokio::test]
async fn test_duplicate_values_are_kept() {
    let signature = compute_signature(&[0, 0]).await.unwrap();

    assert_eq!(signature, format!("{MULTI_HASH_OF_ZERO}_{MULTI_HASH_OF_ZERO}"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_repeated_runs_are_identical() {
    let engine = create_quiet_signer_engine(StandardDigestProvider::new());

    for _ in 0..25 {
        let summary = engine.run(FIBONACCI_INPUT.to_vec()).await.unwrap();
        assert_eq!(summary.output, GOLDEN_FIBONACCI);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_engines_do_not_interfere() {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(tokio::spawn(async {
            compute_signature(&FIBONACCI_INPUT).await.unwrap()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), GOLDEN_FIBONACCI);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_delayed_digest_gives_same_result() {
    let engine = create_quiet_signer_engine(DelayedDigestProvider::new(Duration::from_millis(2)));

    let summary = engine.run(FIBONACCI_INPUT.to_vec()).await.unwrap();

    assert_eq!(summary.output, GOLDEN_FIBONACCI);
}

#[tokio::test(start_paused = true)]
async fn test_slow_digest_latency_overlaps_across_items() {
    // 1回のslow呼び出しに1秒。7項目を逐次処理すれば7秒以上かかる
    let settings = DigestSettings::new().with_slow_latency(Duration::from_secs(1));
    let engine = create_quiet_signer_engine(StandardDigestProvider::with_settings(settings));

    let start = tokio::time::Instant::now();
    let summary = engine.run(FIBONACCI_INPUT.to_vec()).await.unwrap();

    assert_eq!(summary.output, GOLDEN_FIBONACCI);
    assert!(start.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_reporter_sees_every_stage_in_order() {
    let reporter = RecordingReporter::new();
    let engine = SignerEngine::new(
        StandardDigestProvider::new(),
        DefaultPipelineConfig::default(),
        reporter,
    );

    engine.run(vec![0, 1]).await.unwrap();

    assert_eq!(
        engine.reporter().events(),
        vec![
            "started:5",
            "stage:0:source",
            "stage:1:single_hash",
            "stage:2:multi_hash",
            "stage:3:combine_results",
            "stage:4:sink",
            "completed",
        ]
    );
}
