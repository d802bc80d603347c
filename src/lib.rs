// 署名パイプライン
// 値の列を SingleHash → MultiHash → CombineResults の固定チェーンで変換する並行パイプライン

pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod stages;

// 公開API
pub use crate::core::{
    DigestProvider, Item, PipelineConfig, PipelineError, PipelineReporter, PipelineResult,
    PipelineSummary, Stage,
};
pub use engine::{
    compute_signature, create_default_signer_engine, create_quiet_signer_engine,
    execute_pipeline, SignerEngine, StagePipeline,
};
pub use services::{
    ConsolePipelineReporter, DefaultPipelineConfig, DigestSettings, NoOpPipelineReporter,
    StandardDigestProvider,
};
pub use stages::{
    combine_results, multi_hash, single_hash, CombineResultsStage, FnStage, MultiHashStage,
    SingleHashStage, SinkHandle, SinkStage, SourceStage,
};
