// エンジン層 - 並列処理とオーケストレーション
// ステージとサービスを組み合わせて高レベルな処理を提供

pub mod api;
pub mod pipeline;
pub mod signer_engine;

// 公開API - 主要エンジンクラス
pub use api::{
    compute_signature, create_default_signer_engine, create_quiet_signer_engine,
    execute_pipeline,
};
pub use pipeline::StagePipeline;
pub use signer_engine::SignerEngine;
