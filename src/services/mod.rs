// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod digest;
pub mod logging;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{validate_config, DefaultPipelineConfig};
pub use digest::{DigestSettings, StandardDigestProvider};
pub use logging::init_logging;
pub use monitoring::{ConsolePipelineReporter, NoOpPipelineReporter};
