// 設定管理機能
// バッファ容量と進捗報告の設定、実行前の検証

pub mod implementations;

// 公開API
pub use implementations::{
    validate_config, DefaultPipelineConfig, DEFAULT_HANDOFF_BUFFER_SIZE,
    DEFAULT_SOURCE_BUFFER_SIZE,
};
