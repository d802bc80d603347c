// 進捗監視機能
// パイプライン開始・ステージ完了・全体完了の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsolePipelineReporter, NoOpPipelineReporter};
