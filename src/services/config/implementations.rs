// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult};

/// 先頭バッファのデフォルト容量
pub const DEFAULT_SOURCE_BUFFER_SIZE: usize = 2;

/// ステージ間バッファのデフォルト容量（tokioのmpscで取れる最小値）
pub const DEFAULT_HANDOFF_BUFFER_SIZE: usize = 1;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    source_buffer_size: usize,
    handoff_buffer_size: usize,
    enable_progress: bool,
}

impl DefaultPipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_buffer_size(mut self, size: usize) -> Self {
        self.source_buffer_size = size;
        self
    }

    pub fn with_handoff_buffer_size(mut self, size: usize) -> Self {
        self.handoff_buffer_size = size;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            source_buffer_size: DEFAULT_SOURCE_BUFFER_SIZE,
            handoff_buffer_size: DEFAULT_HANDOFF_BUFFER_SIZE,
            enable_progress: true,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn source_buffer_size(&self) -> usize {
        self.source_buffer_size
    }

    fn handoff_buffer_size(&self) -> usize {
        self.handoff_buffer_size
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// 設定の検証
///
/// tokioのmpscは容量0でパニックするため、実行前に弾く
pub fn validate_config<C: PipelineConfig + ?Sized>(config: &C) -> PipelineResult<()> {
    if config.source_buffer_size() == 0 {
        return Err(PipelineError::configuration(
            "先頭バッファサイズは1以上である必要があります",
        ));
    }

    if config.handoff_buffer_size() == 0 {
        return Err(PipelineError::configuration(
            "ステージ間バッファサイズは1以上である必要があります",
        ));
    }

    Ok(())
}
