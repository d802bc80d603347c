// パイプライン実行のエラー型定義
// ステージ自身はエラーを返さない。ここにあるのは実行器側で検出できる失敗のみ

use thiserror::Error;

/// パイプライン実行器のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("ステージタスクエラー: {stage} - {source}")]
    StageTaskError {
        stage: String,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("出力欠落エラー: 最終ステージに値が届きませんでした")]
    MissingOutputError,
}

impl PipelineError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// ステージタスクエラーの作成
    pub fn stage_task(stage: impl Into<String>, source: tokio::task::JoinError) -> Self {
        Self::StageTaskError {
            stage: stage.into(),
            source,
        }
    }

    /// 失敗したステージ名を取得
    pub fn stage(&self) -> Option<&str> {
        match self {
            Self::StageTaskError { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

/// パイプライン処理の結果型
pub type PipelineResult<T> = Result<T, PipelineError>;
