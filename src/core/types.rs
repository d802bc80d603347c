// パイプラインを流れるデータ型定義

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;

/// ステージ間の受け渡しバッファ（送信側）
pub type ItemSender = mpsc::Sender<Item>;

/// ステージ間の受け渡しバッファ（受信側）
pub type ItemReceiver = mpsc::Receiver<Item>;

/// パイプラインを流れる値
///
/// ソースでは整数、SingleHash以降は文字列になる。
/// どのステージも扱えない種類の値は `Unsupported` として表現し、
/// 受け取ったステージはログを出してスキップする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Int(i64),
    Text(String),
    Unsupported { kind: String },
}

impl Item {
    /// 値の種類名を取得（ログ出力用）
    pub fn kind(&self) -> &str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Unsupported { kind } => kind,
        }
    }

    /// 文字列値であれば取り出す
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
            Self::Unsupported { kind } => write!(f, "<unsupported: {kind}>"),
        }
    }
}

/// ステージチェーン実行のレポート
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub stage_count: usize,
    pub discarded_items: usize,
    pub elapsed: Duration,
}

/// 署名パイプライン全体のサマリー
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineSummary {
    pub input_values: Vec<i64>,
    pub output: String,
    pub stage_count: usize,
    pub elapsed_secs: f64,
    pub started_at: DateTime<Utc>,
}
