// CombineResults - 全結果の収集・整列・結合

use crate::core::{Item, ItemReceiver, ItemSender, Stage};
use async_trait::async_trait;

/// 結合時の区切り文字
pub const COMBINE_SEPARATOR: &str = "_";

/// 文字列をバイト順に整列し `_` で結合する
///
/// 空の入力に対しては空文字列を返す。
pub fn combine_results(mut values: Vec<String>) -> String {
    values.sort();
    values.join(COMBINE_SEPARATOR)
}

/// 入力を全て受け取ってから単一の結合結果を送出するステージ
#[derive(Debug, Default, Clone)]
pub struct CombineResultsStage;

impl CombineResultsStage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Stage for CombineResultsStage {
    fn name(&self) -> &str {
        "combine_results"
    }

    async fn process(&self, mut input: ItemReceiver, output: ItemSender) {
        let mut collected = Vec::new();

        while let Some(item) = input.recv().await {
            match item {
                Item::Text(value) => collected.push(value),
                other => {
                    log::warn!("combine_results: unsupported item kind '{}' skipped", other.kind());
                }
            }
        }

        let count = collected.len();
        let combined = combine_results(collected);
        log::debug!("combine_results: joined {count} entries");

        if output.send(Item::Text(combined)).await.is_err() {
            log::debug!("combine_results: downstream closed before final value");
        }
    }
}
