// Source - 入力値配信ステージ

use crate::core::{Item, ItemReceiver, ItemSender, Stage};
use async_trait::async_trait;

/// 固定の整数列を順番に送出するステージ
#[derive(Debug, Clone)]
pub struct SourceStage {
    values: Vec<i64>,
}

impl SourceStage {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

#[async_trait]
impl Stage for SourceStage {
    fn name(&self) -> &str {
        "source"
    }

    async fn process(&self, input: ItemReceiver, output: ItemSender) {
        // 先頭ステージは入力を読まない
        drop(input);

        for &value in &self.values {
            if output.send(Item::Int(value)).await.is_err() {
                // 下流が閉じられた場合は正常終了
                log::debug!("source: downstream closed, stopping early");
                break;
            }
        }
        // outputをドロップしてチャンネル終了シグナル
    }
}
