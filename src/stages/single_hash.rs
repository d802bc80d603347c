// SingleHash - 項目ごとの複合ダイジェスト計算
// crc(値) ~ crc(md5(値)) を項目単位の並列タスクで計算する

use crate::core::{DigestProvider, Item, ItemReceiver, ItemSender, Stage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinSet;

/// 単一値の複合ダイジェストを計算
///
/// 左辺 `fast(値)` と右辺 `fast(slow(値))` を並行に評価する。
/// md5は元の値から計算し、右辺はmd5の完了後にのみ計算される。
pub async fn single_hash<D>(digest: &D, value: &str) -> String
where
    D: DigestProvider + ?Sized,
{
    let (left, right) = tokio::join!(digest.fast_digest(value), async {
        let md5 = digest.slow_digest(value).await;
        digest.fast_digest(&md5).await
    });
    format!("{left}~{right}")
}

/// 整数・文字列を受け取り複合ダイジェストを送出するステージ
pub struct SingleHashStage<D> {
    digest: Arc<D>,
}

impl<D> SingleHashStage<D>
where
    D: DigestProvider + 'static,
{
    pub fn new(digest: Arc<D>) -> Self {
        Self { digest }
    }
}

#[async_trait]
impl<D> Stage for SingleHashStage<D>
where
    D: DigestProvider + 'static,
{
    fn name(&self) -> &str {
        "single_hash"
    }

    async fn process(&self, mut input: ItemReceiver, output: ItemSender) {
        let mut tasks = JoinSet::new();

        while let Some(item) = input.recv().await {
            let value = match item {
                Item::Int(value) => value.to_string(),
                Item::Text(value) => value,
                other => {
                    log::warn!("single_hash: unsupported item kind '{}' skipped", other.kind());
                    continue;
                }
            };

            // 項目ごとにタスクを起動し、入力ループは待たない
            let digest = Arc::clone(&self.digest);
            let output = output.clone();
            tasks.spawn(async move {
                let hash = single_hash(digest.as_ref(), &value).await;
                log::debug!("single_hash: {value} -> {hash}");
                if output.send(Item::Text(hash)).await.is_err() {
                    log::debug!("single_hash: downstream closed, dropping result for {value}");
                }
            });
        }

        // 全項目タスクの完了を待機
        while let Some(result) = tasks.join_next().await {
            if let Err(error) = result {
                log::error!("single_hash: item task failed: {error}");
            }
        }
    }
}
