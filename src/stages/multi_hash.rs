// MultiHash - 添字付き6並列ダイジェストの計算と添字順での再構成

use crate::core::{DigestProvider, Item, ItemReceiver, ItemSender, Stage};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::{JoinError, JoinSet};

/// 1項目あたりのサブ計算数
pub const MULTI_HASH_TIMES: usize = 6;

/// 単一値のマルチハッシュを計算
///
/// 添字 `i` ごとにサブタスクを起動して `fast(i + 値)` を計算し、
/// 共有スロット配列の `i` 番目に書き込む。ロックは各書き込みの間だけ保持し、
/// ダイジェスト計算中は保持しない。全サブタスク完了後、完了順ではなく
/// 添字順に連結する。いずれかのサブタスクが失敗した場合は `JoinError` を返す。
pub async fn multi_hash<D>(digest: Arc<D>, value: &str) -> Result<String, JoinError>
where
    D: DigestProvider + ?Sized + 'static,
{
    let slots: Arc<Mutex<[String; MULTI_HASH_TIMES]>> = Arc::default();
    let mut tasks = JoinSet::new();

    for index in 0..MULTI_HASH_TIMES {
        let digest = Arc::clone(&digest);
        let slots = Arc::clone(&slots);
        let data = format!("{index}{value}");
        tasks.spawn(async move {
            let hash = digest.fast_digest(&data).await;
            let mut slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots[index] = hash;
        });
    }

    while let Some(result) = tasks.join_next().await {
        result?;
    }

    let slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
    Ok(slots.concat())
}

/// 文字列を受け取りマルチハッシュを送出するステージ
///
/// 項目ごとにトップレベルのタスクを起動する。同時に処理する項目数は制限しない。
pub struct MultiHashStage<D> {
    digest: Arc<D>,
}

impl<D> MultiHashStage<D>
where
    D: DigestProvider + 'static,
{
    pub fn new(digest: Arc<D>) -> Self {
        Self { digest }
    }
}

#[async_trait]
impl<D> Stage for MultiHashStage<D>
where
    D: DigestProvider + 'static,
{
    fn name(&self) -> &str {
        "multi_hash"
    }

    async fn process(&self, mut input: ItemReceiver, output: ItemSender) {
        let mut tasks = JoinSet::new();

        while let Some(item) = input.recv().await {
            let value = match item {
                Item::Text(value) => value,
                other => {
                    log::warn!("multi_hash: unsupported item kind '{}' skipped", other.kind());
                    continue;
                }
            };

            let digest = Arc::clone(&self.digest);
            let output = output.clone();
            tasks.spawn(async move {
                match multi_hash(digest, &value).await {
                    Ok(hash) => {
                        log::debug!("multi_hash: {value} -> {hash}");
                        if output.send(Item::Text(hash)).await.is_err() {
                            log::debug!("multi_hash: downstream closed, dropping result");
                        }
                    }
                    Err(error) => {
                        log::error!("multi_hash: sub-task failed for {value}, item skipped: {error}");
                    }
                }
            });
        }

        while let Some(result) = tasks.join_next().await {
            if let Err(error) = result {
                log::error!("multi_hash: item task failed: {error}");
            }
        }
    }
}
