// Sink - 最終値の受け取り

use crate::core::{Item, ItemReceiver, ItemSender, Stage};
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};

/// シンクが受け取った最終値への読み取り用ハンドル
#[derive(Debug, Clone, Default)]
pub struct SinkHandle {
    slot: Arc<OnceLock<Item>>,
}

impl SinkHandle {
    /// 受け取った値（未受信なら `None`）
    pub fn item(&self) -> Option<&Item> {
        self.slot.get()
    }

    /// 受け取った値が文字列であればその内容
    pub fn text(&self) -> Option<&str> {
        self.item().and_then(Item::as_text)
    }

    pub fn is_received(&self) -> bool {
        self.slot.get().is_some()
    }
}

/// 最終値をちょうど1つだけ読み取るステージ
///
/// 2つ目の値は待たない。
#[derive(Debug, Clone, Default)]
pub struct SinkStage {
    handle: SinkHandle,
}

impl SinkStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> SinkHandle {
        self.handle.clone()
    }
}

#[async_trait]
impl Stage for SinkStage {
    fn name(&self) -> &str {
        "sink"
    }

    async fn process(&self, mut input: ItemReceiver, _output: ItemSender) {
        let Some(item) = input.recv().await else {
            log::warn!("sink: input closed without a final value");
            return;
        };

        if item.as_text().is_none() {
            log::warn!("sink: final value has unexpected kind '{}'", item.kind());
        }

        if self.handle.slot.set(item).is_err() {
            log::warn!("sink: final value already received, new value discarded");
        }
    }
}
