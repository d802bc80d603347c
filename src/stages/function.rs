// クロージャをステージとして扱うアダプタ

use crate::core::{ItemReceiver, ItemSender, Stage};
use async_trait::async_trait;
use std::future::Future;

/// `(入力, 出力) -> Future` の関数をステージとして実行する
///
/// ソースやシンクのような小さな処理をその場で書くために使う。
pub struct FnStage<F> {
    name: String,
    func: F,
}

impl<F, Fut> FnStage<F>
where
    F: Fn(ItemReceiver, ItemSender) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

#[async_trait]
impl<F, Fut> Stage for FnStage<F>
where
    F: Fn(ItemReceiver, ItemSender) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn process(&self, input: ItemReceiver, output: ItemSender) {
        (self.func)(input, output).await
    }
}
