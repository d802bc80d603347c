// ステージ層 - パイプラインを構成する各処理段
// ソース → SingleHash → MultiHash → CombineResults → シンク

pub mod combine;
pub mod function;
pub mod multi_hash;
pub mod single_hash;
pub mod sink;
pub mod source;

// 公開API
pub use combine::{combine_results, CombineResultsStage};
pub use function::FnStage;
pub use multi_hash::{multi_hash, MultiHashStage, MULTI_HASH_TIMES};
pub use single_hash::{single_hash, SingleHashStage};
pub use sink::{SinkHandle, SinkStage};
pub use source::SourceStage;
