// ダイジェスト提供機能
// CRC32/MD5の計算を外部クレートに委譲し、疑似遅延を付与する

pub mod implementations;

// 公開API
pub use implementations::{DigestSettings, StandardDigestProvider};
