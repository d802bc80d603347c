// ロギング初期化
// RUST_LOG が設定されていればそちらを優先する

use std::io::Write;

/// 引数から既定のログレベルを決定
pub fn default_level(quiet: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// env_loggerを初期化（標準エラー出力、レベルラベル付き）
pub fn init_logging(quiet: bool, debug: bool) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level(quiet, debug)),
    )
    .format(|buf, record| writeln!(buf, "[{:<5}] {}", record.level(), record.args()))
    .try_init()
}
