//! ログ初期化
//!
//! tracing-subscriber の fmt 出力を使う。`RUST_LOG` が指定されていればそれを優先する。

use tracing_subscriber::{fmt, EnvFilter};

/// ログを初期化
///
/// `verbose` のときは debug、それ以外は info。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// テスト用（重複初期化は無視）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
