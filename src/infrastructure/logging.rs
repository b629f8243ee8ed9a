use crate::core::constants::{defaults, env as env_keys};
use tracing_subscriber::EnvFilter;

/// 初始化日志，输出到 stderr，避免与命令输出混在一起
pub fn init() {
    let filter = EnvFilter::try_from_env(env_keys::LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL_STR));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init();
}
