//! 日志初始化：`DUZHE_LOG` 控制过滤（默认 warn），`--quiet` 只保留 error。
//!
//! 日志写 stderr，报告写 stdout。

use tracing_subscriber::{EnvFilter, prelude::*};

pub fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_env("DUZHE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
