//! 日志初始化
//!
//! TUI 占用了终端，日志写入 `<cache dir>/country-search/country-search.log`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::backend::APP_DIR;

const LOG_FILE: &str = "country-search.log";

/// 日志文件路径
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// 初始化 env_logger，输出到日志文件
pub fn init_logging() -> Result<()> {
    let path = log_path().context("No cache directory for the log file")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}
