//! Util 层：基础设施
//!
//!     src/util/mod.rs
//!         mod logging;        // 日志写入文件
//!         mod terminal;       // 终端初始化和恢复
//!
//! 无论 `app::run` 成功与否，`main` 都会调用 `restore_terminal`；
//! panic 时由 `init_terminal` 安装的 hook 负责恢复。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
