//! Country Search TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与搜索会话 (`backend/`)
//!
//! The search itself runs on a Tokio runtime owned by `main`; the UI loop
//! stays synchronous and redraws from the shared in-memory containers.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::Result;

use backend::{ConfigService, LocalConfigService, SearchSession};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志写入文件，避免破坏终端界面
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e:#}");
    }

    // 2. 加载配置
    let config = LocalConfigService::new().load()?;
    log::info!("Starting country search against {}", config.api_base_url);

    // 3. 创建异步运行时与搜索会话
    let runtime = tokio::runtime::Runtime::new()?;
    let session = SearchSession::new(&config, runtime.handle().clone())?;
    let mut app = model::App::new(session);

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
