//! 应用主循环
//!
//! loop {
//!     app.sync_results()                              // 结果容器变化时重置选中项
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//! }
//!
//! Searches finish on the runtime in the background; the 100ms poll timeout
//! doubles as the redraw tick that picks their results up.

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.sync_results();

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
