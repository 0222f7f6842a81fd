//! Update 层：消费消息，修改状态
//!
//!     src/update/mod.rs
//!         mod search;     // 搜索面板消息处理

mod search;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            log::info!("Quit requested");
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::SearchMessage;
    use crate::model::FocusPanel;
    use crate::test_support::{app, settle};

    #[tokio::test]
    async fn quit_and_focus() {
        let mut app = app();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Results);
        update(&mut app, AppMessage::Noop);
        assert!(!app.should_quit);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn typed_search_selects_first_entry() {
        let mut app = app();
        update(&mut app, AppMessage::Search(SearchMessage::Type('m')));
        update(&mut app, AppMessage::Search(SearchMessage::Type('a')));
        settle().await;

        app.sync_results();
        assert_eq!(app.result_count(), 3);
        assert_eq!(app.selected, Some(0));
    }
}
