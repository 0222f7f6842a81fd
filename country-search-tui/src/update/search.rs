//! 搜索面板消息处理

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Type(c) => {
            app.focus = FocusPanel::Search;
            app.session.type_char(c);
        }
        SearchMessage::Backspace => app.session.backspace(),
        SearchMessage::Clear => {
            app.session.clear_query();
            app.selected = None;
        }
        SearchMessage::SelectPrevious => app.select_previous(),
        SearchMessage::SelectNext => app.select_next(),
        SearchMessage::Activate => {
            if let Some(index) = app.selected.filter(|&i| i < app.result_count()) {
                log::debug!("Activating list entry {index}");
                app.session.activate(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app, settle};

    async fn with_results() -> App {
        let mut app = app();
        update(&mut app, SearchMessage::Type('m'));
        update(&mut app, SearchMessage::Type('a'));
        settle().await;
        app.sync_results();
        app
    }

    #[tokio::test(start_paused = true)]
    async fn selection_wraps_both_ways() {
        let mut app = with_results().await;
        update(&mut app, SearchMessage::SelectPrevious);
        assert_eq!(app.selected, Some(2));
        update(&mut app, SearchMessage::SelectNext);
        assert_eq!(app.selected, Some(0));
        update(&mut app, SearchMessage::SelectNext);
        assert_eq!(app.selected, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn activate_opens_selected_country() {
        let mut app = with_results().await;
        update(&mut app, SearchMessage::SelectNext);
        update(&mut app, SearchMessage::Activate);
        settle().await;
        app.sync_results();

        assert_eq!(app.result_count(), 0);
        assert_eq!(app.selected, None);
        let detail = app.session.detail();
        assert_eq!(detail.len(), 1);
        assert!(detail[0].text_content().contains("Malawi"));
    }

    #[tokio::test(start_paused = true)]
    async fn backspace_and_clear_edit_query() {
        let mut app = with_results().await;
        update(&mut app, SearchMessage::Backspace);
        assert_eq!(app.session.query(), "m");
        update(&mut app, SearchMessage::Clear);
        assert_eq!(app.session.query(), "");
        assert_eq!(app.selected, None);
    }

    #[tokio::test]
    async fn activate_without_results_is_ignored() {
        let mut app = app();
        update(&mut app, SearchMessage::Activate);
        update(&mut app, SearchMessage::SelectNext);
        assert_eq!(app.selected, None);
    }
}
