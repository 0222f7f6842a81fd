//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时主循环会自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 两个面板共用的导航键
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Search(SearchMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Search(SearchMessage::SelectNext);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Search(SearchMessage::Activate);
    }

    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_results_keys(key)
    }
}

/// 输入框获得焦点时的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }
    if DefaultKeymap::BACKSPACE.matches(&key) {
        return AppMessage::Search(SearchMessage::Backspace);
    }

    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Search(SearchMessage::Type(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 结果列表获得焦点时的按键
fn handle_results_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::NAV_UP_ALT.matches(&key) {
        return AppMessage::Search(SearchMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN_ALT.matches(&key) {
        return AppMessage::Search(SearchMessage::SelectNext);
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    AppMessage::Noop
}
