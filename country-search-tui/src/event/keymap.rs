//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 结果列表（q 仅在列表获得焦点时退出，输入框中它是普通字符）
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_UP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const NAV_DOWN_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 输入框
    pub const CLEAR: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
}
