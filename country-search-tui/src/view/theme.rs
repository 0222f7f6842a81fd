//! 主题：颜色与常用样式

use country_search_core::Severity;
use ratatui::style::{Color, Modifier, Style};

/// 主题颜色（深色）
pub mod colors {
    use ratatui::style::Color;

    pub const FG: Color = Color::Rgb(212, 212, 212);
    pub const STATUS_BG: Color = Color::Rgb(30, 30, 30);
    pub const BORDER: Color = Color::Rgb(62, 62, 62);
    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 122, 204);
    pub const HIGHLIGHT: Color = Color::Rgb(0, 122, 204);
    pub const SELECTED_BG: Color = Color::Rgb(38, 79, 120);
    pub const SUCCESS: Color = Color::Rgb(78, 201, 176);
    pub const WARNING: Color = Color::Rgb(206, 145, 120);
    pub const ERROR: Color = Color::Rgb(244, 135, 113);
    pub const MUTED: Color = Color::Rgb(128, 128, 128);
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式（焦点面板高亮）
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(colors::BORDER_FOCUSED)
        } else {
            Style::default().fg(colors::BORDER)
        }
    }

    /// 选中项样式
    pub fn selected() -> Style {
        Style::default()
            .bg(colors::SELECTED_BG)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors::FG).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default()
            .fg(colors::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(colors::FG)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors::MUTED)
    }

    pub fn title_bar() -> Style {
        Style::default().bg(colors::HIGHLIGHT).fg(Color::White)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors::STATUS_BG).fg(colors::FG)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// 通知样式，按严重程度着色
    pub fn notification(severity: Severity) -> Style {
        let color = match severity {
            Severity::Success => colors::SUCCESS,
            Severity::Info => colors::WARNING,
            Severity::Failure => colors::ERROR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
