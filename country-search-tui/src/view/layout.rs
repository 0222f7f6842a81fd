//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 搜索页 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 搜索页
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);
    pages::search::render(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(concat!(" Country Search v", env!("CARGO_PKG_VERSION")))
        .style(Styles::title_bar());
    frame.render_widget(title, area);
}
