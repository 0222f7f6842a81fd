//! 状态栏：快捷键提示 + 最近一条通知

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app.focus).iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if app.session.is_searching() {
        spans.push(separator());
        spans.push(Span::styled("Searching...", Styles::muted()));
    } else if let Some(notification) = app.session.latest_notification() {
        spans.push(separator());
        spans.push(Span::styled(
            notification.message,
            Styles::notification(notification.severity),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

/// 根据焦点生成快捷键提示
fn hints(focus: FocusPanel) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels"), ("↑↓", "Select"), ("Enter", "Open")];
    match focus {
        FocusPanel::Search => hints.push(("Esc", "Clear")),
        FocusPanel::Results => hints.push(("q", "Quit")),
    }
    hints.push(("Ctrl+C", "Quit"));
    hints
}
