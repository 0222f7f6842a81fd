//! 搜索页：输入框 + 结果列表 + 详情面板
//!
//! 列表和详情面板直接遍历控制器渲染出的元素树，
//! 每个 `<li>` 画成一行。

use country_search_core::render::{Element, Tag};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染搜索页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_input(app, frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    render_results(app, frame, columns[0]);
    render_detail(app, frame, columns[1]);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == FocusPanel::Search;
    let query = app.session.query();

    let block = Block::default()
        .title(" Search for a country ")
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let paragraph = Paragraph::new(Line::from(Span::styled(query.clone(), Styles::text())))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused {
        frame.set_cursor_position((cursor_column(area, &query), area.y + 1));
    }
}

/// Terminal column just after the query inside the bordered input box.
fn cursor_column(area: Rect, query: &str) -> u16 {
    let width = u16::try_from(query.width()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(width);
    x.min(area.right().saturating_sub(2))
}

fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == FocusPanel::Results;
    let entries = app.session.list_entries();

    let block = Block::default()
        .title(format!(" Results ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if entries.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Type a name to search",
            Styles::muted(),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(element_line(entry)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(app.selected);

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Country ")
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let lines = detail_lines(&app.session.detail());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One line per `<li>` of each rendered `<ul>`.
fn detail_lines(roots: &[Element]) -> Vec<Line<'static>> {
    roots
        .iter()
        .flat_map(|root| match root.tag() {
            Tag::Ul => root.elements().map(element_line).collect::<Vec<_>>(),
            _ => vec![element_line(root)],
        })
        .collect()
}

/// Flatten an element's children into styled spans.
fn element_line(element: &Element) -> Line<'static> {
    let spans = element
        .elements()
        .map(|child| match child.tag() {
            Tag::Img => Span::styled(
                format!("[{}] ", child.attr("alt").unwrap_or("image")),
                Styles::muted(),
            ),
            Tag::H4 => Span::styled(child.text_content(), Styles::title()),
            Tag::Span => Span::styled(format!("{} ", child.text_content()), Styles::label()),
            _ => Span::styled(child.text_content(), Styles::text()),
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}
