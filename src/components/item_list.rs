//! Filtered item list with a divider under each row

use crate::model::item::{ListItem, PHOTO_GLYPH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{self, Block, Borders, List, ListState},
    Frame,
};

/// Render `items` into `area`, highlighting the selection in `list_state`
pub fn render_item_list(
    frame: &mut Frame,
    area: Rect,
    items: &[&ListItem],
    total: usize,
    list_state: &mut ListState,
) {
    let divider_width = area.width.saturating_sub(4) as usize;

    let rows: Vec<widgets::ListItem> = items
        .iter()
        .map(|item| {
            widgets::ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}  ", PHOTO_GLYPH), Style::default().fg(Color::Gray)),
                    Span::styled(item.title.clone(), Style::default().fg(Color::White)),
                ]),
                Line::from(Span::styled(
                    "─".repeat(divider_width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let title = if items.len() == total {
        format!(" Items ({}) ", total)
    } else {
        format!(" Items ({}/{}) ", items.len(), total)
    };

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, list_state);
}
