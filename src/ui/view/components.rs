//! 通用 UI 组件
//!
//! 显示屏、按键等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// [组件] 单个按键
pub fn render_button_widget(
    frame: &mut Frame,
    area: Rect,
    label: char,
    color: Color,
    is_focused: bool,
) {
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(color)
        .add_modifier(Modifier::BOLD);
    if is_focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // 垂直居中
    let padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::default(); padding as usize];
    lines.push(Line::from(label.to_string()));

    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// [组件] 右对齐的显示屏
pub fn render_display_widget(
    frame: &mut Frame,
    area: Rect,
    pending: &str,
    value: &str,
    fg: Color,
    bg: Color,
) {
    let base = Style::default().fg(fg).bg(bg);
    let lines = vec![
        Line::styled(pending.to_string(), base.add_modifier(Modifier::DIM)),
        Line::default(),
        Line::styled(value.to_string(), base.add_modifier(Modifier::BOLD)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .style(base)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, area);
}
