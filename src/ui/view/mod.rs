//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::keypad::Button;
use super::state::App;
use crate::calculator::{State, format_number};
use crate::config::Theme;
use components::{render_button_widget, render_display_widget};
use layouts::keypad_grid;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(5), // 显示屏
            Constraint::Min(10),   // 按键
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_display(frame, app, chunks[1]);
    render_keypad(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🧮 计算器")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_display(frame: &mut Frame, app: &App, area: Rect) {
    render_display_widget(
        frame,
        area,
        &pending_text(app.calculator.state()),
        app.calculator.display(),
        app.theme.display_fg,
        app.theme.display_bg,
    );
}

/// 显示屏上方的小字：已选运算符或上一次求值
pub fn pending_text(state: &State) -> String {
    match state {
        State::Idle => String::new(),
        State::Armed { operator, first } => format!("{} {}", format_number(*first), operator),
        State::Resolved(eval) => match eval.operator {
            Some(op) => format!(
                "{} {} {} =",
                format_number(eval.first),
                op,
                format_number(eval.second)
            ),
            None => format!("{} =", format_number(eval.second)),
        },
    }
}

fn render_keypad(frame: &mut Frame, app: &mut App, area: Rect) {
    let widths: Vec<usize> = app.keypad.rows().iter().map(Vec::len).collect();
    let grid = keypad_grid(area, &widths);

    app.button_areas.clear();
    for (row, (buttons, cells)) in app.keypad.rows().iter().zip(&grid).enumerate() {
        for (col, (button, cell)) in buttons.iter().zip(cells).enumerate() {
            let color = button_color(&app.theme, *button);
            render_button_widget(frame, *cell, button.label(), color, app.focus == (row, col));
            app.button_areas.push((*cell, *button));
        }
    }
}

fn button_color(theme: &Theme, button: Button) -> Color {
    match button {
        Button::Input(_) => theme.digit,
        Button::Operator(_) => theme.operator,
        Button::Clear => theme.clear,
        Button::Equals => theme.equals,
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[鼠标] 点击按键  [方向键/hjkl] 移动焦点  [Enter] 按下  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
