//! App 状态定义 (Model)
//!
//! 计算器实例、按键焦点与上一帧的按键区域

use ratatui::layout::{Position as ScreenPosition, Rect};

use super::keypad::{Button, Keypad, Position};
use crate::calculator::Calculator;
use crate::config::Theme;

/// 应用状态
pub struct App {
    pub calculator: Calculator,
    pub keypad: Keypad,
    pub focus: Position,
    pub theme: Theme,
    pub message: Option<String>,
    pub button_areas: Vec<(Rect, Button)>, // 上一次渲染时各按键的位置，用于鼠标命中
}

impl App {
    /// 创建新的应用实例
    pub fn new(theme: Theme) -> Self {
        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
            focus: (0, 0),
            theme,
            message: None,
            button_areas: Vec::new(),
        }
    }

    pub fn focused_button(&self) -> Option<Button> {
        self.keypad.get(self.focus)
    }

    /// 屏幕坐标处的按键
    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        let point = ScreenPosition::new(column, row);
        self.button_areas
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, button)| *button)
    }
}
