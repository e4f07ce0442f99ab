//! Action 枚举定义 (Intent)
//!
//! 鼠标与键盘事件转化为明确的语义化 Action

use super::keypad::{Button, Direction};

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Press(Button), // 鼠标点击按键
    MoveFocus(Direction),
    PressFocused, // Enter / Space
}
