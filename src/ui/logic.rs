//! 业务逻辑处理 (Update/Dispatch)
//!
//! 将 Action 转为计算器调用

use super::actions::Action;
use super::keypad::{Button, Direction};
use super::state::App;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Press(button) => {
                if let Some(position) = self.keypad.position_of(button) {
                    self.focus = position;
                }
                self.press(button);
            }
            Action::MoveFocus(direction) => self.move_focus(direction),
            Action::PressFocused => {
                if let Some(button) = self.focused_button() {
                    self.press(button);
                }
            }
        }
        false
    }

    pub fn move_focus(&mut self, direction: Direction) {
        self.focus = self.keypad.step(self.focus, direction);
    }

    /// 按下一个计算器按键
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Input(token) => self.calculator.input(token),
            Button::Operator(op) => self.calculator.choose_operator(op),
            Button::Equals => self.calculator.equals(),
            Button::Clear => self.calculator.clear(),
        }

        self.message = if self.calculator.divided_by_zero() {
            Some("除数不能为 0".to_string())
        } else {
            None
        };

        tracing::debug!(
            button = %button.label(),
            display = %self.calculator.display(),
            operator = ?self.calculator.operator(),
            first = self.calculator.first_operand(),
            second = self.calculator.second_operand(),
            "按键"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{NAN_SENTINEL, Operator, State, Token};
    use crate::config::Theme;

    fn app() -> App {
        App::new(Theme::default())
    }

    fn digit(d: usize) -> Button {
        Button::Input(Token::DIGITS[d])
    }

    #[test]
    fn test_press_sequence() {
        let mut app = app();
        for button in [digit(5), Button::Operator(Operator::Add), digit(3), Button::Equals] {
            assert!(!app.dispatch(Action::Press(button)));
        }
        assert_eq!(app.calculator.display(), "8.0");
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_press_moves_focus() {
        let mut app = app();
        app.dispatch(Action::Press(Button::Clear));
        assert_eq!(app.focus, (3, 2));
    }

    #[test]
    fn test_press_focused() {
        let mut app = app();
        // (0, 0) 是 7
        app.dispatch(Action::PressFocused);
        app.dispatch(Action::MoveFocus(Direction::Right));
        app.dispatch(Action::PressFocused);
        assert_eq!(app.calculator.display(), "78");

        for _ in 0..4 {
            app.dispatch(Action::MoveFocus(Direction::Down));
        }
        assert_eq!(app.focused_button(), Some(Button::Equals));
        app.dispatch(Action::PressFocused);
        // 没有运算符时结果为 0
        assert_eq!(app.calculator.display(), "0.0");
    }

    #[test]
    fn test_divide_by_zero_message() {
        let mut app = app();
        for button in [digit(8), Button::Operator(Operator::Divide), digit(0), Button::Equals] {
            app.dispatch(Action::Press(button));
        }
        assert_eq!(app.calculator.display(), NAN_SENTINEL);
        assert!(app.message.is_some());

        app.dispatch(Action::Press(Button::Clear));
        assert_eq!(app.message, None);
        assert_eq!(app.calculator.state(), &State::Idle);
    }

    #[test]
    fn test_nan_carried_forward_has_no_zero_divisor_message() {
        let mut app = app();
        for button in [
            digit(8),
            Button::Operator(Operator::Divide),
            digit(0),
            Button::Equals,
            Button::Operator(Operator::Add),
            digit(1),
            Button::Equals,
        ] {
            app.dispatch(Action::Press(button));
        }
        assert_eq!(app.calculator.display(), NAN_SENTINEL);
        assert_eq!(app.calculator.second_operand(), 1.0);
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_quit() {
        assert!(app().dispatch(Action::Quit));
    }
}
