//! 输入事件映射 (Input -> Action)
//!
//! 数字与运算符只能通过按键网格输入，键盘仅用于移动焦点与退出

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::keypad::Direction;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveFocus(Direction::Up)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveFocus(Direction::Down)),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveFocus(Direction::Left)),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveFocus(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressFocused),
        _ => None,
    }
}

/// 左键按下命中按键时产生 Press
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.button_at(mouse.column, mouse.row).map(Action::Press)
        }
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    match get_mouse_action(app, mouse) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Operator, Token};
    use crate::config::Theme;
    use crate::ui::keypad::Button;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(get_action(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(get_action(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            get_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_digits_are_not_typed() {
        for c in "0123456789.+-*/=".chars() {
            assert_eq!(get_action(key(KeyCode::Char(c))), None, "{c}");
        }
    }

    #[test]
    fn test_focus_keys() {
        assert_eq!(
            get_action(key(KeyCode::Down)),
            Some(Action::MoveFocus(Direction::Down))
        );
        assert_eq!(
            get_action(key(KeyCode::Char('l'))),
            Some(Action::MoveFocus(Direction::Right))
        );
        assert_eq!(get_action(key(KeyCode::Enter)), Some(Action::PressFocused));
    }

    #[test]
    fn test_mouse_click_hits_button() {
        let mut app = App::new(Theme::default());
        let five = Button::Input(Token::DIGITS[5]);
        let plus = Button::Operator(Operator::Add);
        app.button_areas = vec![
            (Rect::new(0, 0, 5, 3), five),
            (Rect::new(5, 0, 5, 3), plus),
        ];

        assert_eq!(get_mouse_action(&app, click(2, 1)), Some(Action::Press(five)));
        assert_eq!(get_mouse_action(&app, click(5, 2)), Some(Action::Press(plus)));
        assert_eq!(get_mouse_action(&app, click(20, 20)), None);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click(2, 1)
        };
        assert_eq!(get_mouse_action(&app, release), None);
    }

    #[test]
    fn test_handle_mouse_event_presses() {
        let mut app = App::new(Theme::default());
        app.button_areas = vec![(Rect::new(0, 0, 5, 3), Button::Input(Token::DIGITS[9]))];
        assert!(!handle_mouse_event(&mut app, click(1, 1)));
        assert!(!handle_mouse_event(&mut app, click(1, 1)));
        assert_eq!(app.calculator.display(), "99");
    }

    #[test]
    fn test_handle_key_event_quit() {
        let mut app = App::new(Theme::default());
        assert!(handle_key_event(&mut app, key(KeyCode::Char('q'))));
        assert!(!handle_key_event(&mut app, key(KeyCode::Tab)));
    }
}
