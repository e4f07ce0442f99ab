//! 按键网格
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ C ] [ + ]
//! [          =          ]
//! ```

use crate::calculator::{Operator, Token};

/// 计算器按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Input(Token),
    Operator(Operator),
    Clear,
    Equals,
}

impl Button {
    pub fn label(self) -> char {
        match self {
            Button::Input(token) => token.as_char(),
            Button::Operator(op) => op.symbol(),
            Button::Clear => 'C',
            Button::Equals => '=',
        }
    }
}

/// 网格中的位置 (row, col)
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        let [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9] = Token::DIGITS.map(Button::Input);
        let [add, subtract, multiply, divide] = Operator::ALL.map(Button::Operator);
        Self {
            rows: vec![
                vec![d7, d8, d9, divide],
                vec![d4, d5, d6, multiply],
                vec![d1, d2, d3, subtract],
                vec![d0, Button::Input(Token::DOT), Button::Clear, add],
                vec![Button::Equals],
            ],
        }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn get(&self, (row, col): Position) -> Option<Button> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// 移动焦点；越界时停在边缘，换行时列号收拢到该行范围内
    pub fn step(&self, (row, col): Position, direction: Direction) -> Position {
        let last_row = self.rows.len().saturating_sub(1);
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(last_row), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, col + 1),
        };
        let width = self.rows.get(row).map_or(1, Vec::len);
        (row, col.min(width.saturating_sub(1)))
    }

    pub fn position_of(&self, button: Button) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|b| *b == button)
                .map(|col| (row, col))
        })
    }
}
