//! 计算器状态机
//!
//! 持有显示文本、第一操作数与待执行的运算符，按键事件驱动状态转换。

use std::fmt;

use thiserror::Error;

/// 除以零时显示的哨兵文本
pub const NAN_SENTINEL: &str = "NaN";

/// 初始显示文本
const ZERO: &str = "0";

/// 四则运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// 按键上的符号
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 非法输入字符
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("不是数字或小数点: {0:?}")]
pub struct InvalidToken(pub char);

/// 数字键或小数点键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(char);

impl Token {
    pub const DOT: Token = Token('.');
    pub const DIGITS: [Token; 10] = [
        Token('0'),
        Token('1'),
        Token('2'),
        Token('3'),
        Token('4'),
        Token('5'),
        Token('6'),
        Token('7'),
        Token('8'),
        Token('9'),
    ];

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_dot(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Token {
    type Error = InvalidToken;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Token(c))
        } else {
            Err(InvalidToken(c))
        }
    }
}

/// 一次等号求值的完整记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub first: f64,
    pub operator: Option<Operator>,
    pub second: f64,
    pub result: f64,
}

/// 状态机状态
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum State {
    /// 正在输入第一个操作数
    #[default]
    Idle,
    /// 已选择运算符，等待第二个操作数
    Armed { operator: Operator, first: f64 },
    /// 已按等号，显示结果
    Resolved(Evaluation),
}

/// 计算器
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    state: State,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: ZERO.to_string(),
            state: State::Idle,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// 当前待执行的运算符；等号之后为空
    pub fn operator(&self) -> Option<Operator> {
        match self.state {
            State::Armed { operator, .. } => Some(operator),
            State::Idle | State::Resolved(_) => None,
        }
    }

    pub fn first_operand(&self) -> f64 {
        match self.state {
            State::Idle => 0.0,
            State::Armed { first, .. } => first,
            State::Resolved(eval) => eval.first,
        }
    }

    /// 第二操作数只在等号之后有意义
    pub fn second_operand(&self) -> f64 {
        match self.state {
            State::Resolved(eval) => eval.second,
            State::Idle | State::Armed { .. } => 0.0,
        }
    }

    /// 上一次等号是否触发了除零保护
    pub fn divided_by_zero(&self) -> bool {
        matches!(
            self.state,
            State::Resolved(Evaluation {
                operator: Some(Operator::Divide),
                second,
                ..
            }) if second == 0.0
        )
    }

    /// 数字或小数点
    pub fn input(&mut self, token: Token) {
        if self.display == ZERO || self.display == "0.0" || self.display == NAN_SENTINEL {
            self.display.clear();
        } else if token.is_dot() && self.display.contains('.') {
            tracing::debug!(display = %self.display, "忽略重复的小数点");
            return;
        }
        self.display.push(token.as_char());
    }

    /// 选择运算符，当前显示成为第一操作数
    pub fn choose_operator(&mut self, operator: Operator) {
        let first = self.parse_display();
        self.state = State::Armed { operator, first };
        self.display = ZERO.to_string();
    }

    /// 等号：对第一、第二操作数求值
    pub fn equals(&mut self) {
        let second = self.parse_display();
        let (first, operator) = match self.state {
            State::Armed { operator, first } => (first, Some(operator)),
            State::Idle => (0.0, None),
            State::Resolved(eval) => (eval.first, None),
        };
        let result = apply(first, operator, second);
        self.display = format_number(result);
        self.state = State::Resolved(Evaluation {
            first,
            operator,
            second,
            result,
        });
    }

    /// 清除所有状态
    pub fn clear(&mut self) {
        self.display = ZERO.to_string();
        self.state = State::Idle;
    }

    fn parse_display(&self) -> f64 {
        parse_number(&self.display).unwrap_or_else(|| {
            tracing::warn!(display = %self.display, "显示文本无法解析，按 0 处理");
            0.0
        })
    }
}

/// 执行一次二元运算；运算符缺失时结果为 0
pub fn apply(a: f64, operator: Option<Operator>, b: f64) -> f64 {
    match operator {
        Some(Operator::Add) => a + b,
        Some(Operator::Subtract) => a - b,
        Some(Operator::Multiply) => a * b,
        Some(Operator::Divide) => {
            if b != 0.0 {
                a / b
            } else {
                f64::NAN
            }
        }
        None => 0.0,
    }
}

/// 数值的显示形式，整数也带 ".0"
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// 解析显示文本；单独的 "." 视为 0
pub fn parse_number(text: &str) -> Option<f64> {
    if text == "." {
        return Some(0.0);
    }
    text.parse().ok()
}
