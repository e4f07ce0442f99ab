//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有计算器状态机
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 鼠标/键盘交互转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod keypad;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use view::render;
