//! 应用错误类型

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("无法解析配置文件 {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("theme.{field} 的颜色无效: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    #[error("日志过滤规则无效: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("日志初始化失败: {0}")]
    Logging(String),

    #[error("无法获取用户{0}目录")]
    MissingDir(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;
