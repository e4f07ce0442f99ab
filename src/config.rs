use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// 配置文件结构
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log: LogConfig,
    pub keypad: KeypadConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeypadConfig {
    pub mouse: bool,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

/// 主题颜色，接受 ratatui 颜色名或 #RRGGBB
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub digit: String,
    pub operator: String,
    pub clear: String,
    pub equals: String,
    pub display_fg: String,
    pub display_bg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            digit: "white".to_string(),
            operator: "#ADD8E6".to_string(),
            clear: "red".to_string(),
            equals: "#ADD8E6".to_string(),
            display_fg: "white".to_string(),
            display_bg: "gray".to_string(),
        }
    }
}

/// 解析后的主题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub digit: Color,
    pub operator: Color,
    pub clear: Color,
    pub equals: Color,
    pub display_fg: Color,
    pub display_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            digit: Color::White,
            operator: Color::Rgb(0xAD, 0xD8, 0xE6),
            clear: Color::Red,
            equals: Color::Rgb(0xAD, 0xD8, 0xE6),
            display_fg: Color::White,
            display_bg: Color::Gray,
        }
    }
}

impl TryFrom<&ThemeConfig> for Theme {
    type Error = AppError;

    fn try_from(config: &ThemeConfig) -> Result<Self> {
        Ok(Self {
            digit: parse_color("digit", &config.digit)?,
            operator: parse_color("operator", &config.operator)?,
            clear: parse_color("clear", &config.clear)?,
            equals: parse_color("equals", &config.equals)?,
            display_fg: parse_color("display_fg", &config.display_fg)?,
            display_bg: parse_color("display_bg", &config.display_bg)?,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| AppError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// 从 TOML 文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "配置文件不存在，使用默认配置");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}
