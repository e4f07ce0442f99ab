mod calculator;
mod config;
mod error;
mod logging;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{Theme, load_config};
use crate::error::{AppError, Result};
use crate::logging::init_logging;
use crate::ui::{App, render};

const APP_NAME: &str = "calcpad";

/// 终端四则运算计算器
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 配置文件路径 (默认 ~/.config/calcpad/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志过滤规则，覆盖配置文件中的 log.level
    #[arg(long)]
    log_level: Option<String>,

    /// 日志文件路径，覆盖配置文件中的 log.file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 获取数据目录路径 (~/.local/share/calcpad/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(AppError::MissingDir("数据"))?
        .join(APP_NAME);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn default_config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(AppError::MissingDir("配置"))?
        .join(APP_NAME)
        .join("config.toml"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;
    let theme = Theme::try_from(&config.theme)?;

    let log_path = match cli.log_file.or(config.log.file) {
        Some(path) => path,
        None => get_data_dir()?.join(format!("{APP_NAME}.log")),
    };
    let log_level = cli.log_level.unwrap_or(config.log.level);
    init_logging(&log_path, &log_level)?;
    tracing::info!(config = %config_path.display(), mouse = config.keypad.mouse, "启动");

    // 创建应用状态
    let mut app = App::new(theme);

    // 设置终端
    let mouse = config.keypad.mouse;
    let mut terminal = setup_terminal(mouse)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端，主循环的错误优先
    let restored = restore_terminal(mouse);
    let result = result.and(restored.map_err(AppError::from));

    match &result {
        Ok(()) => tracing::info!(display = %app.calculator.display(), "退出"),
        Err(e) => tracing::error!(error = %e, "异常退出"),
    }
    result
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// 进入 raw 模式与备用屏幕；中途失败时先恢复终端再返回错误
fn setup_terminal(mouse: bool) -> io::Result<Tui> {
    enable_raw_mode()?;
    let enter = || -> io::Result<Tui> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Terminal::new(CrosstermBackend::new(stdout))
    };
    enter().inspect_err(|_| {
        if let Err(e) = restore_terminal(mouse) {
            tracing::error!(error = %e, "恢复终端失败");
        }
    })
}

/// 每一步都会执行，返回第一个错误
fn restore_terminal(mouse: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let steps = [
        disable_raw_mode(),
        if mouse {
            execute!(stdout, DisableMouseCapture)
        } else {
            Ok(())
        },
        execute!(stdout, LeaveAlternateScreen, Show),
    ];
    first_error(steps)
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key),
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
