//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 事件轮询间隔（毫秒），决定 toast 过期与后台结果的刷新粒度
pub const TICK_MILLIS: u64 = 100;

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 60;

/// 自定义别名前缀（仅展示用）
pub const ALIAS_PREFIX: &str = "snaplink/";

/// 应用标题
pub const APP_TITLE: &str = "SnapLink";

/// 标语
pub const TAGLINE: &str = "Shorten. Share. Track.";

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 70);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 加载中的按钮文本
pub mod busy_text {
    pub const SHORTENING: &str = "Shortening...";
    pub const FETCHING: &str = "Fetching...";
}
