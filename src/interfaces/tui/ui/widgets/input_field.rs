//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持激活状态高亮、占位符与前缀

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Custom Alias", form.custom_alias())
///     .active(true)
///     .prefix("snaplink/")
///     .placeholder("optional")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    prefix: Option<&'a str>,
    required: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            prefix: None,
            required: false,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 固定显示在值前面的文本
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// 设置为必填字段
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();
        if self.required {
            title.push_str(" *");
        }
        title
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn content(&self) -> Line<'a> {
        let mut spans = Vec::new();
        if let Some(prefix) = self.prefix {
            spans.push(Span::styled(prefix, Style::default().fg(colors::MUTED)));
        }
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                spans.push(Span::styled(placeholder, Style::default().fg(colors::MUTED)));
            }
            _ => spans.push(Span::raw(self.value)),
        }
        if self.is_active {
            spans.push(Span::styled("▏", Style::default().fg(colors::PRIMARY)));
        }
        Line::from(spans)
    }

    /// 渲染输入框，`area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.content()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
