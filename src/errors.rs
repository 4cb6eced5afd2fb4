use std::fmt;

#[derive(Debug, Clone)]
pub enum SnaplinkError {
    Config(String),
    Validation(String),
    Backend(String),
    Clipboard(String),
    Terminal(String),
    FileOperation(String),
    Serialization(String),
}

impl SnaplinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::Config(_) => "E001",
            SnaplinkError::Validation(_) => "E002",
            SnaplinkError::Backend(_) => "E003",
            SnaplinkError::Clipboard(_) => "E004",
            SnaplinkError::Terminal(_) => "E005",
            SnaplinkError::FileOperation(_) => "E006",
            SnaplinkError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::Config(_) => "Configuration Error",
            SnaplinkError::Validation(_) => "Validation Error",
            SnaplinkError::Backend(_) => "Backend Error",
            SnaplinkError::Clipboard(_) => "Clipboard Error",
            SnaplinkError::Terminal(_) => "Terminal Error",
            SnaplinkError::FileOperation(_) => "File Operation Error",
            SnaplinkError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::Config(msg)
            | SnaplinkError::Validation(msg)
            | SnaplinkError::Backend(msg)
            | SnaplinkError::Clipboard(msg)
            | SnaplinkError::Terminal(msg)
            | SnaplinkError::FileOperation(msg)
            | SnaplinkError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI/TUI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SnaplinkError {}

// 便捷的构造函数
impl SnaplinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Validation(msg.into())
    }

    pub fn backend<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Backend(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Clipboard(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Terminal(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for SnaplinkError {
    fn from(err: std::io::Error) -> Self {
        SnaplinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SnaplinkError {
    fn from(err: serde_json::Error) -> Self {
        SnaplinkError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for SnaplinkError {
    fn from(err: toml::ser::Error) -> Self {
        SnaplinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;
