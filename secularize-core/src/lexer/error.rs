//! Lexer 错误类型
//!
//! 所有致命的词法错误都经由输入流的 `croak` 生成，携带文件名和位置。

use super::core::SourcePosition;

/// 错误类型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// 无法归类的字符
    #[error("Can't handle character: {0}")]
    InvalidChar(char),
    /// 数字格式错误
    #[error("Invalid number format '{0}'")]
    InvalidNumber(String),
    /// 未终止的字符串（仅 strict 模式）
    #[error("Unterminated string literal")]
    UnterminatedString,
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 源文件名
    pub filename: String,
    /// 错误发生的位置
    pub position: SourcePosition,
    /// 详细错误消息
    pub message: String,
}

impl LexerError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, filename: impl Into<String>, position: SourcePosition) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            filename: filename.into(),
            position,
            message,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}:{}] {}",
            self.filename, self.position.line, self.position.column, self.message
        )
    }
}

impl std::error::Error for LexerError {}

/// 词法分析结果
pub type LexResult<T> = Result<T, LexerError>;
