//! 字符流抽象
//!
//! `InputStream` 是扫描器对输入端的全部要求：预读、消费、EOF 判定、
//! 位置元数据，以及生成带位置的致命错误（`croak`）。
//! `CharStream` 是基于内存字符串的实现。

use super::position::SourcePosition;
use crate::lexer::error::{ErrorKind, LexerError};

/// 字符级输入契约
pub trait InputStream {
    /// 预读下一个字符（不消费）
    fn peek(&self) -> Option<char>;

    /// 消费并返回下一个字符
    fn next(&mut self) -> Option<char>;

    /// 是否已无剩余字符
    fn eof(&self) -> bool {
        self.peek().is_none()
    }

    /// 源文件名，用于 coord
    fn filename(&self) -> &str;

    /// 当前行号（1-based）
    fn line(&self) -> usize;

    /// 在当前位置生成致命词法错误
    ///
    /// 调用方以 `return Err(input.croak(..))` 的形式终止扫描。
    fn croak(&self, kind: ErrorKind) -> LexerError;
}

/// 字符流
///
/// 持有完整源码，按字节偏移前进
#[derive(Debug, Clone)]
pub struct CharStream {
    source: String,
    filename: String,
    position: SourcePosition,
}

impl CharStream {
    /// 创建新的字符流
    pub fn new(filename: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            filename: filename.into(),
            position: SourcePosition::start(),
        }
    }

    /// 获取当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 尚未消费的源码
    pub fn remaining(&self) -> &str {
        &self.source[self.position.byte_offset..]
    }
}

impl InputStream for CharStream {
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.advance(c);
        Some(c)
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn line(&self) -> usize {
        self.position.line
    }

    fn croak(&self, kind: ErrorKind) -> LexerError {
        LexerError::at(kind, self.filename.as_str(), self.position)
    }
}
