//! 源代码位置追踪
//!
//! - line/column: 人类可读的错误显示（1-based）
//! - byte_offset: 文件跳转（0-based）

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based，用于 coord 和错误显示
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based，UTF-8编码
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
        }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.byte_offset += c.len_utf8();
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}
