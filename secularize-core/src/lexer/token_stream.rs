//! TokenStream：按需从输入流解码 token
//!
//! 拉取式：调用方反复 `next()` / `peek()`，流只在需要时读取字符，
//! 并最多缓存一个尚未交付的 lexeme。

use secularize_config::{IdentifierMode, LexerConfig};
use tracing::{debug, trace, warn};

use super::classify::{
    is_datatype, is_digit, is_id, is_id_start, is_keyword, is_op_char, is_punc, is_whitespace,
};
use super::core::{CharStream, InputStream};
use super::error::{ErrorKind, LexResult, LexerError};
use super::node::{shape_identifier, Coord};
use super::token::{Lexeme, Number, Token};

/// 扫描器日志 target，与 `Phase::Lexer.target()` 一致
pub const LOG_TARGET: &str = "secularize::lexer";

pub struct TokenStream<I: InputStream> {
    input: I,
    /// 单槽 lookahead，交付时清空
    current: Option<Lexeme>,
    config: LexerConfig,
    /// 出错后迭代器不再产出
    halted: bool,
}

impl<I: InputStream> TokenStream<I> {
    /// 使用默认配置创建
    pub fn new(input: I) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: I, config: LexerConfig) -> Self {
        trace!(target: LOG_TARGET, ?config, "Creating new TokenStream");
        Self {
            input,
            current: None,
            config,
            halted: false,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// 在输入的当前位置生成致命错误
    pub fn croak(&self, kind: ErrorKind) -> LexerError {
        self.input.croak(kind)
    }

    /// 预读下一个 lexeme（幂等，不会多读输入）
    pub fn peek(&mut self) -> LexResult<Option<&Lexeme>> {
        if self.current.is_none() {
            self.current = self.read_next()?;
        }
        Ok(self.current.as_ref())
    }

    /// 交付下一个 lexeme；None 表示输入耗尽
    pub fn next(&mut self) -> LexResult<Option<Lexeme>> {
        match self.current.take() {
            Some(lexeme) => Ok(Some(lexeme)),
            None => self.read_next(),
        }
    }

    pub fn eof(&mut self) -> LexResult<bool> {
        Ok(self.peek()?.is_none())
    }

    fn read_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(Option<char>) -> bool,
    {
        let mut text = String::new();
        while !self.input.eof() && predicate(self.input.peek()) {
            match self.input.next() {
                Some(c) => text.push(c),
                None => break,
            }
        }
        text
    }

    /// 数字：最多一个小数点，第二个 `.` 留给下一个 token
    fn read_number(&mut self) -> LexResult<Token> {
        let mut has_dot = false;
        let number = self.read_while(|ch| match ch {
            Some('.') if has_dot => false,
            Some('.') => {
                has_dot = true;
                true
            }
            other => is_digit(other),
        });

        if !has_dot {
            if let Ok(n) = number.parse::<i64>() {
                return Ok(Token::Num(Number::Int(n)));
            }
        }

        match number.parse::<f64>() {
            Ok(x) => Ok(Token::Num(Number::Float(x))),
            Err(e) => {
                warn!(target: LOG_TARGET, %number, error = %e, "Float parse failed");
                Err(self.input.croak(ErrorKind::InvalidNumber(number)))
            }
        }
    }

    /// 读取以 `end` 结尾的转义字符串，开头的引号由此处消费
    ///
    /// 反斜杠只取消下一个字符的特殊含义，不解释 `\n`、`\t` 等。
    fn read_escaped(&mut self, end: char) -> LexResult<String> {
        let mut escaped = false;
        let mut value = String::new();
        self.input.next();

        loop {
            let Some(ch) = self.input.next() else {
                if self.config.strict_strings {
                    return Err(self.input.croak(ErrorKind::UnterminatedString));
                }
                warn!(
                    target: LOG_TARGET,
                    line = self.input.line(),
                    "Unterminated string literal, keeping partial content"
                );
                return Ok(value);
            };

            if escaped {
                value.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == end {
                return Ok(value);
            } else {
                value.push(ch);
            }
        }
    }

    fn read_string(&mut self) -> LexResult<Token> {
        Ok(Token::Str(self.read_escaped('"')?))
    }

    fn read_ident(&mut self) -> Lexeme {
        let coord = Coord::new(self.input.filename(), self.input.line());
        let id = self.read_while(is_id);

        if is_keyword(&id) {
            return Token::Kw(id).into();
        }
        if is_datatype(&id) {
            return Token::Datatype(id).into();
        }

        match self.config.identifier_mode {
            IdentifierMode::Plain => Token::Ident { name: id, coord }.into(),
            IdentifierMode::Fragments => {
                let is_call = self.followed_by_paren();
                debug!(target: LOG_TARGET, %id, %coord, is_call, "Shaping identifier");
                shape_identifier(id, coord, is_call).into()
            }
        }
    }

    /// 下一个 token 是否为 `(`
    ///
    /// `(` 只能作为单字符 punc 出现，所以只需跳过空白和注释后看一个字符，
    /// 不占用 lookahead 槽。
    ///
    /// 与按 token 值比较的旧实现不同：`foo "("` 中的字符串 `"("` 不算调用，
    /// 得到 Decl；其后的非法字符也留到下一次 `next()` 才报错。
    fn followed_by_paren(&mut self) -> bool {
        loop {
            self.read_while(is_whitespace);
            match self.input.peek() {
                Some('#') => self.skip_comment(),
                next => return next == Some('('),
            }
        }
    }

    /// `#` 到行尾，连同换行一起丢弃
    fn skip_comment(&mut self) {
        self.read_while(|ch| ch != Some('\n'));
        self.input.next();
    }

    fn read_next(&mut self) -> LexResult<Option<Lexeme>> {
        loop {
            self.read_while(is_whitespace);

            let ch = self.input.peek();
            let Some(c) = ch else {
                trace!(target: LOG_TARGET, "Reached EOF");
                return Ok(None);
            };
            trace!(target: LOG_TARGET, line = self.input.line(), ?c, "Scanning next token");

            let lexeme = if c == '#' {
                self.skip_comment();
                continue;
            } else if c == '"' {
                self.read_string()?.into()
            } else if is_digit(ch) {
                self.read_number()?.into()
            } else if is_id_start(ch) {
                self.read_ident()
            } else if is_punc(ch) {
                self.input.next();
                Token::Punc(c.to_string()).into()
            } else if is_op_char(ch) {
                Token::Op(self.read_while(is_op_char)).into()
            } else {
                let err = self.input.croak(ErrorKind::InvalidChar(c));
                warn!(target: LOG_TARGET, error = %err, "Lex error encountered");
                return Err(err);
            };

            debug!(target: LOG_TARGET, ?lexeme, "Produced lexeme");
            return Ok(Some(lexeme));
        }
    }
}

/// 迭代全部 lexeme；遇到第一个错误后停止
impl<I: InputStream> Iterator for TokenStream<I> {
    type Item = LexResult<Lexeme>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let result = TokenStream::next(self).transpose();
        if matches!(result, Some(Err(_))) {
            self.halted = true;
        }
        result
    }
}

/// 扫描整段源码
pub fn tokenize(filename: &str, source: &str) -> LexResult<Vec<Lexeme>> {
    tokenize_with_config(filename, source, LexerConfig::default())
}

pub fn tokenize_with_config(
    filename: &str,
    source: &str,
    config: LexerConfig,
) -> LexResult<Vec<Lexeme>> {
    TokenStream::with_config(CharStream::new(filename, source), config).collect()
}
