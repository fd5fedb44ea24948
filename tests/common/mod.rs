//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

use secularize::{CharStream, Lexeme, LexerConfig, Token, TokenStream};

/// 构造一个带默认配置的 TokenStream
pub fn stream(code: &str) -> TokenStream<CharStream> {
    TokenStream::new(CharStream::new("main.HC", code))
}

pub fn plain_stream(code: &str) -> TokenStream<CharStream> {
    TokenStream::with_config(CharStream::new("main.HC", code), LexerConfig::plain())
}

/// 取出全部 lexeme，遇错 panic
pub fn drain(mut ts: TokenStream<CharStream>) -> Vec<Lexeme> {
    let mut out = Vec::new();
    while let Some(lexeme) = ts.next().unwrap_or_else(|e| panic!("lex error: {e}")) {
        out.push(lexeme);
    }
    out
}

pub fn kw(s: &str) -> Lexeme {
    Lexeme::Token(Token::Kw(s.to_string()))
}

pub fn punc(s: &str) -> Lexeme {
    Lexeme::Token(Token::Punc(s.to_string()))
}

pub fn op(s: &str) -> Lexeme {
    Lexeme::Token(Token::Op(s.to_string()))
}
