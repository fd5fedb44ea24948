//! 测试辅助工具

use secularize_core::{tokenize, tokenize_with_config, Lexeme, LexerConfig, LexerError};
use serde_json::Value;

pub const FILENAME: &str = "test.HC";

/// 扫描源码，返回全部 lexeme
pub fn lex(code: &str) -> Result<Vec<Lexeme>, LexerError> {
    tokenize(FILENAME, code)
}

pub fn lex_with(code: &str, config: LexerConfig) -> Result<Vec<Lexeme>, LexerError> {
    tokenize_with_config(FILENAME, code, config)
}

/// 扫描源码并转换为下游约定的 JSON
pub fn lex_json(code: &str) -> Vec<Value> {
    lex(code)
        .unwrap_or_else(|e| panic!("lexing {code:?} failed: {e}"))
        .iter()
        .map(Lexeme::to_json)
        .collect()
}
