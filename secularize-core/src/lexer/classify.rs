//! 字符分类
//!
//! 纯函数，无状态。`Option<char>` 形式的参数对应"没有字符"（EOF），
//! 一律返回 false 而不是报错。

/// 保留字
pub const KEYWORDS: &[&str] = &["if", "then", "else", "true", "false"];

/// 基础数据类型名
pub const DATATYPES: &[&str] = &[
    "U0", "U8", "U16", "U32", "U64", "I8", "I16", "I32", "I64", "F64",
];

const ID_EXTRA_CHARS: &str = "?!-<>=0123456789";
const OP_CHARS: &str = "+-*/%=&|<>!";
const PUNC_CHARS: &str = ",;(){}[]";

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_datatype(word: &str) -> bool {
    DATATYPES.contains(&word)
}

pub fn is_digit(ch: Option<char>) -> bool {
    matches!(ch, Some('0'..='9'))
}

pub fn is_id_start(ch: Option<char>) -> bool {
    ch.is_some_and(char::is_alphabetic)
}

pub fn is_id(ch: Option<char>) -> bool {
    is_id_start(ch) || ch.is_some_and(|c| ID_EXTRA_CHARS.contains(c))
}

pub fn is_op_char(ch: Option<char>) -> bool {
    ch.is_some_and(|c| OP_CHARS.contains(c))
}

pub fn is_punc(ch: Option<char>) -> bool {
    ch.is_some_and(|c| PUNC_CHARS.contains(c))
}

/// 下划线同样视为空白（源语言以此分隔 token），`\r` 不是
pub fn is_whitespace(ch: Option<char>) -> bool {
    matches!(ch, Some(' ' | '\t' | '_' | '\n'))
}
