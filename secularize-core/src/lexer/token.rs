//! Token 与 Lexeme 定义
//!
//! `Token` 序列化为 `{"type": ..., "value": ...}`，
//! `Lexeme` 是 TokenStream 交付的单元：普通 token 或标识符生成的节点片段。

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use super::node::{Coord, Node};

/// 数字字面量
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// 词法 token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Num(Number),
    Str(String),
    Kw(String),
    Datatype(String),
    Op(String),
    Punc(String),
    /// 仅在 `IdentifierMode::Plain` 下产生；coord 取自标识符首字符
    Ident { name: String, coord: Coord },
}

impl Token {
    /// token 类型名（即 JSON 中的 `type`）
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Num(_) => "num",
            Token::Str(_) => "str",
            Token::Kw(_) => "kw",
            Token::Datatype(_) => "datatype",
            Token::Op(_) => "op",
            Token::Punc(_) => "punc",
            Token::Ident { .. } => "ident",
        }
    }

    /// 文本形式的值，数字返回 None
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Num(_) => None,
            Token::Str(s)
            | Token::Kw(s)
            | Token::Datatype(s)
            | Token::Op(s)
            | Token::Punc(s)
            | Token::Ident { name: s, .. } => Some(s),
        }
    }

    pub fn is_punc(&self, value: &str) -> bool {
        matches!(self, Token::Punc(p) if p == value)
    }

    pub fn to_json(&self) -> Value {
        let value = match self {
            Token::Num(Number::Int(n)) => json!(n),
            Token::Num(Number::Float(x)) => json!(x),
            _ => json!(self.text()),
        };
        match self {
            Token::Ident { coord, .. } => json!({
                "type": self.kind_name(),
                "value": value,
                "coord": coord.to_string(),
            }),
            _ => json!({ "type": self.kind_name(), "value": value }),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(n) => write!(f, "num({n})"),
            Token::Str(s) => write!(f, "str({s:?})"),
            other => write!(f, "{}({})", other.kind_name(), other.text().unwrap_or_default()),
        }
    }
}

/// TokenStream 交付的单元
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    Token(Token),
    Node(Node),
}

impl Lexeme {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Lexeme::Token(t) => Some(t),
            Lexeme::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Lexeme::Node(n) => Some(n),
            Lexeme::Token(_) => None,
        }
    }

    /// 下游约定的 JSON 形式
    pub fn to_json(&self) -> Value {
        match self {
            Lexeme::Token(t) => t.to_json(),
            Lexeme::Node(n) => n.to_json(),
        }
    }
}

impl From<Token> for Lexeme {
    fn from(token: Token) -> Self {
        Lexeme::Token(token)
    }
}

impl From<Node> for Lexeme {
    fn from(node: Node) -> Self {
        Lexeme::Node(node)
    }
}
