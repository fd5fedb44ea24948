//! Secularize 词法分析器
//!
//! 字符分类 → token 读取 → TokenStream 调度。
//! 非关键字、非类型名的标识符默认直接生成 `FuncCall` / `Decl` 节点片段，
//! 见 [`IdentifierMode`](secularize_config::IdentifierMode)。

pub mod classify;
pub mod core;
pub mod error;
pub mod node;
pub mod token;
pub mod token_stream;

pub use self::core::{CharStream, InputStream, SourcePosition};
pub use error::{ErrorKind, LexResult, LexerError};
pub use node::{shape_identifier, Coord, Decl, FuncCall, Node};
pub use token::{Lexeme, Number, Token};
pub use token_stream::{tokenize, tokenize_with_config, TokenStream, LOG_TARGET};
