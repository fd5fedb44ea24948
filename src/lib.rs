//! Secularize - lexical front end for a HolyC-like C dialect
//!
//! # Architecture
//!
//! ```text
//! secularize-config/  - Pure configuration data (no logic)
//! secularize-core/    - Scanner: classifiers, readers, TokenStream
//! ```
//!
//! # Quick Start
//!
//! ```
//! use secularize::{tokenize, Lexeme, Token};
//!
//! let lexemes = tokenize("main.HC", "U8 x;").unwrap();
//! assert_eq!(lexemes[0], Lexeme::Token(Token::Datatype("U8".to_string())));
//! assert_eq!(lexemes[1].as_node().map(|n| n.name()), Some("x"));
//! ```

pub use secularize_config as config;
pub use secularize_core::lexer;

// 重导出常用类型
pub use secularize_config::{IdentifierMode, LexerConfig, Phase};
pub use secularize_core::lexer::{
    shape_identifier, tokenize, tokenize_with_config, CharStream, Coord, ErrorKind, InputStream,
    LexResult, Lexeme, LexerError, Node, Number, SourcePosition, Token, TokenStream,
};
