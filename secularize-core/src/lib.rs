//! Secularize Core - lexical scanner (pure logic, no IO)
//!
//! Turns source text into classified tokens and identifier node fragments
//! for the downstream parser.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;

// Re-export common types
pub use lexer::{
    tokenize, tokenize_with_config, CharStream, ErrorKind, InputStream, Lexeme, LexerError,
    Node, Number, Token, TokenStream,
};

// Re-export config types from secularize-config
pub use secularize_config::{IdentifierMode, LexerConfig, Phase};
