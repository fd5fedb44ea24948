//! Secularize Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across Secularize crates.
//! Loading these structures from disk is left to the driver; they derive
//! `serde` traits so any serde format works.

use serde::{Deserialize, Serialize};

/// How the scanner treats identifiers that are neither keywords nor datatypes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierMode {
    /// Emit pre-shaped `FuncCall` / `Decl` node fragments
    #[default]
    Fragments,
    /// Emit plain `ident` tokens and leave the shaping to the parser
    Plain,
}

/// Configuration for scanner behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Identifier output shape
    pub identifier_mode: IdentifierMode,
    /// Treat end-of-input inside a string literal as a fatal error
    pub strict_strings: bool,
}

impl LexerConfig {
    /// Config that emits plain identifier tokens
    pub fn plain() -> Self {
        Self {
            identifier_mode: IdentifierMode::Plain,
            ..Self::default()
        }
    }

    /// Enable or disable strict string termination
    pub fn with_strict_strings(mut self, strict: bool) -> Self {
        self.strict_strings = strict;
        self
    }
}

/// Processing phase enum for phase-specific log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("secularize::{}", self.as_str())
    }
}
