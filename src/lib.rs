// src/lib.rs
//! Rewrites pt-BR dialect source into Python.
//!
//! Dialect words are rewritten only where they are code: occurrences inside
//! string literals and `#` comments are left alone, except that calls inside
//! `f"..."` strings are treated as code.
//!
//! ```
//! assert_eq!(
//!     ptbr_core::translate("para i em intervalo(5):\n    imprimir(i)"),
//!     "for i in range(5):\n    print(i)"
//! );
//! ```

pub mod c_api;
pub mod core;
pub mod debug;
pub mod error;
pub mod launcher;
pub mod persistence;

pub use crate::core::dictionary::Dictionary;
pub use crate::core::engine::{count_candidates, Translator};
pub use crate::core::types::{TemplateScope, TranslateOptions, TranslationCounts, WordClass, WordPair};
pub use crate::error::{DictionaryError, Error, Result};

/// Translates with the built-in dictionary and default protections.
pub fn translate(source: &str) -> String {
    Translator::new(Dictionary::builtin()).translate(source)
}
