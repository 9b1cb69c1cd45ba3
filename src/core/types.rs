// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The two disjoint classes a dialect word can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// Grammar keywords, rewritten as whole words anywhere in code.
    Structural,
    /// Built-in callables, rewritten only at call sites (`name(`).
    Callable,
}

/// One dictionary entry: a dialect word and the host word it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub dialect: String,
    pub host: String,
}

impl WordPair {
    pub fn new(dialect: impl Into<String>, host: impl Into<String>) -> Self {
        Self { dialect: dialect.into(), host: host.into() }
    }
}

/// Which part of a template string counts as live code for callable words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateScope {
    /// Every offset inside an `f"..."` literal is rewritable, holes or not.
    #[default]
    WholeLiteral,
    /// Only offsets inside `{...}` interpolation holes are rewritable.
    HolesOnly,
}

/// Knobs for a rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Leave matches inside string literals untouched.
    pub avoid_strings: bool,
    /// Leave matches inside line comments untouched.
    pub avoid_comments: bool,
    pub template_scope: TemplateScope,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            avoid_strings: true,
            avoid_comments: true,
            template_scope: TemplateScope::default(),
        }
    }
}

/// Rough number of dialect words found in a source, per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCounts {
    pub structural: usize,
    pub callable: usize,
}

impl TranslationCounts {
    pub fn total(&self) -> usize {
        self.structural + self.callable
    }
}
