// --- File: src/core/dictionary.rs
use crate::core::classifier::is_word_char;
use crate::core::mappings::{CALLABLE_WORDS, STRUCTURAL_WORDS};
use crate::core::types::{WordClass, WordPair};
use crate::error::DictionaryError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

static BUILTIN: OnceLock<Dictionary> = OnceLock::new();

/// The validated, read-only table of dialect words.
///
/// Dialect words are unique across both classes and so are host words, which
/// keeps the reverse lookup sound.
#[derive(Debug, Clone, Serialize)]
pub struct Dictionary {
    structural: Vec<WordPair>,
    callable: Vec<WordPair>,
    #[serde(skip)]
    by_dialect: HashMap<String, (usize, WordClass)>,
    #[serde(skip)]
    by_host: HashMap<String, (usize, WordClass)>,
}

impl Dictionary {
    pub fn new(
        structural: Vec<WordPair>,
        callable: Vec<WordPair>,
    ) -> Result<Self, DictionaryError> {
        let mut by_dialect = HashMap::new();
        let mut by_host = HashMap::new();

        let classes = [(&structural, WordClass::Structural), (&callable, WordClass::Callable)];
        for (pairs, class) in classes {
            for (idx, pair) in pairs.iter().enumerate() {
                check_word(&pair.dialect)?;
                check_word(&pair.host)?;
                if by_dialect.insert(pair.dialect.clone(), (idx, class)).is_some() {
                    return Err(DictionaryError::DuplicateDialectWord(pair.dialect.clone()));
                }
                if by_host.insert(pair.host.clone(), (idx, class)).is_some() {
                    return Err(DictionaryError::DuplicateHostWord(pair.host.clone()));
                }
            }
        }

        Ok(Self { structural, callable, by_dialect, by_host })
    }

    /// The pt-BR dialect, validated once per process.
    ///
    /// Panics on first use if the built-in tables are inconsistent.
    pub fn builtin() -> &'static Dictionary {
        BUILTIN.get_or_init(|| {
            let to_pairs = |table: &[(&str, &str)]| {
                table.iter().map(|&(d, h)| WordPair::new(d, h)).collect::<Vec<_>>()
            };
            match Dictionary::new(to_pairs(STRUCTURAL_WORDS), to_pairs(CALLABLE_WORDS)) {
                Ok(dictionary) => dictionary,
                Err(e) => panic!("built-in dictionary is invalid: {e}"),
            }
        })
    }

    /// Parses `{"structural": {...}, "callable": {...}}`, keeping file order.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let file: DictionaryFile = serde_json::from_str(text)?;
        Ok(Self::new(file.structural.0, file.callable.0)?)
    }

    pub fn structural(&self) -> &[WordPair] {
        &self.structural
    }

    pub fn callable(&self) -> &[WordPair] {
        &self.callable
    }

    /// All entries, structural first.
    pub fn iter(&self) -> impl Iterator<Item = (WordClass, &WordPair)> {
        self.structural
            .iter()
            .map(|p| (WordClass::Structural, p))
            .chain(self.callable.iter().map(|p| (WordClass::Callable, p)))
    }

    pub fn host_for(&self, dialect: &str) -> Option<(&str, WordClass)> {
        self.by_dialect
            .get(dialect)
            .map(|&(idx, class)| (self.pair(idx, class).host.as_str(), class))
    }

    /// Reverse lookup, host word to dialect word.
    pub fn dialect_for(&self, host: &str) -> Option<&str> {
        self.by_host
            .get(host)
            .map(|&(idx, class)| self.pair(idx, class).dialect.as_str())
    }

    pub fn len(&self) -> usize {
        self.structural.len() + self.callable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pair(&self, idx: usize, class: WordClass) -> &WordPair {
        match class {
            WordClass::Structural => &self.structural[idx],
            WordClass::Callable => &self.callable[idx],
        }
    }
}

fn check_word(word: &str) -> Result<(), DictionaryError> {
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }
    if !word.chars().all(is_word_char) {
        return Err(DictionaryError::NotAWord(word.to_string()));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryFile {
    #[serde(default)]
    structural: OrderedPairs,
    #[serde(default)]
    callable: OrderedPairs,
}

/// A JSON object read as a list of pairs. Unlike a map it keeps both the
/// file order and repeated keys, so duplicates reach validation.
#[derive(Default)]
struct OrderedPairs(Vec<WordPair>);

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping dialect words to host words")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((dialect, host)) = map.next_entry::<String, String>()? {
                    pairs.push(WordPair { dialect, host });
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
