use crate::core::classifier::{is_word_char, LexicalIndex};
use crate::core::dictionary::Dictionary;
use crate::core::types::{TemplateScope, TranslateOptions, TranslationCounts, WordClass};
use tracing::{debug, trace};

/// Rewrites dialect source into host source using one dictionary.
///
/// Structural words are rewritten before callable words; each entry gets
/// exactly one left-to-right pass over the output of the previous one.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'d> {
    dictionary: &'d Dictionary,
    options: TranslateOptions,
}

impl<'d> Translator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary, options: TranslateOptions::default() }
    }

    pub fn with_options(dictionary: &'d Dictionary, options: TranslateOptions) -> Self {
        Self { dictionary, options }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Never fails: malformed input gets a best-effort rewrite.
    pub fn translate(&self, source: &str) -> String {
        let mut text = source.to_string();
        let mut rewritten = TranslationCounts::default();
        let mut skipped = 0;

        for (class, pair) in self.dictionary.iter() {
            let pass = rewrite_pass(&text, &pair.dialect, &pair.host, class, &self.options);
            if pass.rewritten + pass.skipped > 0 {
                debug!(
                    word = %pair.dialect,
                    rewritten = pass.rewritten,
                    skipped = pass.skipped,
                    "pass done"
                );
            }
            match class {
                WordClass::Structural => rewritten.structural += pass.rewritten,
                WordClass::Callable => rewritten.callable += pass.rewritten,
            }
            skipped += pass.skipped;
            if let Some(out) = pass.text {
                text = out;
            }
        }

        debug!(
            structural = rewritten.structural,
            callable = rewritten.callable,
            skipped,
            bytes = source.len(),
            "translated source"
        );
        text
    }
}

/// Rewrites whole-word occurrences of `old` that sit in code.
pub fn replace_word(source: &str, old: &str, new: &str, options: &TranslateOptions) -> String {
    rewrite_pass(source, old, new, WordClass::Structural, options)
        .text
        .unwrap_or_else(|| source.to_string())
}

/// Rewrites `old` where it is called (`old(`), including inside template
/// strings, whose bodies are treated as code.
pub fn replace_call(source: &str, old: &str, new: &str, options: &TranslateOptions) -> String {
    rewrite_pass(source, old, new, WordClass::Callable, options)
        .text
        .unwrap_or_else(|| source.to_string())
}

/// Counts dialect words by pattern alone, ignoring strings and comments.
pub fn count_candidates(dictionary: &Dictionary, source: &str) -> TranslationCounts {
    let mut counts = TranslationCounts::default();
    for (class, pair) in dictionary.iter() {
        let found = candidates(source, &pair.dialect, class).count();
        match class {
            WordClass::Structural => counts.structural += found,
            WordClass::Callable => counts.callable += found,
        }
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    String,
    Comment,
}

struct Pass {
    /// `None` when nothing was rewritten.
    text: Option<String>,
    rewritten: usize,
    skipped: usize,
}

fn rewrite_pass(
    source: &str,
    old: &str,
    new: &str,
    class: WordClass,
    options: &TranslateOptions,
) -> Pass {
    let mut pass = Pass { text: None, rewritten: 0, skipped: 0 };
    let mut index: Option<LexicalIndex> = None;
    let mut out = String::new();
    let mut last = 0;

    for pos in candidates(source, old, class) {
        let index = index.get_or_insert_with(|| LexicalIndex::build(source));
        if let Some(reason) = skip_reason(index, pos, class, options) {
            trace!(word = old, pos, ?reason, "left untouched");
            pass.skipped += 1;
            continue;
        }
        out.push_str(&source[last..pos]);
        out.push_str(new);
        last = pos + old.len();
        pass.rewritten += 1;
    }

    if pass.rewritten > 0 {
        out.push_str(&source[last..]);
        pass.text = Some(out);
    }
    pass
}

fn skip_reason(
    index: &LexicalIndex,
    pos: usize,
    class: WordClass,
    options: &TranslateOptions,
) -> Option<SkipReason> {
    match class {
        WordClass::Structural => {
            if options.avoid_strings && index.in_string(pos) {
                Some(SkipReason::String)
            } else if options.avoid_comments && index.in_comment(pos) {
                Some(SkipReason::Comment)
            } else {
                None
            }
        }
        WordClass::Callable => {
            if options.avoid_comments && index.in_comment(pos) {
                return Some(SkipReason::Comment);
            }
            if !options.avoid_strings || !index.in_string(pos) {
                return None;
            }
            let live = match options.template_scope {
                TemplateScope::WholeLiteral => index.in_template(pos),
                TemplateScope::HolesOnly => index.in_template(pos) && index.in_hole(pos),
            };
            (!live).then_some(SkipReason::String)
        }
    }
}

/// Offsets of `word` bounded the way its class requires: a word boundary
/// before, and either a word boundary or an opening parenthesis after.
fn candidates<'a>(
    source: &'a str,
    word: &'a str,
    class: WordClass,
) -> impl Iterator<Item = usize> + 'a {
    let empty = word.is_empty();
    source
        .match_indices(word)
        .filter(move |_| !empty)
        .map(|(pos, _)| pos)
        .filter(move |&pos| {
            let before_ok = !source[..pos].chars().next_back().is_some_and(is_word_char);
            let rest = &source[pos + word.len()..];
            let after_ok = match class {
                WordClass::Structural => !rest.chars().next().is_some_and(is_word_char),
                WordClass::Callable => rest.starts_with('('),
            };
            before_ok && after_ok
        })
}
