//! Static suffix and keyword rule tables.
//!
//! Both tables are ordered: priority is the rule's position and the first
//! match wins, so rule precedence lives in data rather than control flow.
//! The tables are process-wide constants and are never mutated.

use super::fence::is_word_char;

/// Upper bound on how many lines the line-anchored matchers scan.
const MAX_SCAN_LINES: usize = 512;

/// Mapping from a filename-suffix-like token to a language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub language: &'static str,
}

/// Suffix table in priority order.
///
/// Matching is naive substring containment, not extension-boundary aware:
/// `.cs` matches inside `.csv`, and `.ts`/`.js` shadow the later `.tsx`/
/// `.jsx` entries. This is contracted behavior callers rely on; do not
/// tighten it without revisiting the table order.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule { suffix: ".js", language: "javascript" },
    SuffixRule { suffix: ".ts", language: "typescript" },
    SuffixRule { suffix: ".tsx", language: "tsx" },
    SuffixRule { suffix: ".jsx", language: "jsx" },
    SuffixRule { suffix: ".py", language: "python" },
    SuffixRule { suffix: ".java", language: "java" },
    SuffixRule { suffix: ".kt", language: "kotlin" },
    SuffixRule { suffix: ".go", language: "go" },
    SuffixRule { suffix: ".rb", language: "ruby" },
    SuffixRule { suffix: ".rs", language: "rust" },
    SuffixRule { suffix: ".php", language: "php" },
    SuffixRule { suffix: ".cs", language: "csharp" },
    SuffixRule { suffix: ".cpp", language: "cpp" },
    SuffixRule { suffix: ".c", language: "c" },
    SuffixRule { suffix: ".m", language: "objective-c" },
    SuffixRule { suffix: ".swift", language: "swift" },
    SuffixRule { suffix: ".sh", language: "bash" },
    SuffixRule { suffix: ".sql", language: "sql" },
    SuffixRule { suffix: ".yml", language: "yaml" },
    SuffixRule { suffix: ".yaml", language: "yaml" },
    SuffixRule { suffix: ".json", language: "json" },
    SuffixRule { suffix: ".html", language: "html" },
    SuffixRule { suffix: ".css", language: "css" },
    SuffixRule { suffix: ".scss", language: "scss" },
];

/// Syntactic fingerprint tested against body text.
///
/// Line-anchored variants allow leading whitespace on any line; the rest
/// match anywhere in the text. A rule holds exactly one pattern, so a
/// language with several fingerprints appears as consecutive rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Literal at the start of a line (`#include`, `console.log`).
    LineStart(&'static str),
    /// Keyword, whitespace, identifier, then `(` at a line start
    /// (`def name(`, `fn name(`).
    Callable(&'static str),
    /// Keyword followed by whitespace and an identifier at a line start
    /// (`import os`).
    KeywordIdent(&'static str),
    /// Keyword, whitespace, then a token starting with the given prefix at
    /// a line start (`import java.util.List`).
    KeywordPair(&'static str, &'static str),
    /// `keyword name;` statement at a line start (`package demo;`).
    Statement(&'static str),
    /// Case-insensitive verb followed by whitespace at a line start
    /// (`SELECT `, `insert `).
    VerbCi(&'static str),
    /// Literal substring anywhere in the text (`std::`).
    Contains(&'static str),
    /// `class Name {` construct anywhere in the text.
    ClassBrace,
    /// `=> {` arrow-function body marker anywhere in the text.
    ArrowBrace,
}

/// Mapping from a syntactic fingerprint to a language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub pattern: Pattern,
    pub language: &'static str,
}

/// Keyword table in priority order.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule { pattern: Pattern::LineStart("#include"), language: "cpp" },
    KeywordRule { pattern: Pattern::Contains("std::"), language: "cpp" },
    KeywordRule { pattern: Pattern::Contains("<iostream>"), language: "cpp" },
    KeywordRule { pattern: Pattern::KeywordPair("import", "java"), language: "java" },
    KeywordRule { pattern: Pattern::ClassBrace, language: "java" },
    KeywordRule { pattern: Pattern::Callable("def"), language: "python" },
    KeywordRule { pattern: Pattern::KeywordIdent("import"), language: "python" },
    KeywordRule { pattern: Pattern::Callable("function"), language: "javascript" },
    KeywordRule { pattern: Pattern::ArrowBrace, language: "javascript" },
    KeywordRule { pattern: Pattern::VerbCi("select"), language: "sql" },
    KeywordRule { pattern: Pattern::VerbCi("insert"), language: "sql" },
    KeywordRule { pattern: Pattern::VerbCi("update"), language: "sql" },
    KeywordRule { pattern: Pattern::VerbCi("delete"), language: "sql" },
    KeywordRule { pattern: Pattern::Statement("package"), language: "java" },
    KeywordRule { pattern: Pattern::Callable("fn"), language: "rust" },
    KeywordRule { pattern: Pattern::LineStart("console.log"), language: "javascript" },
];

/// Walk the suffix table against the lowercased address, then against the
/// lowercased title.
///
/// The whole table runs against the address before the title is consulted,
/// so address evidence outranks the title even across rule positions.
pub fn match_suffix(address: &str, title: &str) -> Option<&'static str> {
    let address = address.to_ascii_lowercase();
    let title = title.to_ascii_lowercase();

    for haystack in [address.as_str(), title.as_str()] {
        if haystack.is_empty() {
            continue;
        }
        for rule in SUFFIX_RULES {
            if haystack.contains(rule.suffix) {
                return Some(rule.language);
            }
        }
    }
    None
}

/// Walk the keyword table against the text; first matching rule wins.
pub fn match_keywords(text: &str) -> Option<&'static str> {
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.pattern.matches(text))
        .map(|rule| rule.language)
}

impl Pattern {
    fn matches(&self, text: &str) -> bool {
        match *self {
            Pattern::LineStart(literal) => {
                line_starts(text).any(|line| line.starts_with(literal))
            }
            Pattern::Callable(keyword) => {
                line_starts(text).any(|line| matches_callable(line, keyword))
            }
            Pattern::KeywordIdent(keyword) => line_starts(text).any(|line| {
                strip_keyword(line, keyword).is_some_and(|rest| eat_word(rest).is_some())
            }),
            Pattern::KeywordPair(keyword, prefix) => line_starts(text).any(|line| {
                strip_keyword(line, keyword).is_some_and(|rest| rest.starts_with(prefix))
            }),
            Pattern::Statement(keyword) => line_starts(text).any(|line| {
                strip_keyword(line, keyword)
                    .and_then(eat_word)
                    .is_some_and(|rest| rest.starts_with(';'))
            }),
            Pattern::VerbCi(verb) => line_starts(text).any(|line| matches_verb_ci(line, verb)),
            Pattern::Contains(literal) => text.contains(literal),
            Pattern::ClassBrace => matches_class_brace(text),
            Pattern::ArrowBrace => text
                .match_indices("=>")
                .any(|(idx, _)| text[idx + 2..].trim_start().starts_with('{')),
        }
    }
}

fn line_starts(text: &str) -> impl Iterator<Item = &str> {
    text.lines().take(MAX_SCAN_LINES).map(str::trim_start)
}

/// Strip `keyword` plus at least one whitespace character from the line.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    eat_whitespace(rest)
}

fn matches_callable(line: &str, keyword: &str) -> bool {
    strip_keyword(line, keyword)
        .and_then(eat_word)
        .is_some_and(|rest| rest.starts_with('('))
}

fn matches_verb_ci(line: &str, verb: &str) -> bool {
    if !line.is_char_boundary(verb.len()) || line.len() <= verb.len() {
        return false;
    }
    let (head, tail) = line.split_at(verb.len());
    head.eq_ignore_ascii_case(verb) && tail.chars().next().is_some_and(char::is_whitespace)
}

/// `class`, whitespace, identifier, optional whitespace, `{` — anywhere in
/// the text, with no word boundary required before `class` (so `subclass
/// Name {` also matches, as it always has).
fn matches_class_brace(text: &str) -> bool {
    text.match_indices("class").any(|(idx, matched)| {
        eat_whitespace(&text[idx + matched.len()..])
            .and_then(eat_word)
            .is_some_and(|rest| rest.trim_start().starts_with('{'))
    })
}

/// Consume at least one whitespace character.
fn eat_whitespace(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    (trimmed.len() < text.len()).then_some(trimmed)
}

/// Consume at least one word character.
fn eat_word(text: &str) -> Option<&str> {
    let end = text
        .find(|ch: char| !is_word_char(ch))
        .unwrap_or(text.len());
    (end > 0).then(|| &text[end..])
}
