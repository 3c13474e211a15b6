//! Classification rules for the line tokenizer.
//!
//! Rules are tried in a fixed priority order at each scan position and the
//! first one that matches wins. Several patterns overlap (`>` is both a tag
//! close and the tail of `=>`, `className` is both an attribute and a plain
//! identifier), so the order of [`rules`] must not change.

#![allow(clippy::non_std_lazy_statics)] // Using once_cell for broader compatibility

use crate::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved words highlighted as [`TokenKind::Keyword`].
pub const KEYWORDS: &[&str] = &[
    "import",
    "export",
    "default",
    "from",
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "class",
    "extends",
    "new",
    "this",
    "typeof",
    "null",
    "undefined",
    "true",
    "false",
    "async",
    "await",
    "try",
    "catch",
    "throw",
];

/// Hook and animation helper names highlighted as [`TokenKind::Framework`].
pub const FRAMEWORK_IDENTIFIERS: &[&str] = &[
    "useState",
    "useEffect",
    "useRef",
    "useGSAP",
    "useCallback",
    "useMemo",
    "useContext",
    "useReducer",
    "useLayoutEffect",
    "contextSafe",
];

/// Markup attribute names highlighted as [`TokenKind::Attribute`] when
/// immediately followed by `=`.
pub const ATTRIBUTES: &[&str] = &[
    "className",
    "onClick",
    "onChange",
    "onSubmit",
    "onMouseEnter",
    "onMouseLeave",
    "onMouseMove",
    "ref",
    "key",
    "style",
    "src",
    "alt",
    "href",
    "target",
    "rel",
    "type",
    "value",
    "id",
    "disabled",
    "placeholder",
    "loading",
    "role",
    "tabIndex",
    "title",
    "name",
    "htmlFor",
];

/// A single entry of the classification table.
#[derive(Debug)]
pub struct Rule {
    /// Short rule name, used in trace output.
    pub name: &'static str,
    /// The kind assigned to text this rule matches.
    pub kind: TokenKind,
    pattern: Regex,
    /// Bytes at the end of a match that are context, not token text.
    trailing_context: usize,
}

impl Rule {
    fn new(name: &'static str, kind: TokenKind, pattern: &str) -> Self {
        let pattern = Regex::new(pattern).expect("Invalid tokenizer rule regex");
        Self {
            name,
            kind,
            pattern,
            trailing_context: 0,
        }
    }

    fn with_trailing_context(mut self, bytes: usize) -> Self {
        self.trailing_context = bytes;
        self
    }

    /// Returns the byte length of the token this rule produces at the start
    /// of `rest`, or `None` if the rule does not apply there.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let m = self.pattern.find(rest)?;
        debug_assert_eq!(m.start(), 0, "rule {} is not anchored", self.name);
        let len = m.end().checked_sub(self.trailing_context)?;
        (len > 0).then_some(len)
    }
}

/// Builds `^(?:a|b|c)` from a word list.
fn alternation(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!("^(?:{})", escaped.join("|"))
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("closing-tag", TokenKind::Tag, r"^</[A-Za-z][A-Za-z0-9_.\-]*>"),
        Rule::new("opening-tag", TokenKind::Tag, r"^<[A-Za-z][A-Za-z0-9_.\-]*"),
        Rule::new("tag-close", TokenKind::Tag, r"^/?>"),
        Rule::new("template", TokenKind::Template, r"^\$\{.*?\}"),
        Rule::new("double-quoted", TokenKind::String, r#"^"(?:[^"\\]|\\.)*""#),
        Rule::new("single-quoted", TokenKind::String, r"^'(?:[^'\\]|\\.)*'"),
        Rule::new("backtick-quoted", TokenKind::String, r"^`(?:[^`\\]|\\.)*`"),
        Rule::new(
            "keyword",
            TokenKind::Keyword,
            &format!(r"{}\b", alternation(KEYWORDS)),
        ),
        Rule::new(
            "framework",
            TokenKind::Framework,
            &format!(r"{}\b", alternation(FRAMEWORK_IDENTIFIERS)),
        ),
        Rule::new("number", TokenKind::Number, r"^[0-9]+(?:\.[0-9]+)?"),
        Rule::new(
            "attribute",
            TokenKind::Attribute,
            &format!("{}=", alternation(ATTRIBUTES)),
        )
        .with_trailing_context(1),
        Rule::new("arrow", TokenKind::Operator, r"^=>"),
        Rule::new("punctuation", TokenKind::Punctuation, r"^[{}()\[\];,=]"),
    ]
});

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{XID_Start}_$][\p{XID_Continue}$]*").expect("Invalid identifier regex")
});

/// Returns the classification table in priority order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Finds the first rule that applies at the start of `rest`.
///
/// Returns the rule's kind and the byte length of the token.
pub fn classify(rest: &str) -> Option<(TokenKind, usize)> {
    RULES
        .iter()
        .find_map(|rule| rule.match_len(rest).map(|len| (rule.kind, len)))
}

/// Length of the fallback `plain` token at the start of a non-empty `rest`.
///
/// A whole identifier is taken at once so that words outside the closed
/// lists stay in one piece; otherwise a single character is taken. An
/// identifier stops short of a `${` so the template rule sees it next.
pub fn fallback_len(rest: &str) -> usize {
    if let Some(m) = IDENTIFIER.find(rest) {
        let word = m.as_str();
        if word.len() > 1 && word.ends_with('$') && rest[m.end()..].starts_with('{') {
            return m.end() - 1;
        }
        return m.end();
    }
    rest.chars().next().map(char::len_utf8).unwrap_or(0)
}

/// Returns true if `word` is a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns true if `word` is one of the framework identifiers.
pub fn is_framework_identifier(word: &str) -> bool {
    FRAMEWORK_IDENTIFIERS.contains(&word)
}

/// Returns true if `word` is an allow-listed attribute name.
pub fn is_attribute(word: &str) -> bool {
    ATTRIBUTES.contains(&word)
}
