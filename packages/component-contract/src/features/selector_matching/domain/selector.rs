//! Selector syntax understood by the matcher
//!
//! Only single compound tokens are modelled: comma lists are split before
//! parsing, and of a descendant chain only the last token is kept.

/// Attribute comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOperator {
    /// `=`
    Equals,
    /// `*=`
    Contains,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
}

/// Operator lookup table; two-character operators first
const OPERATORS: &[(&str, AttrOperator)] = &[
    ("*=", AttrOperator::Contains),
    ("^=", AttrOperator::Prefix),
    ("$=", AttrOperator::Suffix),
    ("=", AttrOperator::Equals),
];

impl AttrOperator {
    pub fn apply(&self, actual: &str, expected: &str) -> bool {
        match self {
            AttrOperator::Equals => actual == expected,
            AttrOperator::Contains => actual.contains(expected),
            AttrOperator::Prefix => actual.starts_with(expected),
            AttrOperator::Suffix => actual.ends_with(expected),
        }
    }
}

/// One parsed selector token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Class(String),
    Id(String),
    AttributePresent(String),
    Attribute {
        name: String,
        op: AttrOperator,
        value: String,
    },
    Tag(String),
}

impl SimpleSelector {
    /// Parse one trimmed token
    pub fn parse(token: &str) -> SimpleSelector {
        let token = token.trim();
        if let Some(class) = token.strip_prefix('.') {
            return SimpleSelector::Class(class.to_string());
        }
        if let Some(id) = token.strip_prefix('#') {
            return SimpleSelector::Id(id.to_string());
        }
        if let Some(inner) = token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return parse_attribute(inner);
        }
        SimpleSelector::Tag(token.to_string())
    }
}

/// The operator is the first one found before any quote
fn parse_attribute(inner: &str) -> SimpleSelector {
    for (i, c) in inner.char_indices() {
        if c == '"' || c == '\'' {
            break;
        }
        let rest = &inner[i..];
        if let Some((symbol, op)) = OPERATORS.iter().find(|(symbol, _)| rest.starts_with(*symbol)) {
            return SimpleSelector::Attribute {
                name: inner[..i].trim().to_string(),
                op: *op,
                value: unquote(inner[i + symbol.len()..].trim()).to_string(),
            };
        }
    }
    SimpleSelector::AttributePresent(inner.trim().to_string())
}

/// Strip one pair of matching quotes
pub fn unquote(value: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(q).and_then(|v| v.strip_suffix(q)) {
            return inner;
        }
    }
    value
}

/// Split on `sep` outside brackets, parentheses and quotes
pub fn split_top_level(selector: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_sep(c) => {
                parts.push(&selector[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts
}

/// Last whitespace-separated compound token of a descendant chain
pub fn last_compound(selector: &str) -> &str {
    split_top_level(selector.trim(), char::is_whitespace)
        .into_iter()
        .rev()
        .find(|t| !t.is_empty())
        .unwrap_or("")
}
