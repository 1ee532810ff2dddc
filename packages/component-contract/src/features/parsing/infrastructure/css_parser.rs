//! Plain CSS / SCSS-subset style sheet parser
//!
//! Produces a flat list of qualified rules:
//! - comments (`/* */`, and `//` line comments) are dropped
//! - conditional group rules (`@media`, `@supports`, `@container`, `@layer`)
//!   contribute their inner rules
//! - other at-rules (`@keyframes`, `@font-face`, `@import`, ...) are skipped
//! - nested rules are flattened; `&` is replaced by the parent selector,
//!   otherwise the child is joined to the parent as a descendant
//!
//! input: "div, #id { color: red; } .class { font-size: 12px; }"

use std::path::Path;

use crate::errors::{ContractError, Result};
use crate::features::parsing::domain::{Declaration, StyleRuleNode, StyleSheetNode};
use crate::features::parsing::ports::StyleParser;

const GROUPING_AT_RULES: &[&str] = &["media", "supports", "container", "layer", "document"];

/// [`StyleParser`] for plain style sheets
#[derive(Debug, Default, Clone, Copy)]
pub struct CssStyleParser;

impl CssStyleParser {
    pub fn new() -> Self {
        Self
    }
}

impl StyleParser for CssStyleParser {
    fn parse_stylesheet(&self, source: &str, path: &Path) -> Result<StyleSheetNode> {
        parse_stylesheet(source).map_err(|msg| ContractError::parse(path, msg))
    }
}

/// Parse style sheet text
pub fn parse_stylesheet(input: &str) -> std::result::Result<StyleSheetNode, String> {
    let cleaned = strip_comments(input);
    let mut rules = Vec::new();
    parse_block(&cleaned, None, &mut rules)?;
    Ok(StyleSheetNode { rules })
}

enum Item<'a> {
    Statement(&'a str),
    Block { prelude: &'a str, body: &'a str },
}

fn parse_block(
    input: &str,
    parent: Option<&str>,
    rules: &mut Vec<StyleRuleNode>,
) -> std::result::Result<(), String> {
    let mut declarations = Vec::new();
    let mut nested: Vec<(Option<String>, &str)> = Vec::new();

    for item in split_items(input)? {
        match item {
            Item::Statement(text) => {
                // Top-level statements are `@import`/`@use`/`@charset`.
                if parent.is_some() {
                    declarations.extend(parse_declaration(text));
                }
            }
            Item::Block { prelude, body } => {
                let prelude = normalize_whitespace(prelude);
                if let Some(at_rule) = prelude.strip_prefix('@') {
                    let keyword = at_rule
                        .split(|c: char| c.is_whitespace() || c == '(')
                        .next()
                        .unwrap_or("");
                    if GROUPING_AT_RULES.contains(&keyword) {
                        nested.push((parent.map(str::to_string), body));
                    }
                } else if !prelude.is_empty() {
                    let selector = match parent {
                        Some(p) => resolve_nested_selector(p, &prelude),
                        None => prelude,
                    };
                    nested.push((Some(selector), body));
                }
            }
        }
    }

    if let Some(selector) = parent {
        if !declarations.is_empty() || nested.is_empty() {
            rules.push(StyleRuleNode {
                selector: selector.to_string(),
                declarations,
            });
        }
    }

    for (selector, body) in nested {
        parse_block(body, selector.as_deref(), rules)?;
    }
    Ok(())
}

/// Split a block body into `;`-terminated statements and `{}` blocks
fn split_items(input: &str) -> std::result::Result<Vec<Item<'_>>, String> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut prelude_end = None;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' => {
                if depth == 0 {
                    prelude_end = Some(i);
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(format!("unexpected '}}' at byte {}", i));
                }
                depth -= 1;
                if depth == 0 {
                    let open = prelude_end
                        .take()
                        .ok_or_else(|| format!("unbalanced block ending at byte {}", i))?;
                    items.push(Item::Block {
                        prelude: &input[start..open],
                        body: &input[open + 1..i],
                    });
                    start = i + 1;
                }
            }
            ';' if depth == 0 => {
                if !input[start..i].trim().is_empty() {
                    items.push(Item::Statement(&input[start..i]));
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err("unclosed '{' at end of input".to_string());
    }
    if quote.is_some() {
        return Err("unterminated string at end of input".to_string());
    }
    let trailing = &input[start..];
    if !trailing.trim().is_empty() {
        items.push(Item::Statement(trailing));
    }
    Ok(items)
}

fn parse_declaration(text: &str) -> Option<Declaration> {
    let (name, value) = text.split_once(':')?;
    let name = name.trim();
    // SCSS variables and mixin calls are not declarations
    if name.is_empty() || name.starts_with('$') || name.starts_with('@') {
        return None;
    }
    Some(Declaration {
        name: name.to_string(),
        value: value.trim().to_string(),
    })
}

fn resolve_nested_selector(parent: &str, child: &str) -> String {
    let mut out = Vec::new();
    for p in parent.split(',').map(str::trim) {
        for c in child.split(',').map(str::trim) {
            if c.contains('&') {
                out.push(c.replace('&', p));
            } else {
                out.push(format!("{} {}", p, c));
            }
        }
    }
    out.join(", ")
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop `/* */` and `//` comments outside strings and `url(...)`
fn strip_comments(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    let mut quote: Option<char> = None;
    let mut paren_depth = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if c == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        let next = chars.get(i + 1).copied();
        match (c, next) {
            ('/', Some('*')) => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i += 2;
            }
            ('/', Some('/')) if paren_depth == 0 => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            _ => {
                match c {
                    '"' | '\'' => quote = Some(c),
                    '(' => paren_depth += 1,
                    ')' => paren_depth = paren_depth.saturating_sub(1),
                    _ => {}
                }
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
