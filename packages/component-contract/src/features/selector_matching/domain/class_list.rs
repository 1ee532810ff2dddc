//! Class names listed by an ngClass-style expression
//!
//! A class counts when it is written as a string literal (object key, array
//! entry, ternary branch or a whole space-separated list) or as an unquoted
//! object key. Literals compared with `==`/`!=` are operands, not classes.

use std::collections::BTreeSet;

use regex::Regex;

const STRING_LITERAL: &str = r#"'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*"|`(?:[^`\\]|\\.)*`"#;
const BARE_OBJECT_KEY: &str = r"[{,]\s*([A-Za-z_$][\w$-]*)\s*:";

#[derive(Debug, Clone)]
pub struct ClassListScanner {
    literal: Regex,
    object_key: Regex,
}

impl ClassListScanner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            literal: Regex::new(STRING_LITERAL)?,
            object_key: Regex::new(BARE_OBJECT_KEY)?,
        })
    }

    pub fn scan(&self, expression: &str) -> BTreeSet<String> {
        let mut classes = BTreeSet::new();
        // Literals are blanked out so keys are only found in code.
        let mut code = String::with_capacity(expression.len());
        let mut last = 0;

        for m in self.literal.find_iter(expression) {
            code.push_str(&expression[last..m.start()]);
            code.extend(std::iter::repeat(' ').take(m.len()));
            last = m.end();

            if is_comparison_operand(&expression[..m.start()], &expression[m.end()..]) {
                continue;
            }
            let text = m.as_str();
            let inner = &text[1..text.len() - 1];
            classes.extend(inner.split_whitespace().map(str::to_string));
        }
        code.push_str(&expression[last..]);

        for caps in self.object_key.captures_iter(&code) {
            if let Some(key) = caps.get(1) {
                classes.insert(key.as_str().to_string());
            }
        }
        classes
    }
}

fn is_comparison_operand(before: &str, after: &str) -> bool {
    let before = before.trim_end();
    let after = after.trim_start();
    before.ends_with("==")
        || before.ends_with("!=")
        || after.starts_with("==")
        || after.starts_with("!=")
}
