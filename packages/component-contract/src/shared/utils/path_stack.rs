//! Element path stack
//!
//! Tracks ancestor element tokens during markup traversal and joins them
//! into element keys.

/// Stack of `tag[#id][.class...]` tokens
#[derive(Debug, Clone)]
pub struct PathStack {
    tokens: Vec<String>,
    separator: String,
}

impl Default for PathStack {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStack {
    /// Create a new path stack with the default separator `" > "`
    pub fn new() -> Self {
        Self::with_separator(crate::config::DEFAULT_KEY_SEPARATOR)
    }

    /// Create with a custom separator
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            tokens: Vec::new(),
            separator: separator.into(),
        }
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// Key of the current innermost element
    pub fn key(&self) -> String {
        self.tokens.join(&self.separator)
    }

    /// Key of a child with the given token
    pub fn key_with(&self, token: &str) -> String {
        if self.tokens.is_empty() {
            token.to_string()
        } else {
            format!("{}{}{}", self.key(), self.separator, token)
        }
    }

}

/// Build the `tag[#id][.class...]` token of one element
pub fn element_token<'a>(
    tag: &str,
    id: Option<&str>,
    classes: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut token = tag.to_string();
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        token.push('#');
        token.push_str(id);
    }
    for class in classes {
        token.push('.');
        token.push_str(class);
    }
    token
}
