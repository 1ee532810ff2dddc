//! Style sheet tree produced by the style front-end

/// `name: value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// A qualified rule; nested/at-rule contents are flattened by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRuleNode {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl StyleRuleNode {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Visit declarations in source order
    pub fn walk_declarations<F>(&self, mut visit: F)
    where
        F: FnMut(&Declaration),
    {
        for decl in &self.declarations {
            visit(decl);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheetNode {
    pub rules: Vec<StyleRuleNode>,
}

impl StyleSheetNode {
    /// Visit rules in source order
    pub fn walk_rules<F>(&self, mut visit: F)
    where
        F: FnMut(&StyleRuleNode),
    {
        for rule in &self.rules {
            visit(rule);
        }
    }
}
