//! Class/interface tree produced by the script front-end
//!
//! Only the parts the interface extractor reads: imports, class headers,
//! decorators and members. Expressions keep their raw text where structure
//! does not matter.

/// Expression subset needed to read decorator and factory arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// String/number/boolean literal, raw text including quotes
    Literal(String),
    Identifier(String),
    Object(Vec<(String, Expr)>),
    Array(Vec<Expr>),
    Call(CallExpr),
    /// Anything else, raw text
    Raw(String),
}

/// `callee<TypeArgs>(args)`; `callee` may be dotted (`input.required`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Expr>,
}

impl Expr {
    pub fn literal(raw: impl Into<String>) -> Self {
        Expr::Literal(raw.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn call(callee: impl Into<String>, type_arguments: &[&str], arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: callee.into(),
            type_arguments: type_arguments.iter().map(|s| s.to_string()).collect(),
            arguments,
        })
    }

    pub fn object(entries: Vec<(&str, Expr)>) -> Self {
        Expr::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Unquoted value of a string literal
    pub fn as_str_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(raw) => {
                let raw = raw.trim();
                ['\'', '"', '`'].iter().find_map(|q| {
                    raw.strip_prefix(*q).and_then(|rest| rest.strip_suffix(*q))
                })
            }
            _ => None,
        }
    }

    /// Property of an object literal
    pub fn get(&self, key: &str) -> Option<&Expr> {
        match self {
            Expr::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Literal(raw) if raw.trim() == "true")
    }

    /// Source-like rendering
    pub fn text(&self) -> String {
        match self {
            Expr::Literal(raw) | Expr::Identifier(raw) | Expr::Raw(raw) => raw.clone(),
            Expr::Object(entries) if entries.is_empty() => "{}".to_string(),
            Expr::Object(entries) => {
                let body: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.text()))
                    .collect();
                format!("{{ {} }}", body.join(", "))
            }
            Expr::Array(items) => {
                let body: Vec<String> = items.iter().map(Expr::text).collect();
                format!("[{}]", body.join(", "))
            }
            Expr::Call(call) => {
                let type_args = if call.type_arguments.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", call.type_arguments.join(", "))
                };
                let args: Vec<String> = call.arguments.iter().map(Expr::text).collect();
                format!("{}{}({})", call.callee, type_args, args.join(", "))
            }
        }
    }
}

/// `@Name(args)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    pub name: String,
    pub arguments: Vec<Expr>,
}

impl Decorator {
    pub fn new(name: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    pub fn first_argument(&self) -> Option<&Expr> {
        self.arguments.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_readonly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_annotation: Option<String>,
    pub optional: bool,
    pub initializer: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_annotation: Option<&str>) -> Self {
        Self {
            name: name.into(),
            type_annotation: type_annotation.map(str::to_string),
            optional: false,
            initializer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMember {
    pub name: String,
    pub decorators: Vec<Decorator>,
    pub modifiers: Modifiers,
    pub type_annotation: Option<String>,
    pub initializer: Option<Expr>,
}

impl PropertyMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            modifiers: Modifiers::default(),
            type_annotation: None,
            initializer: None,
        }
    }

    pub fn decorated(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn typed(mut self, type_annotation: impl Into<String>) -> Self {
        self.type_annotation = Some(type_annotation.into());
        self
    }

    pub fn init(mut self, initializer: Expr) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMember {
    pub name: String,
    pub decorators: Vec<Decorator>,
    pub modifiers: Modifiers,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    pub is_async: bool,
}

impl MethodMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            modifiers: Modifiers::default(),
            parameters: Vec::new(),
            return_type: None,
            is_async: false,
        }
    }
}

/// `set name(value: T)` accessor; decorated setters act as inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterMember {
    pub name: String,
    pub decorators: Vec<Decorator>,
    pub modifiers: Modifiers,
    pub parameter: Parameter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Property(PropertyMember),
    Method(MethodMember),
    Setter(SetterMember),
}

impl ClassMember {
    pub fn name(&self) -> &str {
        match self {
            ClassMember::Property(p) => &p.name,
            ClassMember::Method(m) => &m.name,
            ClassMember::Setter(s) => &s.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    pub decorators: Vec<Decorator>,
    pub implements: Vec<String>,
    pub members: Vec<ClassMember>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    /// `import X from '...'`
    Default(String),
    /// `import * as X from '...'`
    Namespace(String),
    /// `import { a, b as c } from '...'`
    Named { imported: String, local: Option<String> },
}

impl ImportBinding {
    /// Name bound in the importing module
    pub fn local_name(&self) -> &str {
        match self {
            ImportBinding::Default(name) | ImportBinding::Namespace(name) => name.as_str(),
            ImportBinding::Named { imported, local } => local.as_deref().unwrap_or(imported.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub module_specifier: String,
    pub bindings: Vec<ImportBinding>,
}

/// Parsed class source file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassSourceFile {
    pub imports: Vec<ImportDeclaration>,
    pub classes: Vec<ClassDeclaration>,
}

impl ClassSourceFile {
    pub fn class(&self, name: &str) -> Option<&ClassDeclaration> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// First class carrying the given decorator
    pub fn decorated_class(&self, decorator: &str) -> Option<&ClassDeclaration> {
        self.classes
            .iter()
            .find(|c| c.decorator(decorator).is_some())
    }
}
