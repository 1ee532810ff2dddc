//! Component Discovery
//!
//! Reads the `@Component` / `@Directive` decorator metadata of a class:
//! where its template and styles live and which inputs/outputs it declares.

use crate::features::interface_extraction::domain::DeclaredIo;
use crate::features::parsing::domain::{ClassDeclaration, ClassSourceFile, Expr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Component,
    Directive,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Component => "component",
            ComponentKind::Directive => "directive",
        }
    }

    fn decorator(&self) -> &'static str {
        match self {
            ComponentKind::Component => "Component",
            ComponentKind::Directive => "Directive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub class_name: String,
    pub kind: ComponentKind,
    pub selector: Option<String>,
    pub template_url: Option<String>,
    pub inline_template: Option<String>,
    /// `styleUrl` followed by `styleUrls`, in declaration order
    pub style_urls: Vec<String>,
    pub inline_styles: Vec<String>,
    pub declared: DeclaredIo,
}

impl ComponentMetadata {
    /// Metadata of the first component (or else directive) class in `source`
    pub fn discover(source: &ClassSourceFile) -> Option<Self> {
        [ComponentKind::Component, ComponentKind::Directive]
            .into_iter()
            .find_map(|kind| {
                source
                    .decorated_class(kind.decorator())
                    .map(|class| Self::from_class(class, kind))
            })
    }

    pub fn from_class(class: &ClassDeclaration, kind: ComponentKind) -> Self {
        let options = class
            .decorator(kind.decorator())
            .and_then(|d| d.first_argument());
        let get = |key: &str| options.and_then(|o| o.get(key));

        let mut style_urls: Vec<String> = get("styleUrl").and_then(string_value).into_iter().collect();
        style_urls.extend(get("styleUrls").map(string_list).unwrap_or_default());

        Self {
            class_name: class.name.clone(),
            kind,
            selector: get("selector").and_then(string_value),
            template_url: get("templateUrl").and_then(string_value),
            inline_template: get("template").and_then(string_value),
            style_urls,
            inline_styles: get("styles").map(string_list).unwrap_or_default(),
            declared: DeclaredIo {
                inputs: get("inputs").map(string_list).unwrap_or_default(),
                outputs: get("outputs").map(string_list).unwrap_or_default(),
            },
        }
    }
}

fn string_value(expr: &Expr) -> Option<String> {
    expr.as_str_literal().map(str::to_string)
}

/// A string literal or an array of string literals
fn string_list(expr: &Expr) -> Vec<String> {
    match expr {
        Expr::Array(items) => items.iter().filter_map(string_value).collect(),
        other => string_value(other).into_iter().collect(),
    }
}
