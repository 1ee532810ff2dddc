//! Declared-type resolution for inputs and outputs
//!
//! Order: explicit annotation, `boolean` for a `booleanAttribute` transform,
//! first generic argument, literal default, `any`.

use crate::features::parsing::domain::Expr;

pub const UNKNOWN_TYPE: &str = "any";

/// Inputs to [`resolve_type`], all optional
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeEvidence<'a> {
    pub annotation: Option<&'a str>,
    pub transform: Option<&'a str>,
    pub generic: Option<&'a str>,
    pub default_value: Option<&'a Expr>,
}

pub fn resolve_type(evidence: TypeEvidence<'_>) -> String {
    if let Some(annotation) = evidence.annotation.map(str::trim).filter(|a| !a.is_empty()) {
        return annotation.to_string();
    }
    if evidence.transform.map(str::trim) == Some("booleanAttribute") {
        return "boolean".to_string();
    }
    if let Some(generic) = evidence.generic.map(str::trim).filter(|g| !g.is_empty()) {
        return generic.to_string();
    }
    evidence
        .default_value
        .and_then(infer_literal_type)
        .unwrap_or(UNKNOWN_TYPE)
        .to_string()
}

/// Type of a literal default value, if it is one
pub fn infer_literal_type(expr: &Expr) -> Option<&'static str> {
    match expr {
        Expr::Literal(raw) => {
            let raw = raw.trim();
            if expr.as_str_literal().is_some() {
                Some("string")
            } else if raw == "true" || raw == "false" {
                Some("boolean")
            } else if raw.parse::<f64>().is_ok() {
                Some("number")
            } else {
                None
            }
        }
        Expr::Array(_) => Some("any[]"),
        _ => None,
    }
}

/// `EventEmitter<T>` → `T`
pub fn generic_argument(type_text: &str) -> Option<&str> {
    let open = type_text.find('<')?;
    let close = type_text.rfind('>')?;
    (close > open + 1).then(|| type_text[open + 1..close].trim())
}
