//! Interface Extractor
//!
//! Walks a parsed class source file and produces the component's
//! `PublicInterface`: decorator and factory inputs/outputs, public methods,
//! lifecycle participation and imports.

use tracing::{debug, warn};

use crate::features::interface_extraction::domain::{
    generic_argument, hook_for_interface, hook_for_method, resolve_type, split_declared,
    DeclaredIo, TypeEvidence, UNKNOWN_TYPE,
};
use crate::features::parsing::domain::{
    CallExpr, ClassDeclaration, ClassMember, ClassSourceFile, Decorator, Expr, MethodMember,
    Modifiers, PropertyMember, SetterMember, Visibility,
};
use crate::shared::models::{
    EventContract, ImportContract, MethodContract, ParameterContract, PropertyContract,
    PublicInterface,
};

/// Class decorators that mark a component-like class, in lookup order
const COMPONENT_DECORATORS: [&str; 2] = ["Component", "Directive"];

#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceExtractor;

impl InterfaceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract from the component class of `source`; falls back to
    /// [`Self::degraded`] when no class can be located.
    pub fn extract(&self, source: &ClassSourceFile, declared: &DeclaredIo) -> PublicInterface {
        match locate_component_class(source) {
            Some(class) => {
                let mut api = self.extract_class(class);
                self.apply_declared(&mut api, declared);
                api.imports = collect_imports(source);
                debug!(
                    class = %class.name,
                    properties = api.properties.len(),
                    events = api.events.len(),
                    methods = api.methods.len(),
                    "interface extracted"
                );
                api
            }
            None => {
                warn!("no component class found; using declared inputs/outputs");
                self.degraded(declared)
            }
        }
    }

    /// Interface of a single class, without imports
    pub fn extract_class(&self, class: &ClassDeclaration) -> PublicInterface {
        let mut api = PublicInterface::default();

        for name in &class.implements {
            if let Some(hook) = hook_for_interface(name) {
                api.lifecycle.insert(hook.to_string());
            }
        }

        for member in &class.members {
            match member {
                ClassMember::Property(property) => collect_property(&mut api, property),
                ClassMember::Setter(setter) => collect_setter(&mut api, setter),
                ClassMember::Method(method) => collect_method(&mut api, method),
            }
        }
        api
    }

    /// Mark declared `inputs`/`outputs` entries on an extracted interface
    fn apply_declared(&self, api: &mut PublicInterface, declared: &DeclaredIo) {
        let listed = self.degraded(declared);
        for (name, property) in listed.properties {
            api.properties
                .entry(name)
                .and_modify(|existing| {
                    existing.is_input = true;
                    if existing.alias.is_none() {
                        existing.alias = property.alias.clone();
                    }
                })
                .or_insert(property);
        }
        for (name, event) in listed.events {
            api.events.entry(name).or_insert(event);
        }
    }

    /// Interface built from declared metadata lists only
    pub fn degraded(&self, declared: &DeclaredIo) -> PublicInterface {
        let mut api = PublicInterface::default();
        for entry in &declared.inputs {
            if let Some((name, alias)) = split_declared(entry) {
                let mut property = PropertyContract::input(UNKNOWN_TYPE);
                property.alias = alias.map(str::to_string);
                api.properties.insert(name.to_string(), property);
            }
        }
        for entry in &declared.outputs {
            if let Some((name, alias)) = split_declared(entry) {
                api.events.insert(
                    name.to_string(),
                    EventContract {
                        type_name: UNKNOWN_TYPE.to_string(),
                        alias: alias.map(str::to_string),
                    },
                );
            }
        }
        api
    }
}

fn locate_component_class(source: &ClassSourceFile) -> Option<&ClassDeclaration> {
    COMPONENT_DECORATORS
        .iter()
        .find_map(|d| source.decorated_class(d))
}

fn collect_imports(source: &ClassSourceFile) -> Vec<ImportContract> {
    source
        .imports
        .iter()
        .flat_map(|decl| {
            decl.bindings.iter().map(move |binding| ImportContract {
                name: binding.local_name().to_string(),
                origin_path: decl.module_specifier.clone(),
            })
        })
        .collect()
}

fn is_public(name: &str, modifiers: &Modifiers) -> bool {
    modifiers.visibility == Visibility::Public && !name.starts_with('#')
}

fn find_decorator<'a>(decorators: &'a [Decorator], name: &str) -> Option<&'a Decorator> {
    decorators.iter().find(|d| d.name == name)
}

/// `alias`, `required` and `transform` from `@Input(...)` arguments
struct InputOptions {
    alias: Option<String>,
    required: bool,
    transform: Option<String>,
}

impl InputOptions {
    fn from_decorator(decorator: &Decorator) -> Self {
        match decorator.first_argument() {
            Some(arg) => match arg.as_str_literal() {
                Some(alias) => Self {
                    alias: Some(alias.to_string()),
                    required: false,
                    transform: None,
                },
                None => Self::from_object(Some(arg)),
            },
            None => Self::from_object(None),
        }
    }

    fn from_object(options: Option<&Expr>) -> Self {
        let get = |key: &str| options.and_then(|o| o.get(key));
        Self {
            alias: get("alias")
                .and_then(Expr::as_str_literal)
                .map(str::to_string),
            required: get("required").map(Expr::is_true).unwrap_or(false),
            transform: get("transform").map(Expr::text),
        }
    }
}

fn collect_property(api: &mut PublicInterface, property: &PropertyMember) {
    if let Some(decorator) = find_decorator(&property.decorators, "Input") {
        let options = InputOptions::from_decorator(decorator);
        let type_name = resolve_type(TypeEvidence {
            annotation: property.type_annotation.as_deref(),
            transform: options.transform.as_deref(),
            generic: None,
            default_value: property.initializer.as_ref(),
        });
        api.properties.insert(
            property.name.clone(),
            PropertyContract {
                type_name,
                is_input: true,
                required: options.required,
                alias: options.alias,
                default_value: property.initializer.as_ref().map(Expr::text),
                transform: options.transform,
            },
        );
        return;
    }

    if let Some(decorator) = find_decorator(&property.decorators, "Output") {
        let alias = decorator
            .first_argument()
            .and_then(Expr::as_str_literal)
            .map(str::to_string);
        let type_name = property
            .initializer
            .as_ref()
            .and_then(Expr::as_call)
            .filter(|call| is_event_emitter(call))
            .and_then(|call| call.type_arguments.first().map(String::as_str))
            .or_else(|| property.type_annotation.as_deref().and_then(generic_argument))
            .unwrap_or(UNKNOWN_TYPE)
            .to_string();
        api.events
            .insert(property.name.clone(), EventContract { type_name, alias });
        return;
    }

    if let Some(call) = property.initializer.as_ref().and_then(Expr::as_call) {
        if collect_factory(api, &property.name, property.type_annotation.as_deref(), call) {
            return;
        }
    }

    if is_public(&property.name, &property.modifiers) && !property.modifiers.is_static {
        let type_name = resolve_type(TypeEvidence {
            annotation: property.type_annotation.as_deref(),
            default_value: property.initializer.as_ref(),
            ..Default::default()
        });
        api.properties.insert(
            property.name.clone(),
            PropertyContract {
                type_name,
                is_input: false,
                required: false,
                alias: None,
                default_value: property.initializer.as_ref().map(Expr::text),
                transform: None,
            },
        );
    }
}

fn is_event_emitter(call: &CallExpr) -> bool {
    let callee = call.callee.trim();
    callee.strip_prefix("new ").unwrap_or(callee).trim() == "EventEmitter"
}

/// Signal-style factories: `input`, `input.required`, `model`,
/// `model.required`, `output`, `outputFromObservable`.
/// Returns false when `call` is not one of them.
fn collect_factory(
    api: &mut PublicInterface,
    name: &str,
    annotation: Option<&str>,
    call: &CallExpr,
) -> bool {
    let generic = call.type_arguments.first().map(String::as_str);
    match call.callee.trim() {
        callee @ ("input" | "model" | "input.required" | "model.required") => {
            let required = callee.ends_with(".required");
            // Required factories take only the options argument.
            let (default_value, options) = if required {
                (None, call.arguments.first())
            } else {
                (call.arguments.first(), call.arguments.get(1))
            };
            let options = InputOptions::from_object(options);
            let type_name = resolve_type(TypeEvidence {
                annotation: None,
                transform: options.transform.as_deref(),
                generic: generic.or_else(|| annotation.and_then(generic_argument)),
                default_value,
            });

            if callee.starts_with("model") {
                let event_name = format!("{}Change", name);
                let event_alias = options.alias.as_ref().map(|a| format!("{}Change", a));
                api.events.insert(
                    event_name,
                    EventContract {
                        type_name: type_name.clone(),
                        alias: event_alias,
                    },
                );
            }

            api.properties.insert(
                name.to_string(),
                PropertyContract {
                    type_name,
                    is_input: true,
                    required: required || options.required,
                    alias: options.alias,
                    default_value: default_value.map(Expr::text),
                    transform: options.transform,
                },
            );
            true
        }
        callee @ ("output" | "outputFromObservable") => {
            let options = if callee == "output" {
                call.arguments.first()
            } else {
                call.arguments.get(1)
            };
            let alias = options
                .and_then(|o| o.get("alias"))
                .and_then(Expr::as_str_literal)
                .map(str::to_string);
            let type_name = generic
                .or_else(|| annotation.and_then(generic_argument))
                .unwrap_or(UNKNOWN_TYPE)
                .to_string();
            api.events
                .insert(name.to_string(), EventContract { type_name, alias });
            true
        }
        _ => false,
    }
}

fn collect_setter(api: &mut PublicInterface, setter: &SetterMember) {
    let Some(decorator) = find_decorator(&setter.decorators, "Input") else {
        return;
    };
    let options = InputOptions::from_decorator(decorator);
    let type_name = resolve_type(TypeEvidence {
        annotation: setter.parameter.type_annotation.as_deref(),
        transform: options.transform.as_deref(),
        ..Default::default()
    });
    api.properties.insert(
        setter.name.clone(),
        PropertyContract {
            type_name,
            is_input: true,
            required: options.required,
            alias: options.alias,
            default_value: None,
            transform: options.transform,
        },
    );
}

fn collect_method(api: &mut PublicInterface, method: &MethodMember) {
    if let Some(hook) = hook_for_method(&method.name) {
        api.lifecycle.insert(hook.to_string());
        return;
    }
    if method.name == "constructor" || !is_public(&method.name, &method.modifiers) {
        return;
    }

    let parameters = method
        .parameters
        .iter()
        .map(|p| ParameterContract {
            name: p.name.clone(),
            type_name: p
                .type_annotation
                .clone()
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            optional: p.optional || p.initializer.is_some(),
            default_value: p.initializer.clone(),
        })
        .collect();

    let return_type = match method.return_type.as_deref().map(str::trim) {
        Some(ty) if !ty.is_empty() => ty.to_string(),
        _ if method.is_async => "Promise<void>".to_string(),
        _ => "void".to_string(),
    };

    api.methods.insert(
        method.name.clone(),
        MethodContract {
            parameters,
            return_type,
            is_static: method.modifiers.is_static,
            is_async: method.is_async,
        },
    );
}
