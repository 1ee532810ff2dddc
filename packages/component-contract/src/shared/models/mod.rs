//! Shared models: the contract data model

mod context_stack;
mod contract;
mod element;
mod public_api;
mod slot;
mod style;

pub use context_stack::{ContextFrame, ContextKind, ContextStack};
pub use contract::{Contract, ContractMeta, CONTRACT_SECTIONS};
pub use element::{Binding, BindingKind, ElementKey, EventBinding, StructuralElement};
pub use public_api::{
    EventContract, ImportContract, MethodContract, ParameterContract, PropertyContract,
    PublicInterface,
};
pub use slot::{SlotDescriptor, DEFAULT_SLOT};
pub use style::{StyleRule, StyleSheetContract};
