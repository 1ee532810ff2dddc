//! Content projection slots

use serde::{Deserialize, Serialize};

/// Name given to a projection point without a selector
pub const DEFAULT_SLOT: &str = "default";

/// A named content-projection point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDescriptor {
    pub name: String,

    /// Raw `select` expression; `None` for the default slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_expression: Option<String>,
}
