//! Contract Assembler
//!
//! Pure merge of the extractor outputs into a `Contract`. Style sources are
//! merged in order (external sheets, then inline styles), later rules
//! replacing earlier ones with the same selector.

use chrono::{DateTime, Utc};

use crate::features::template_extraction::TemplateExtraction;
use crate::shared::models::{Contract, ContractMeta, PublicInterface, StyleSheetContract};
use crate::shared::utils::content_hash;

/// Identity of the component being assembled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentIdentity {
    pub name: String,
    pub selector: String,
    pub source_file: String,
    pub kind: String,
}

/// Everything one contract is made of
#[derive(Debug, Clone, Default)]
pub struct ContractParts {
    pub identity: ComponentIdentity,
    pub public_api: PublicInterface,
    pub markup: TemplateExtraction,
    pub styles: Vec<StyleSheetContract>,
    /// Raw class, template and style texts, in that order
    pub raw_sources: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContractAssembler;

impl ContractAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(&self, parts: ContractParts, generated_at: DateTime<Utc>) -> Contract {
        let ContractParts {
            identity,
            public_api,
            markup,
            styles,
            raw_sources,
        } = parts;

        let styles = styles
            .into_iter()
            .fold(StyleSheetContract::default(), |mut merged, sheet| {
                merged.merge_last_wins(sheet);
                merged
            });

        Contract {
            meta: ContractMeta {
                name: identity.name,
                root_selector: identity.selector,
                source_file: identity.source_file,
                kind: identity.kind,
                generated_at,
                content_hash: content_hash(&raw_sources),
            },
            public_api,
            slots: markup.slots,
            dom: markup.dom,
            styles,
        }
    }
}
