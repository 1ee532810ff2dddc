//! Contract Build UseCase
//!
//! Reads a component's sources from disk, runs them through the parser
//! ports and the extractors, and assembles the contract.

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::ExtractionConfig;
use crate::errors::Result;
use crate::features::contract_builder::application::assembler::{
    ComponentIdentity, ContractAssembler, ContractParts,
};
use crate::features::contract_builder::domain::{BuildRequest, ComponentKind, ComponentMetadata};
use crate::features::contract_builder::infrastructure::{read_source, resolve_url, SourceText};
use crate::features::interface_extraction::InterfaceExtractor;
use crate::features::parsing::domain::ClassSourceFile;
use crate::features::parsing::ports::ParserSet;
use crate::features::selector_matching::SelectorMatcher;
use crate::features::style_collection::StyleCollector;
use crate::features::template_extraction::TemplateExtractor;
use crate::shared::models::{Contract, PublicInterface};

pub struct ContractBuildUseCase<'a> {
    parsers: ParserSet<'a>,
    templates: TemplateExtractor,
    interfaces: InterfaceExtractor,
    matcher: SelectorMatcher,
    assembler: ContractAssembler,
}

impl<'a> ContractBuildUseCase<'a> {
    pub fn new(parsers: ParserSet<'a>) -> Self {
        Self::with_config(parsers, ExtractionConfig::default())
    }

    pub fn with_config(parsers: ParserSet<'a>, config: ExtractionConfig) -> Self {
        Self {
            parsers,
            templates: TemplateExtractor::with_config(config),
            interfaces: InterfaceExtractor::new(),
            matcher: SelectorMatcher::new(),
            assembler: ContractAssembler::new(),
        }
    }

    pub fn matcher(&self) -> &SelectorMatcher {
        &self.matcher
    }

    /// Build one contract
    pub fn build(&self, request: &BuildRequest) -> Result<Contract> {
        info!(class = %request.class_path.display(), "building contract");

        let class_source = read_source(&request.class_path)?;
        let parsed = match self
            .parsers
            .class
            .parse_class_file(&class_source.text, &class_source.path)
        {
            Ok(file) => Some(file),
            Err(err) => {
                warn!(
                    class = %request.class_path.display(),
                    error = %err,
                    "class parse failed; falling back to declared inputs/outputs"
                );
                None
            }
        };
        let metadata = parsed.as_ref().and_then(ComponentMetadata::discover);

        let template = self.load_template(request, metadata.as_ref())?;
        let nodes = match &template {
            Some(source) => self
                .parsers
                .template
                .parse_template(&source.text, &source.path)?,
            None => Vec::new(),
        };
        let markup = self.templates.extract(&nodes);

        let mut raw_sources = vec![class_source.text.clone()];
        if let Some(source) = &template {
            raw_sources.push(source.text.clone());
        }

        let mut styles = Vec::new();
        for source in self.load_styles(request, metadata.as_ref(), &class_source)? {
            let sheet = self.parsers.style.parse_stylesheet(&source.text, &source.path)?;
            styles.push(StyleCollector::new(&self.matcher).collect(
                &sheet,
                &source.display_path(),
                &markup.dom,
            ));
            raw_sources.push(source.text);
        }

        let public_api = self.public_api(request, parsed.as_ref(), metadata.as_ref());
        let identity = ComponentIdentity {
            name: request
                .name
                .clone()
                .or_else(|| metadata.as_ref().map(|m| m.class_name.clone()))
                .unwrap_or_else(|| request.fallback_name()),
            selector: metadata
                .as_ref()
                .and_then(|m| m.selector.clone())
                .unwrap_or_default(),
            source_file: class_source.display_path(),
            kind: metadata
                .as_ref()
                .map(|m| m.kind)
                .unwrap_or(ComponentKind::Component)
                .as_str()
                .to_string(),
        };

        let contract = self.assembler.assemble(
            ContractParts {
                identity,
                public_api,
                markup,
                styles,
                raw_sources,
            },
            Utc::now(),
        );

        info!(
            name = %contract.meta.name,
            elements = contract.dom.len(),
            slots = contract.slots.len(),
            rules = contract.styles.rules.len(),
            "contract built"
        );
        Ok(contract)
    }

    /// Build independent contracts in parallel; results keep request order
    pub fn build_many(&self, requests: &[BuildRequest]) -> Vec<Result<Contract>> {
        debug!(count = requests.len(), "building contracts in parallel");
        requests.par_iter().map(|request| self.build(request)).collect()
    }

    fn load_template(
        &self,
        request: &BuildRequest,
        metadata: Option<&ComponentMetadata>,
    ) -> Result<Option<SourceText>> {
        if let Some(path) = &request.template_path {
            return read_source(path).map(Some);
        }
        let Some(metadata) = metadata else {
            return Ok(None);
        };
        if let Some(url) = &metadata.template_url {
            return read_source(&resolve_url(request.base_dir(), url)).map(Some);
        }
        Ok(metadata
            .inline_template
            .as_ref()
            .map(|text| SourceText::new(&request.class_path, text.clone())))
    }

    /// External sheets first, then inline styles
    fn load_styles(
        &self,
        request: &BuildRequest,
        metadata: Option<&ComponentMetadata>,
        class_source: &SourceText,
    ) -> Result<Vec<SourceText>> {
        let mut sources = Vec::new();
        if !request.style_paths.is_empty() {
            for path in &request.style_paths {
                sources.push(read_source(path)?);
            }
        } else if let Some(metadata) = metadata {
            for url in &metadata.style_urls {
                sources.push(read_source(&resolve_url(request.base_dir(), url))?);
            }
        }
        if let Some(metadata) = metadata {
            sources.extend(
                metadata
                    .inline_styles
                    .iter()
                    .map(|text| SourceText::new(&class_source.path, text.clone())),
            );
        }
        Ok(sources)
    }

    fn public_api(
        &self,
        request: &BuildRequest,
        parsed: Option<&ClassSourceFile>,
        metadata: Option<&ComponentMetadata>,
    ) -> PublicInterface {
        let mut declared = metadata.map(|m| m.declared.clone()).unwrap_or_default();
        declared.inputs.extend(request.declared.inputs.iter().cloned());
        declared.outputs.extend(request.declared.outputs.iter().cloned());
        match parsed {
            Some(file) => self.interfaces.extract(file, &declared),
            None => self.interfaces.degraded(&declared),
        }
    }
}
