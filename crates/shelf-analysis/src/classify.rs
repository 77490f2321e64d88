//! Import specifier classification.
//!
//! Checks run in a fixed order: external, shared utility, registry component.
//! A specifier matching none of them (a relative import such as
//! `./Button.module.css`) is [`ImportKind::Unresolved`] and is not tracked.

use crate::config::AnalyzerConfig;

/// Category of a module specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportKind {
    /// npm-style package
    External,
    /// External package supplied by the consuming application
    Peer,
    /// Shared utility reachable through the alias
    Shared,
    /// Sibling UI component, with the registry prefix stripped
    Registry(String),
    /// Relative import, or alias path outside the shared tree
    Unresolved,
}

/// Prefix rules for one analysis run.
#[derive(Debug, Clone)]
pub struct ImportClassifier {
    alias_prefix: String,
    shared_prefix: String,
    registry_prefix: String,
    peers: Vec<String>,
}

impl ImportClassifier {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            alias_prefix: config.alias_prefix.clone(),
            shared_prefix: config.shared_prefix.clone(),
            registry_prefix: config.registry_prefix.clone(),
            peers: config.peer_dependencies.clone(),
        }
    }

    pub fn classify(&self, specifier: &str) -> ImportKind {
        if self.is_external(specifier) {
            if self.peers.iter().any(|peer| peer == specifier) {
                ImportKind::Peer
            } else {
                ImportKind::External
            }
        } else if self.is_shared_utility(specifier) {
            ImportKind::Shared
        } else if let Some(name) = self.registry_component(specifier) {
            ImportKind::Registry(name.to_string())
        } else {
            ImportKind::Unresolved
        }
    }

    /// Not aliased and not relative.
    pub fn is_external(&self, specifier: &str) -> bool {
        !specifier.starts_with(&self.alias_prefix)
            && !specifier.starts_with("./")
            && !specifier.starts_with("../")
    }

    pub fn is_shared_utility(&self, specifier: &str) -> bool {
        specifier.starts_with(&self.shared_prefix) && !specifier.starts_with(&self.registry_prefix)
    }

    pub fn is_registry_component(&self, specifier: &str) -> bool {
        specifier.starts_with(&self.registry_prefix)
    }

    /// Sibling component name for a registry specifier.
    ///
    /// `@/shared/ui/FieldContainer` yields `FieldContainer`; a deep import such
    /// as `@/shared/ui/RangeSlider/RangeSlider` yields the component directory,
    /// `RangeSlider`.
    pub fn registry_component<'a>(&self, specifier: &'a str) -> Option<&'a str> {
        let rest = specifier.strip_prefix(self.registry_prefix.as_str())?;
        rest.split('/').next().filter(|name| !name.is_empty())
    }
}
