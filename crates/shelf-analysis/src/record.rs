//! Per-component dependency manifest.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Dependency sets of one component, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    /// npm packages, peers excluded
    pub external: Vec<String>,
    /// Sibling component names
    pub registry: Vec<String>,
    /// Root-relative shared utility files, transitive ones included
    pub shared: Vec<String>,
}

/// Manifest for one top-level component.
///
/// Serializes as `name`, `dependencies` (`external`, `registry`, `shared`),
/// `files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    pub dependencies: Dependencies,
    /// Every non-test, non-story file of the component, in walk order
    pub files: Vec<String>,
}

impl ComponentRecord {
    pub fn new(
        name: impl Into<String>,
        external: BTreeSet<String>,
        registry: BTreeSet<String>,
        shared: BTreeSet<String>,
        files: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dependencies: Dependencies {
                external: external.into_iter().collect(),
                registry: registry.into_iter().collect(),
                shared: shared.into_iter().collect(),
            },
            files,
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_manifest_order() {
        let record = ComponentRecord::new(
            "Select",
            BTreeSet::from(["zustand".to_string(), "axios".to_string()]),
            BTreeSet::from(["Icon".to_string()]),
            BTreeSet::from(["src/shared/lib/utils/classes.ts".to_string()]),
            vec!["src/shared/ui/Select/Select.tsx".to_string()],
        );

        let json = record.to_pretty_json().unwrap();
        let expected = r#"{
  "name": "Select",
  "dependencies": {
    "external": [
      "axios",
      "zustand"
    ],
    "registry": [
      "Icon"
    ],
    "shared": [
      "src/shared/lib/utils/classes.ts"
    ]
  },
  "files": [
    "src/shared/ui/Select/Select.tsx"
  ]
}"#;
        assert_eq!(json, expected);
    }
}
