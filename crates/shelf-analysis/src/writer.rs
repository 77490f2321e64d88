//! Registry manifest output.

use std::path::PathBuf;
use std::sync::Arc;

use crate::analyzer::AnalysisRun;
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::fs::FileSystem;
use crate::record::ComponentRecord;

/// Result of generating one component's manifest in batch mode.
#[derive(Debug)]
pub enum BatchOutcome {
    Written { component: String, path: PathBuf },
    Failed { component: String, error: AnalysisError },
}

impl BatchOutcome {
    pub fn component(&self) -> &str {
        match self {
            BatchOutcome::Written { component, .. } | BatchOutcome::Failed { component, .. } => {
                component.as_str()
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BatchOutcome::Failed { .. })
    }
}

/// Progress notifications emitted by [`RegistryWriter::generate_all`].
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// Every component found, before any is processed
    Discovered(&'a [String]),
    Started(&'a str),
    Finished(&'a BatchOutcome),
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(BatchOutcome::is_failure)
    }
}

/// Writes component manifests into the registry directory.
#[derive(Debug, Clone)]
pub struct RegistryWriter {
    config: AnalyzerConfig,
    fs: Arc<dyn FileSystem>,
}

impl RegistryWriter {
    pub fn new(run: &AnalysisRun) -> Self {
        Self {
            config: run.config().clone(),
            fs: run.fs_handle(),
        }
    }

    pub fn manifest_path(&self, component: &str) -> PathBuf {
        self.config.manifest_path(component)
    }

    /// Serialize `record` to `<output_dir>/<name>.json`, creating the
    /// directory when needed.
    pub fn write(&self, record: &ComponentRecord) -> Result<PathBuf> {
        let path = self.manifest_path(&record.name);

        let mut json = record
            .to_pretty_json()
            .map_err(|source| AnalysisError::Serialize {
                name: record.name.clone(),
                source,
            })?;
        json.push('\n');

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|source| AnalysisError::Write {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        self.fs
            .write(&path, &json)
            .map_err(|source| AnalysisError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(component = %record.name, path = %path.display(), "wrote manifest");
        Ok(path)
    }

    /// Analyze component `name` and write its manifest.
    pub fn generate(&self, run: &mut AnalysisRun, name: &str) -> Result<PathBuf> {
        let record = run.analyze_component(name)?;
        self.write(&record)
    }

    /// Generate a manifest for every component directory.
    ///
    /// A failing component is recorded in the report and does not stop the
    /// others. Only failing to list the components directory is an error.
    pub fn generate_all<F>(&self, run: &mut AnalysisRun, mut on_event: F) -> Result<BatchReport>
    where
        F: FnMut(BatchEvent<'_>),
    {
        let components = run.list_components()?;
        on_event(BatchEvent::Discovered(&components));

        let mut report = BatchReport::default();
        for component in &components {
            on_event(BatchEvent::Started(component));

            let outcome = match self.generate(run, component) {
                Ok(path) => BatchOutcome::Written {
                    component: component.clone(),
                    path,
                },
                Err(error) => {
                    tracing::debug!(component = %component, error = %error, "component failed");
                    BatchOutcome::Failed {
                        component: component.clone(),
                        error,
                    }
                }
            };

            on_event(BatchEvent::Finished(&outcome));
            report.outcomes.push(outcome);
        }

        Ok(report)
    }
}
