//! `shelf generate` - write registry manifests.

use std::path::Path;
use std::sync::Arc;

use shelf_analysis::{AnalysisRun, BatchEvent, BatchOutcome, NativeFileSystem, RegistryWriter};

use crate::cli::{GenerateArgs, Target};
use crate::config::ShelfConfig;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the generate command from the current directory.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let root = std::env::current_dir()?;
    run(&root, args.target())
}

/// Generate manifests for the project rooted at `root`.
pub fn run(root: &Path, target: Target) -> Result<()> {
    let config = ShelfConfig::load(root)?;
    let mut analysis = AnalysisRun::new(config.analyzer_config(root), Arc::new(NativeFileSystem));
    let writer = RegistryWriter::new(&analysis);

    match target {
        Target::One(component) => generate_one(&writer, &mut analysis, &component),
        Target::All => generate_all(&writer, &mut analysis, &config),
    }
}

fn generate_one(writer: &RegistryWriter, analysis: &mut AnalysisRun, component: &str) -> Result<()> {
    ui::info(&format!("Generating registry for {component}..."));

    let path = writer
        .generate(analysis, component)
        .map_err(|source| CliError::Analysis {
            component: component.to_string(),
            source,
        })?;

    ui::success(&format!("Generated {}", analysis.config().relative(&path)));
    Ok(())
}

fn generate_all(
    writer: &RegistryWriter,
    analysis: &mut AnalysisRun,
    config: &ShelfConfig,
) -> Result<()> {
    let layout = analysis.config().clone();

    let report = writer
        .generate_all(analysis, |event| match event {
            BatchEvent::Discovered(components) => ui::info(&format!(
                "Found {} components: {}",
                components.len(),
                components.join(", ")
            )),
            BatchEvent::Started(component) => {
                ui::info(&format!("Generating registry for {component}..."))
            }
            BatchEvent::Finished(BatchOutcome::Written { path, .. }) => {
                ui::success(&format!("Generated {}", layout.relative(path)))
            }
            BatchEvent::Finished(BatchOutcome::Failed { component, error }) => {
                ui::error(&format!("Failed to generate registry for {component}: {error}"))
            }
        })
        .map_err(CliError::Discovery)?;

    let total = report.outcomes.len();
    if !report.has_failures() {
        tracing::debug!(total, "batch complete");
        return Ok(());
    }

    let failed: Vec<String> = report
        .failed()
        .map(|outcome| outcome.component().to_string())
        .collect();
    ui::warning(&format!(
        "Generated {} of {total} components; failed: {}",
        report.written(),
        failed.join(", ")
    ));

    if config.fail_on_batch_error {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}
