use clap::{ArgGroup, Args, Subcommand};

/// Available Shelf subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate registry manifests
    ///
    /// Analyzes a component directory and writes `<output_dir>/<name>.json`
    /// with its external packages, sibling components and shared files.
    Generate(GenerateArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["component", "all"]),
))]
pub struct GenerateArgs {
    /// Component to generate, named after its directory
    ///
    /// Examples:
    ///   shelf generate Button
    ///   shelf generate RangeSlider
    #[arg(value_name = "COMPONENT")]
    pub component: Option<String>,

    /// Generate every component in the components directory
    ///
    /// A component that fails is reported and skipped; the others are
    /// still written.
    #[arg(short, long)]
    pub all: bool,
}

/// What a generate invocation covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    One(String),
    All,
}

impl GenerateArgs {
    pub fn target(&self) -> Target {
        match &self.component {
            Some(name) if !self.all => Target::One(name.clone()),
            _ => Target::All,
        }
    }
}
