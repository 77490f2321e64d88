//! Shelf CLI - dependency manifests for a UI component registry.
//!
//! Parses arguments, sets up logging and colors, then dispatches to the
//! requested command.

use clap::Parser;
use miette::Result;
use shelf_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
    };

    result.map_err(error::cli_error_to_miette)
}
