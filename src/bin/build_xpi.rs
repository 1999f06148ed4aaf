//! Packages the extension into the test XPI.

use clap::Parser;
use socialapi_tools::config::{Config, Verbosity};
use socialapi_tools::{output, package};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "build-xpi",
    about = "Package the extension plus the test providers into the test XPI"
)]
struct Cli {
    /// Root of the extension source tree
    #[arg(value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Show every packaging step
    #[arg(short, long)]
    verbose: bool,

    /// Only print the created archive path
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Config { verbosity }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let root = std::path::absolute(&cli.root)?;
    output::print_working_dir(&root, &config);

    let progress = output::create_package_progress(&config);
    let result = package::build_xpi(&root, |step| {
        progress.update(step);
        output::print_package_step(&config, step);
    });
    progress.finish();

    let xpi = result?;
    output::print_created(&xpi, &config);
    Ok(())
}
