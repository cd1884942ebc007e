//! Entrycheck - load a native plugin module, run its entry point, and report
//! whether it initializes.
//!
//! The probe is a single linear sequence: resolve the library path, load the
//! module with lazy binding, resolve the entry export, invoke it with the
//! module handle, release the module. The first failed step ends the run with
//! exit code 1; exit code 0 means every step succeeded.

mod output;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use entrycheck_host::{DEFAULT_ENTRY_SYMBOL, InitStatus, Module, library_path};
use miette::{IntoDiagnostic, Result};

use crate::report::{ProbeReport, Stage};

#[derive(Parser)]
#[command(name = "entrycheck")]
#[command(
    author,
    version,
    about = "Smoke-test a native plugin module by running its entry point"
)]
struct Cli {
    /// Path to the plugin shared object or bundle directory
    #[arg(value_name = "MODULE")]
    module: PathBuf,

    /// Entry symbol to resolve
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ENTRY_SYMBOL)]
    entry: String,

    /// Emit a JSON probe report on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut report = ProbeReport::new(&cli.module, &cli.entry);
    let result = run(&cli, &mut report);

    if cli.json {
        println!("{}", report.to_json());
    }

    match result {
        Ok(InitStatus::Initialized) => ExitCode::SUCCESS,
        // The decline was already reported as a plain stdout message.
        Ok(InitStatus::Declined) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, report: &mut ProbeReport) -> Result<InitStatus> {
    // Resolve bundle directories to the shared object inside them
    let library = library_path(&cli.module).into_diagnostic()?;
    report.library = Some(library.clone());

    // Load
    let module = Module::load(&library).into_diagnostic()?;
    report.stage = Stage::Loaded;
    output::info(&format!("loaded {}", library.display()));

    // Resolve and invoke
    let status = {
        let entry = module.entry(&cli.entry).into_diagnostic()?;
        report.stage = Stage::Resolved;
        entry.invoke()
    };
    report.stage = Stage::Invoked;

    match status {
        InitStatus::Initialized => report.initialized = true,
        InitStatus::Declined => {
            output::init_failed();
            // The module itself is released on drop.
            return Ok(InitStatus::Declined);
        }
    }

    // Release
    module.close().into_diagnostic()?;
    report.stage = Stage::Closed;

    output::success(&format!(
        "{} initialized via {}",
        cli.module.display(),
        cli.entry
    ));

    Ok(InitStatus::Initialized)
}
