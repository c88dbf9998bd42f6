//! Loading of standard files for the CLI commands.
//!
//! `show` needs every file to load and stops at the first failure; `check`
//! records a result per file and only stops early when asked to.

use std::path::PathBuf;

use tracing::warn;

use opencontrol_standards::{LoadReport, Standard, StandardError, StandardsRegistry};

/// Standards loaded for `show`, with names in the order their files were given.
#[derive(Debug, Default)]
pub struct LoadedStandards {
    pub registry: StandardsRegistry,
    pub names: Vec<String>,
}

impl LoadedStandards {
    pub fn standards(&self) -> Vec<&Standard> {
        self.names
            .iter()
            .map(|name| self.registry.get_or_empty(name))
            .collect()
    }
}

/// Load every file, stopping at the first one that fails.
pub fn load_all(files: &[PathBuf]) -> Result<LoadedStandards, StandardError> {
    let mut loaded = LoadedStandards::default();
    for path in files {
        let report = loaded.registry.load_standard(path)?;
        // A later file may re-register a name; keep its first position.
        if !loaded.names.contains(&report.name) {
            loaded.names.push(report.name);
        }
    }
    Ok(loaded)
}

/// Result of loading one file with `check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub result: Result<LoadReport, StandardError>,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct CheckRun {
    pub registry: StandardsRegistry,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckRun {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }

    /// Process exit code: 1 when any file failed to load.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.failures() > 0)
    }
}

/// Load every file and record each result. With `fail_fast`, stop after the
/// first failure.
pub fn check_all(files: &[PathBuf], fail_fast: bool) -> CheckRun {
    let mut run = CheckRun::default();
    for path in files {
        let result = run.registry.load_standard(path);
        if let Err(error) = &result {
            warn!(path = %path.display(), kind = %error.kind(), "standard failed to load");
        }
        let failed = result.is_err();
        run.outcomes.push(CheckOutcome {
            path: path.clone(),
            result,
        });
        if failed && fail_fast {
            break;
        }
    }
    run
}
