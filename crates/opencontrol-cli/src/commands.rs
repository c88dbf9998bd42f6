use std::io;

use anyhow::{Context, Result};
use tracing::info_span;

use opencontrol_cli::cli::{CheckArgs, OutputFormatArg, ShowArgs};
use opencontrol_cli::pipeline::{check_all, load_all};
use opencontrol_cli::render::{check_table, standard_table, standards_json, write_standards_csv};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let span = info_span!("show", files = args.files.len());
    let _guard = span.enter();

    let loaded = load_all(&args.files).context("load standards")?;
    let standards = loaded.standards();
    match args.format {
        OutputFormatArg::Table => {
            for standard in &standards {
                println!("{}", standard.name());
                println!("{}", standard_table(standard));
            }
        }
        OutputFormatArg::Json => {
            println!("{}", standards_json(&standards).context("serialize standards")?);
        }
        OutputFormatArg::Csv => {
            write_standards_csv(io::stdout().lock(), &standards).context("write csv")?;
        }
    }
    Ok(())
}

/// Load every file, print a status table and return the process exit code.
pub fn run_check(args: &CheckArgs) -> i32 {
    let span = info_span!("check", files = args.files.len());
    let _guard = span.enter();

    let run = check_all(&args.files, args.fail_fast);
    println!("{}", check_table(&run.outcomes));
    let failures = run.failures();
    println!(
        "{} checked, {} loaded, {} failed",
        run.outcomes.len(),
        run.outcomes.len() - failures,
        failures
    );
    run.exit_code()
}
