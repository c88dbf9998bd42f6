//! Integration tests for the pipeline module.

use std::path::{Path, PathBuf};

use opencontrol_cli::pipeline::{check_all, load_all};
use opencontrol_standards::StandardErrorKind;

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../opencontrol-standards/tests/fixtures")
        .join(relative)
}

#[test]
fn load_all_keeps_file_order() {
    let files = vec![
        fixture("standards/PCI-DSS-MAY-2015.yaml"),
        fixture("standards/NIST-800-53.yaml"),
    ];
    let loaded = load_all(&files).expect("load standards");
    let names: Vec<&str> = loaded.standards().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["PCI-DSS-MAY-2015", "NIST-800-53"]);
}

#[test]
fn load_all_lists_a_repeated_standard_once() {
    let files = vec![
        fixture("standards/NIST-800-53.yaml"),
        fixture("standards/NIST-800-53.yaml"),
    ];
    let loaded = load_all(&files).unwrap();
    assert_eq!(loaded.names, vec!["NIST-800-53".to_string()]);
    assert_eq!(loaded.registry.len(), 1);
}

#[test]
fn load_all_stops_at_first_failure() {
    let files = vec![
        fixture("standards/NIST-800-53.yaml"),
        fixture("broken/no-name.yaml"),
        fixture("standards/does-not-exist.yaml"),
    ];
    let err = load_all(&files).unwrap_err();
    assert_eq!(err.kind(), StandardErrorKind::StandardSchema);
    assert!(err.path().ends_with("no-name.yaml"));
}

#[test]
fn check_all_continues_after_failure() {
    let files = vec![
        fixture("broken/NIST-800-53.yaml"),
        fixture("standards/does-not-exist.yaml"),
        fixture("standards/PCI-DSS-MAY-2015.yaml"),
    ];
    let run = check_all(&files, false);
    assert_eq!(run.outcomes.len(), 3);
    assert_eq!(run.failures(), 2);
    assert!(run.outcomes[2].is_ok());
    assert!(run.registry.contains("PCI-DSS-MAY-2015"));
    assert!(!run.registry.contains("NIST-800-53"));
    assert_eq!(run.exit_code(), 1);

    let kinds: Vec<Option<StandardErrorKind>> = run
        .outcomes
        .iter()
        .map(|o| o.result.as_ref().err().map(|e| e.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(StandardErrorKind::StandardSchema),
            Some(StandardErrorKind::ReadFile),
            None
        ]
    );
}

#[test]
fn check_all_fail_fast_stops_after_first_failure() {
    let files = vec![
        fixture("standards/NIST-800-53.yaml"),
        fixture("broken/not-yaml.yaml"),
        fixture("standards/PCI-DSS-MAY-2015.yaml"),
    ];
    let run = check_all(&files, true);
    assert_eq!(run.outcomes.len(), 2);
    assert!(run.outcomes[0].is_ok());
    assert!(!run.outcomes[1].is_ok());
    assert!(!run.registry.contains("PCI-DSS-MAY-2015"));
    assert_eq!(run.exit_code(), 1);
}

#[test]
fn check_all_exits_zero_when_every_file_loads() {
    let files = vec![
        fixture("standards/NIST-800-53.yaml"),
        fixture("standards/PCI-DSS-MAY-2015.yaml"),
    ];
    let run = check_all(&files, true);
    assert_eq!(run.failures(), 0);
    assert_eq!(run.exit_code(), 0);
    assert_eq!(run.registry.len(), 2);
}
