//! Scenario: the technician re-runs the build on the same day after adding
//! documents to one machine. Existing files are never overwritten.

use std::fs;

use crate::common::*;

#[test]
fn scenario_second_run_copies_nothing() {
    let env = TestEnv::new();
    add_full_machine(&env, "M1_Master 1");
    add_full_machine(&env, "M1_Redu");

    let first = env.build(&["--json"]);
    assert!(first.success, "{}", first.combined_output());
    assert!(!first.entries_at("copied").is_empty());

    let second = env.build(&["--json"]);
    assert!(second.success, "{}", second.combined_output());
    assert!(second.entries_at("copied").is_empty());
    assert!(second.entries_at("error").is_empty());
    assert!(!second.entries_at("skipped").is_empty());
}

#[test]
fn scenario_existing_files_are_kept() {
    let env = TestEnv::new();
    add_machine(&env, "M1_Master 1", &[MANUAL]);

    assert!(env.build(&[]).success);
    let manual = env.doe_path("2 - Fiches techniques et manuels/MANUELS/manual.pdf");
    fs::write(&manual, "edited by hand").unwrap();

    env.write_source_file("M1_Master 1/Documents/Technical Instructions/new.pdf", "new");
    let result = env.build(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    assert_eq!(fs::read_to_string(&manual).unwrap(), "edited by hand");
    assert!(env
        .doe_path("2 - Fiches techniques et manuels/FICHE TECHNIQUE/new.pdf")
        .is_file());
    assert_eq!(result.entries_at("copied").len(), 1);
}
