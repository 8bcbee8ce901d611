//! Scenario: site handover with a master and a redundancy unit
//!
//! Both machines export certificates; only the first one's end up in the DOE
//! and each machine gets its own folder.

use std::fs;

use crate::common::*;
use chrono::NaiveDate;
use doe_builder::{LocalFs, SynthesisOptions, SynthesisUseCase};

#[test]
fn scenario_certificates_come_from_the_first_machine() {
    let env = TestEnv::new();
    env.write_source_file("M1_Master 1/Device Data/Certificates/cert.pdf", "master");
    env.write_source_file("M1_Redu/Device Data/Certificates/cert.pdf", "redu");

    let options = SynthesisOptions::new(env.source_dir(), env.dest_dir())
        .with_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let result = SynthesisUseCase::new(LocalFs::new()).execute(&options);

    assert!(result.is_success(), "{}", result.log_text());
    assert_eq!(
        fs::read_to_string(env.doe_path("3 - Certificats/cert.pdf")).unwrap(),
        "master"
    );
    assert!(env.doe_path("2 - Fiches techniques et manuels/M1_L1").is_dir());
    assert!(env.doe_path("2 - Fiches techniques et manuels/M1_Red").is_dir());
}

#[test]
fn scenario_unrelated_folders_are_ignored() {
    let env = TestEnv::new();
    add_full_machine(&env, "M2_Master 2");
    add_full_machine(&env, "Archive");

    let result = env.build(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let summary = result.json_lines().pop().unwrap();
    assert_eq!(summary["machines"].as_array().unwrap().len(), 1);
    assert!(env
        .doe_path("1 - Documents Etudes/Plan Analyseur N_2.pdf")
        .is_file());
    assert!(env.doe_path("2 - Fiches techniques et manuels/M2_L2").is_dir());
    assert!(!env
        .doe_path("2 - Fiches techniques et manuels/Archive_Unknown")
        .exists());
}

#[test]
fn scenario_run_entry_point_returns_the_log() {
    let env = TestEnv::new();
    add_machine(&env, "M1_Master 1", &[CERTIFICATE]);

    let log = doe_builder::run(&env.source_dir(), &env.dest_dir());

    assert!(log.contains("Found 1 machine(s): M1_Master 1"), "{log}");
    assert!(log.contains("cert.pdf"));
    assert!(log.lines().last().unwrap().contains("complete"));
}
