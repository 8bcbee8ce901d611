//! Scenario: rules that act once per run stop at the first machine that
//! satisfies them.

use crate::common::*;

#[test]
fn scenario_probe_file_taken_from_first_machine_only() {
    let env = TestEnv::new();
    add_machine(&env, "M1_Master 1", &[PROBE]);
    add_machine(&env, "M1_Master 2", &[MANUAL]);
    add_machine(&env, "M1_Master 3", &[PROBE]);

    let result = env.build(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let studies: Vec<_> = std::fs::read_dir(env.doe_path("1 - Documents Etudes"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(studies, vec!["Sonde chauffe.pdf".to_string()]);

    let info = result.entries_at("info");
    assert!(info.iter().any(|m| m == "Probe file: searching M1_Master 1"));
    assert!(!info.iter().any(|m| m == "Probe file: searching M1_Master 3"));
}

#[test]
fn scenario_missing_plan_warns_and_later_machines_continue() {
    let env = TestEnv::new();
    add_machine(&env, "M1_Master 1", &[MANUAL]);
    add_machine(&env, "M1_Redu", &[PLAN, PREV_MAINT]);

    let result = env.build(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let warnings = result.entries_at("warning");
    assert!(
        warnings.iter().any(|w| w.contains("Installation plan")),
        "{warnings:?}"
    );
    assert!(!env
        .doe_path("1 - Documents Etudes/Plan Analyseur N_1.pdf")
        .exists());
    assert!(env
        .doe_path("1 - Documents Etudes/Plan Analyseur N_Redu.pdf")
        .is_file());
    assert!(env
        .doe_path("2 - Fiches techniques et manuels/M1_Red/PrevMaint 2024.xlsx")
        .is_file());
}
