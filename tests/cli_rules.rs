mod common;

use common::*;

#[test]
fn test_rules_lists_every_category() {
    let env = TestEnv::new();

    let result = env.run(&["rules"]);
    assert!(result.success, "{}", result.combined_output());

    for category in [
        "Manuals",
        "Technical instructions",
        "Intervention report",
        "Machine folder",
        "System data extracts",
        "IBN-Data bundle",
        "Installation plan",
        "Probe file",
        "Certificates",
    ] {
        assert!(result.stdout.contains(category), "missing {category}");
    }
}

#[test]
fn test_rules_json() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "rules"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_lines();
    let rules = events[0]["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 9);
    assert_eq!(rules[0]["category"], "Manuals");
    assert_eq!(rules[0]["per_machine"], true);
    assert_eq!(rules[8]["destination"], "3 - Certificats");
}
