//! Property tests for machine naming rules.

use proptest::prelude::*;

use doe_builder::domain::services::naming::is_machine_name;
use doe_builder::domain::services::{destination_folder_name, plan_rename_suffix};

/// Names that mention neither `master` nor `redu` in any case
fn unrelated_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _-]{0,32}")
        .unwrap()
        .prop_filter("must not look like a machine", |s| {
            let lower = s.to_lowercase();
            !lower.contains("master") && !lower.contains("redu")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: naming never panics on arbitrary input.
    #[test]
    fn property_naming_never_panics(s in "(?s).{0,128}") {
        let _ = destination_folder_name(&s);
        let _ = plan_rename_suffix(&s);
        let _ = is_machine_name(&s);
    }

    /// PROPERTY: the destination folder keeps the prefix before the first `_`.
    #[test]
    fn property_prefix_is_kept(prefix in "[A-Za-z0-9]{1,8}", rest in "[A-Za-z0-9 ]{0,16}") {
        let name = format!("{prefix}_{rest}");
        let folder = destination_folder_name(&name);
        let expected_prefix = format!("{prefix}_");
        prop_assert!(folder.starts_with(&expected_prefix));
    }

    /// PROPERTY: `Master 2` in any case maps to `_L2` and `N_2`.
    #[test]
    fn property_master_2_any_case(
        prefix in "[A-Z][0-9]{1,2}",
        word in "[Mm][Aa][Ss][Tt][Ee][Rr]",
        tail in "[a-z ]{0,8}",
    ) {
        let name = format!("{prefix}_{word} 2{tail}");
        prop_assert_eq!(destination_folder_name(&name), format!("{prefix}_L2"));
        prop_assert_eq!(plan_rename_suffix(&name), "N_2");
        prop_assert!(is_machine_name(&name));
    }

    /// PROPERTY: unrelated names fall into `_Unknown` and are never machines.
    #[test]
    fn property_unrelated_names_are_unknown(name in unrelated_name()) {
        prop_assert!(destination_folder_name(&name).ends_with("_Unknown"));
        prop_assert_eq!(plan_rename_suffix(&name), "N_Unknown");
        prop_assert!(!is_machine_name(&name));
    }
}
