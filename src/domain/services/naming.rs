//! Naming rules
//!
//! Pure, total mappings from a raw machine directory name to the names used
//! in the output tree. Absence of a match is a valid outcome (`Unknown`),
//! never an error.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static MASTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)master ([0-9])").expect("valid master pattern"));

/// Suffix table for destination folders; first match wins.
const FOLDER_SUFFIXES: [(&str, &str); 4] = [
    ("master 1", "_L1"),
    ("master 2", "_L2"),
    ("master 3", "_L3"),
    ("redu", "_Red"),
];

const UNKNOWN_FOLDER_SUFFIX: &str = "_Unknown";

/// NFC-normalize and lowercase, for case-insensitive matching
pub fn fold(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

/// Case-insensitive substring test on NFC-normalized text
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Text before the first `_`, or the whole name
pub fn machine_prefix(machine_name: &str) -> &str {
    machine_name.split('_').next().unwrap_or(machine_name)
}

/// True for names that denote a machine directory (`Master` or `Redu`)
pub fn is_machine_name(name: &str) -> bool {
    let folded = fold(name);
    folded.contains("master") || folded.contains("redu")
}

/// Destination folder name: `<prefix>_L1|_L2|_L3|_Red|_Unknown`
pub fn destination_folder_name(machine_name: &str) -> String {
    let folded = fold(machine_name);
    let suffix = FOLDER_SUFFIXES
        .iter()
        .find(|(needle, _)| folded.contains(needle))
        .map(|(_, suffix)| *suffix)
        .unwrap_or(UNKNOWN_FOLDER_SUFFIX);
    format!("{}{}", machine_prefix(machine_name), suffix)
}

/// Suffix token used when renaming the installation plan: `N_<digit>`,
/// `N_Redu` or `N_Unknown`
pub fn plan_rename_suffix(machine_name: &str) -> String {
    if let Some(caps) = MASTER_DIGIT.captures(machine_name) {
        return format!("N_{}", &caps[1]);
    }
    if contains_ci(machine_name, "redu") {
        return "N_Redu".to_string();
    }
    "N_Unknown".to_string()
}

/// File name given to a machine's installation plan in `1 - Documents Etudes`
pub fn plan_file_name(machine_name: &str) -> String {
    format!("Plan Analyseur {}.pdf", plan_rename_suffix(machine_name))
}
