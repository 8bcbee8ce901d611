//! Machine export layouts used across tests.

use super::env::TestEnv;

pub const CERTIFICATE: &str = "Device Data/Certificates/cert.pdf";
pub const MANUAL: &str = "Documents/Operating Instructions/manual.pdf";
pub const TECH_SHEET: &str = "Documents/Technical Instructions/sheet.pdf";
pub const PREV_MAINT: &str = "Device Data/System Data/PrevMaint 2024.xlsx";
pub const IBN_REPORT: &str = "Device Data/System Data/IBN-Data/run1/report.csv";
pub const PLAN: &str = "Device Data/Installation Drawings/PDF/K9-1234 implantation.pdf";
pub const PROBE: &str = "Device Data/System Data/Sonde chauffe.pdf";

/// Write `files` below `source/<machine>/`
pub fn add_machine(env: &TestEnv, machine: &str, files: &[&str]) {
    for file in files {
        env.write_source_file(&format!("{machine}/{file}"), &format!("{machine}: {file}"));
    }
}

/// A machine exporting one file of every category
pub fn add_full_machine(env: &TestEnv, machine: &str) {
    add_machine(
        env,
        machine,
        &[CERTIFICATE, MANUAL, TECH_SHEET, PREV_MAINT, IBN_REPORT, PLAN, PROBE],
    );
}
