//! DOE layout value object - fixed folder names of the output tree

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{DoeError, DoeResult};

pub const SUMMARY_DIR: &str = "0 - Sommaire";
pub const STUDIES_DIR: &str = "1 - Documents Etudes";
pub const SHEETS_DIR: &str = "2 - Fiches techniques et manuels";
pub const CERTIFICATES_DIR: &str = "3 - Certificats";

/// Top-level folders, created once per run in this order
pub const SKELETON: [&str; 4] = [SUMMARY_DIR, STUDIES_DIR, SHEETS_DIR, CERTIFICATES_DIR];

pub const MANUALS_DIR: &str = "MANUELS";
pub const TECHNICAL_SHEETS_DIR: &str = "FICHE TECHNIQUE";
pub const INTERVENTION_REPORT_DIR: &str = "RAPPORT D'INTERVENTION";
pub const IBN_REPORT_DIR: &str = "Rapport tests cube analyseur";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_doe_date(value: &str) -> DoeResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DoeError::InvalidDate {
        value: value.to_string(),
    })
}

/// Root of one run's output tree: `<dest>/DOE_<YYYY-MM-DD>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoeRoot {
    path: PathBuf,
}

impl DoeRoot {
    pub fn new(dest_root: &Path, date: NaiveDate) -> Self {
        Self {
            path: dest_root.join(Self::folder_name(date)),
        }
    }

    /// `DOE_<YYYY-MM-DD>`
    pub fn folder_name(date: NaiveDate) -> String {
        format!("DOE_{}", date.format(DATE_FORMAT))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    pub fn summary_dir(&self) -> PathBuf {
        self.path.join(SUMMARY_DIR)
    }

    pub fn sheets_dir(&self) -> PathBuf {
        self.path.join(SHEETS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let root = DoeRoot::new(Path::new("/out"), date);
        assert_eq!(root.path(), Path::new("/out/DOE_2024-01-01"));
        assert_eq!(
            root.sheets_dir(),
            PathBuf::from("/out/DOE_2024-01-01/2 - Fiches techniques et manuels")
        );
    }

    #[test]
    fn single_digit_months_are_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(DoeRoot::folder_name(date), "DOE_2025-03-07");
    }

    #[test]
    fn parse_accepts_iso_dates() {
        let date = parse_doe_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_rejects_other_formats() {
        assert!(matches!(
            parse_doe_date("29/02/2024"),
            Err(DoeError::InvalidDate { .. })
        ));
        assert!(parse_doe_date("2023-02-29").is_err());
    }
}
