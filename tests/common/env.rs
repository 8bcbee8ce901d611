//! Test environment for running the `doe` binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Date used by every test run
pub const TEST_DATE: &str = "2024-01-01";

/// Result of running a doe CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {line:?}: {e}"))
            })
            .collect()
    }

    /// Messages of the `entry` events at `level`
    pub fn entries_at(&self, level: &str) -> Vec<String> {
        self.json_lines()
            .into_iter()
            .filter(|event| event["event"] == "entry" && event["level"] == level)
            .filter_map(|event| event["message"].as_str().map(str::to_string))
            .collect()
    }
}

/// Isolated environment: a working directory holding `source/` and `out/`,
/// plus a separate config home
pub struct TestEnv {
    pub root: TempDir,
    pub config_home: TempDir,
    doe_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("source")).expect("Failed to create source");
        Self {
            root,
            config_home: tempfile::tempdir().expect("Failed to create config home"),
            doe_bin: PathBuf::from(env!("CARGO_BIN_EXE_doe")),
        }
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.path().join("source")
    }

    pub fn dest_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Path inside `out/DOE_<TEST_DATE>`
    pub fn doe_path(&self, relative: &str) -> PathBuf {
        self.dest_dir()
            .join(format!("DOE_{TEST_DATE}"))
            .join(relative)
    }

    /// Write a file below `source/`, creating parents
    pub fn write_source_file(&self, relative: &str, content: &str) {
        let path = self.source_dir().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn write_root_file(&self, relative: &str, content: &str) {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_doe_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.doe_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// `doe build --source source --dest out --date TEST_DATE <extra>`
    pub fn build(&self, extra: &[&str]) -> TestResult {
        let source = self.source_dir();
        let dest = self.dest_dir();
        let mut args = vec![
            "build",
            "--source",
            source.to_str().unwrap(),
            "--dest",
            dest.to_str().unwrap(),
            "--date",
            TEST_DATE,
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.doe_bin)
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("DOE_NO_COLOR", "1")
            .env_remove("DOE_OUTPUT_FORMAT")
            .env_remove("DOE_TEMPLATES_DIR")
            .output()
            .expect("Failed to execute doe");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
