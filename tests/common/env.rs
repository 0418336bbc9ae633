//! Test environment for running the argraph binary in isolation.
//!
//! Each `TestEnv` owns a temporary working directory and a temporary
//! config home, so `./argraph.toml` and the user config never leak in
//! from the machine running the tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running an argraph CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Stdout parsed as NDJSON events
    pub fn stdout_events(&self) -> Vec<serde_json::Value> {
        parse_events(&self.stdout)
    }

    /// Stderr parsed as NDJSON events
    pub fn stderr_events(&self) -> Vec<serde_json::Value> {
        parse_events(&self.stderr)
    }
}

fn parse_events(text: &str) -> Vec<serde_json::Value> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line).unwrap_or_else(|e| panic!("not NDJSON: {line}: {e}"))
        })
        .collect()
}

pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a file relative to the working directory
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_argraph"));
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("ARGRAPH_STRICT_REFERENCES")
            .env_remove("ARGRAPH_PRETTY");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().unwrap())
    }

    /// Run with `stdin` piped in
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        TestResult::from_output(child.wait_with_output().unwrap())
    }

    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }
}
