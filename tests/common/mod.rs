//! Common test utilities for cakewrap integration tests.
//!
//! Provides `TestEnv`: an isolated sandbox with its own temp directory and
//! stub tool scripts, plus helpers to run the cakewrap binary and inspect
//! what the stub tools were invoked with.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the cakewrap binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// The sandbox directory doubles as the wrapper's working directory and, via
/// `TMPDIR`, as its system temp directory, so intermediate artifacts from
/// concurrent tests never collide.
pub struct TestEnv {
    sandbox: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            sandbox: TempDir::new().expect("failed to create sandbox"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cakewrap")),
        }
    }

    /// Get a path inside the sandbox
    pub fn path(&self, relative: &str) -> PathBuf {
        self.sandbox.path().join(relative)
    }

    /// Write a file inside the sandbox
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    /// Read a file from the sandbox
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("failed to read file")
    }

    /// Install an executable stub script into the sandbox.
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).expect("failed to write script");
        let mut perms = fs::metadata(&path).expect("stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod script");
        path
    }

    /// Stub transformer: records its argument vector, then copies the source
    /// to the `-o` target with a marker line appended.
    pub fn stub_cake(&self, record: &str) -> PathBuf {
        let record_path = self.path(record);
        self.write_script(
            "cake",
            &format!(
                r#"printf '%s\n' "$@" > "{record}"
src="$1"
shift
out=""
while [ "$#" -gt 0 ]; do
    if [ "$1" = "-o" ]; then out="$2"; shift; fi
    shift
done
cp "$src" "$out"
echo "/* caked */" >> "$out"
"#,
                record = record_path.display()
            ),
        )
    }

    /// Stub transformer that fails without producing output.
    pub fn stub_cake_failing(&self, exit_code: i32) -> PathBuf {
        self.write_script("cake", &format!("exit {exit_code}\n"))
    }

    /// Stub compiler: records its argument vector, copies the `-c` input to
    /// the `-o` output, and writes a make-style depfile when `-MF` is given.
    pub fn stub_cc(&self, record: &str) -> PathBuf {
        let record_path = self.path(record);
        self.write_script(
            "cc",
            &format!(
                r#"printf '%s\n' "$@" > "{record}"
src=""
out=""
mf=""
while [ "$#" -gt 0 ]; do
    case "$1" in
        -c) src="$2"; shift ;;
        -o) out="$2"; shift ;;
        -MF) mf="$2"; shift ;;
    esac
    shift
done
if [ -n "$src" ]; then
    cp "$src" "$out"
    if [ -n "$mf" ]; then
        printf '%s: %s\n' "$out" "$src" > "$mf"
    fi
fi
"#,
                record = record_path.display()
            ),
        )
    }

    /// Run cakewrap in the sandbox
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run cakewrap in the sandbox with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.sandbox.path())
            .args(args)
            .env_remove("CAKE")
            .env_remove("DEBUG_CAKE_WRAPPER")
            .env_remove("CAKE_WRAPPER_DISABLE_CAKE")
            .env("TMPDIR", self.sandbox.path());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute cakewrap");
        output_to_result(output)
    }

    /// Read the argument vector a stub tool recorded, one arg per line.
    pub fn read_record(&self, record: &str) -> Vec<String> {
        self.read_file(record).lines().map(str::to_string).collect()
    }

    /// Path of the intermediate artifact for a given source file, as the
    /// wrapper derives it inside this sandbox.
    pub fn intermediate(&self, stem: &str) -> PathBuf {
        self.path(&format!("{stem}.cake.c"))
    }

    pub fn str_path(&self, relative: &str) -> String {
        self.path(relative).to_string_lossy().into_owned()
    }

    /// Sandbox root with a trailing separator, for stripping from recorded
    /// absolute paths.
    pub fn root_prefix(&self) -> String {
        format!("{}/", self.sandbox.path().display())
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
