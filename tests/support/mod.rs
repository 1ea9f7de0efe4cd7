//! Test support utilities for esboot integration tests.
//!
//! Provides reusable test environment setup, stub external commands, and
//! helper assertions.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir, home dir, and a stub
/// bin dir that is prepended to PATH, so `kubectl`, `curl`, and
/// `python3` resolve to shell stubs written by the test. No
/// process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Directory of stub external commands, prepended to PATH
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");

        Self { dir, home, bin }
    }

    /// Create a test environment whose `kubectl` stub serves a secret
    /// containing the given properties blob.
    pub fn with_secret(properties: &str) -> Self {
        let t = Self::new();
        t.stub_kubectl_secret(properties);
        t
    }

    /// Write an executable stub command into the bin dir.
    #[cfg(unix)]
    pub fn stub(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, script).expect("failed to write stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to mark stub executable");
    }

    /// Stub `kubectl` to serve the given secret JSON and log invocations
    /// to `kubectl.log` in the project dir.
    #[cfg(unix)]
    pub fn stub_kubectl(&self, secret_json: &str) {
        self.stub(
            "kubectl",
            &format!(
                "#!/bin/sh\necho \"kubectl $*\" >> kubectl.log\ncat <<'EOF'\n{}\nEOF\n",
                secret_json
            ),
        );
    }

    /// Stub `kubectl` with a secret whose data holds the given
    /// properties blob under `elasticsearch.properties`.
    #[cfg(unix)]
    pub fn stub_kubectl_secret(&self, properties: &str) {
        self.stub_kubectl(&fixtures::secret_json(properties));
    }

    /// Stub `kubectl` to fail with the given stderr message.
    #[cfg(unix)]
    pub fn stub_kubectl_fail(&self, stderr: &str, code: i32) {
        self.stub(
            "kubectl",
            &format!(
                "#!/bin/sh\necho \"kubectl $*\" >> kubectl.log\necho '{}' >&2\nexit {}\n",
                stderr, code
            ),
        );
    }

    /// Stub `python3` to create a working virtualenv whose `pip` logs
    /// invocations to `pip.log` in the project dir.
    #[cfg(unix)]
    pub fn stub_python3(&self) {
        self.stub("python3", fixtures::PYTHON3_STUB);
    }

    /// Stub `python3` whose venv `pip` fails every install.
    #[cfg(unix)]
    pub fn stub_python3_bad_pip(&self) {
        self.stub("python3", fixtures::PYTHON3_STUB_BAD_PIP);
    }

    /// Stub `python3` to fail on any invocation.
    #[cfg(unix)]
    pub fn stub_python3_fail(&self) {
        self.stub(
            "python3",
            "#!/bin/sh\necho 'simulated interpreter failure' >&2\nexit 1\n",
        );
    }

    /// Stub `curl` with a router script that serves canned responses
    /// from `cluster/` fixture files in the project dir and logs every
    /// invocation to `curl.log`.
    #[cfg(unix)]
    pub fn stub_curl_cluster(&self) {
        self.stub("curl", fixtures::CURL_STUB);
        std::fs::create_dir_all(self.dir.path().join("cluster"))
            .expect("failed to create cluster fixture dir");
    }

    /// Write a cluster fixture file served by the curl stub.
    pub fn cluster_fixture(&self, name: &str, json: &str) {
        let path = self.dir.path().join("cluster").join(name);
        std::fs::write(path, json).expect("failed to write cluster fixture");
    }

    /// Write a file into the project dir.
    pub fn project_file(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write project file");
    }

    /// Read a log file from the project dir, empty when absent.
    pub fn log(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap_or_default()
    }

    /// Path of a file in the project dir.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
