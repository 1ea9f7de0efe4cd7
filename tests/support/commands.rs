//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an esboot command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - the stub bin dir prepended to PATH
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("esboot").expect("failed to find esboot binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ELASTICSEARCH_URL");

        let path = match std::env::var_os("PATH") {
            Some(existing) => std::env::join_paths(
                std::iter::once(self.bin.path().to_path_buf())
                    .chain(std::env::split_paths(&existing)),
            )
            .expect("failed to join PATH"),
            None => self.bin.path().as_os_str().to_os_string(),
        };
        cmd.env("PATH", path);
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command whose PATH contains only the stub bin dir, for tests that
    /// must not see the host's real tools.
    pub fn cmd_isolated_path(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("PATH", self.bin.path());
        cmd
    }

    /// Shortcut for `esboot setup`.
    pub fn setup(&self) -> Output {
        self.cmd()
            .arg("setup")
            .output()
            .expect("failed to run esboot setup")
    }

    /// Shortcut for `esboot endpoint`.
    pub fn endpoint(&self) -> Output {
        self.cmd()
            .arg("endpoint")
            .output()
            .expect("failed to run esboot endpoint")
    }

    /// Shortcut for `esboot run [--skip-setup] -- <command>`.
    pub fn run(&self, skip_setup: bool, command: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("run");
        if skip_setup {
            cmd.arg("--skip-setup");
        }
        if !command.is_empty() {
            cmd.arg("--");
            cmd.args(command);
        }
        cmd.output().expect("failed to run esboot run")
    }

    /// Shortcut for `esboot templates <args>` against `cluster_url`.
    pub fn templates(&self, cluster_url: &str, args: &[&str]) -> Output {
        self.cmd()
            .env("ELASTICSEARCH_URL", cluster_url)
            .arg("templates")
            .args(args)
            .output()
            .expect("failed to run esboot templates")
    }
}
