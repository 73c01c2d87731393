//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Env vars cleared for isolation; a developer's shell must not leak
/// profile fields into the tests.
const PROFILE_ENV_VARS: &[&str] = &[
    "STENCIL_NAME",
    "STENCIL_PORT",
    "STENCIL_DB_NAME",
    "STENCIL_DB_USER",
    "STENCIL_DB_PASSWORD",
    "STENCIL_DB_HOST",
    "STENCIL_TABLE_PREFIX",
];

impl Test {
    /// Create a stencil command rooted in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("stencil").expect("failed to find stencil binary");
        cmd.current_dir(self.dir.path());
        for var in PROFILE_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `stencil render` with arbitrary arguments.
    pub fn render(&self, args: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("render").args(args);
        cmd.output().expect("failed to run stencil render")
    }

    /// Shortcut for `stencil render` with the full shop_1 profile flags.
    pub fn render_shop1(&self, template: &str, out: &str, extra: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["render", "--template", template, "--out", out]);
        cmd.args(super::fixtures::profile_flags());
        cmd.args(extra);
        cmd.output().expect("failed to run stencil render")
    }

    /// Shortcut for `stencil check`.
    pub fn check(&self, args: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("check").args(args);
        cmd.output().expect("failed to run stencil check")
    }

    /// Shortcut for `stencil fleet`.
    pub fn fleet(&self, args: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("fleet").args(args);
        cmd.output().expect("failed to run stencil fleet")
    }

    /// Shortcut for `stencil secrets generate`.
    pub fn secrets_generate(&self, out: &str, force: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["secrets", "generate", "--out", out]);
        if force {
            cmd.arg("--force");
        }
        cmd.output().expect("failed to run stencil secrets generate")
    }

    /// Shortcut for `stencil secrets show`.
    pub fn secrets_show(&self, file: &str, json: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["secrets", "show", file]);
        if json {
            cmd.arg("--json");
        }
        cmd.output().expect("failed to run stencil secrets show")
    }

    /// Shortcut for `stencil init`.
    pub fn init(&self, force: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("init");
        if force {
            cmd.arg("--force");
        }
        cmd.output().expect("failed to run stencil init")
    }
}
