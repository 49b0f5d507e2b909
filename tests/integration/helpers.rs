//! Shared helpers for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Directory holding test fixture files.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path to a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// `assert_cmd` handle for the rcat binary with logging left at its default.
pub fn rcat() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_rcat"));
    cmd.env_remove("RCAT_LOG");
    cmd
}

/// Run rcat with `args`, feeding `stdin`, and capture raw stdout, stderr and exit code.
pub fn run_rcat(args: &[&str], stdin: &[u8]) -> (Vec<u8>, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rcat"))
        .args(args)
        .env_remove("RCAT_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute rcat");

    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        // rcat may exit before reading stdin (e.g. on a usage error)
        let _ = child_stdin.write_all(stdin);
    }

    let output = child.wait_with_output().expect("Failed to wait for rcat");
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (output.stdout, stderr, exit_code)
}
