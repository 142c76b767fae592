#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub const PRIMARY_BACKEND: &str = "win32yank.exe";
pub const FALLBACK_BACKEND: &str = "win32yoink.exe";

/// A temp directory holding mock clipboard helpers and their shared store.
pub struct MockClipboard {
    dir: TempDir,
    search_path: String,
}

impl MockClipboard {
    /// Only the primary backend installed.
    pub fn new() -> Self {
        Self::with_backends(&[PRIMARY_BACKEND])
    }

    /// No backend at all; `PATH` points at an empty directory.
    pub fn without_backends() -> Self {
        let dir = tempdir().expect("Failed to create temp directory");
        let search_path = dir.path().display().to_string();
        Self { dir, search_path }
    }

    pub fn with_backends(names: &[&str]) -> Self {
        let dir = tempdir().expect("Failed to create temp directory");
        for name in names {
            install_store_backend(dir.path(), name);
        }
        let system_path = std::env::var("PATH").unwrap_or_default();
        let search_path = format!("{}:{}", dir.path().display(), system_path);
        Self { dir, search_path }
    }

    /// Install a backend that always fails with `exit 3`.
    pub fn with_failing_backend() -> Self {
        let mock = Self::with_backends(&[]);
        write_script(
            mock.path(),
            PRIMARY_BACKEND,
            "#!/bin/sh\ncat > /dev/null\necho 'clipboard locked' >&2\nexit 3\n",
        );
        mock
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// File the mock backends store clipboard content in.
    pub fn store(&self) -> PathBuf {
        self.path().join("clipboard")
    }

    /// Name of the backend that handled the most recent call.
    pub fn last_backend(&self) -> Option<String> {
        fs::read_to_string(self.path().join("last_backend"))
            .ok()
            .map(|s| s.trim().to_string())
    }

    /// The `xclip` binary with an isolated environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("xclip").expect("Binary not found");
        cmd.env("PATH", &self.search_path)
            .env("XDG_CONFIG_HOME", self.path())
            .env("HOME", self.path())
            .env_remove("XCLIP_WRAPPER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Copy `input` with the given args (`-i` must be among them).
    pub fn copy(&self, args: &[&str], input: &[u8]) {
        self.cmd()
            .args(args)
            .write_stdin(input.to_vec())
            .assert()
            .success();
    }

    /// Paste with the given args and return the exact stdout bytes.
    pub fn paste(&self, args: &[&str]) -> Vec<u8> {
        let assert = self.cmd().args(args).assert().success();
        assert.get_output().stdout.clone()
    }
}

fn install_store_backend(dir: &Path, name: &str) {
    let script = format!(
        "#!/bin/sh\n\
         store='{store}'\n\
         echo '{name}' > '{marker}'\n\
         case \"$1\" in\n\
           -i) cat > \"$store\" ;;\n\
           -o) if [ -f \"$store\" ]; then cat \"$store\"; fi ;;\n\
           *) echo 'usage: {name} [-i|-o]' >&2; exit 1 ;;\n\
         esac\n\
         exit 0\n",
        store = dir.join("clipboard").display(),
        marker = dir.join("last_backend").display(),
        name = name,
    );
    write_script(dir, name, &script);
}

pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write mock backend");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make mock backend executable");
    path
}
