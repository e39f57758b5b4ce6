use std::path::PathBuf;

use candu::app_dirs::ConfigBaseGuard;
use tempfile::TempDir;

/// Redirects the app directory into a temp directory for one test. The inner
/// guard also serializes tests that touch the shared override.
pub struct CanduEnvGuard {
    _config: ConfigBaseGuard,
    temp: TempDir,
}

impl CanduEnvGuard {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let _config = ConfigBaseGuard::set(temp.path().to_path_buf());
        Self { _config, temp }
    }

    pub fn base(&self) -> PathBuf {
        self.temp.path().to_path_buf()
    }
}
