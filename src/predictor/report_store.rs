//! Hand-off store for the most recent prediction.
//!
//! One plain JSON file under the app directory, overwritten per submission
//! and read once at startup so the result view can show the previous
//! session's report.

use std::path::PathBuf;

use crate::app_dirs;

const REPORT_FILE_NAME: &str = "last_prediction.json";

#[derive(Debug, thiserror::Error)]
pub enum ReportStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("App dir error: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
}

#[derive(Clone, Debug)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new() -> Result<Self, ReportStoreError> {
        Ok(Self {
            dir: app_dirs::app_root_dir()?,
        })
    }

    fn report_path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE_NAME)
    }

    /// Overwrite the stored record with the raw response text.
    pub fn save(&self, raw_json: &str) -> Result<(), ReportStoreError> {
        std::fs::write(self.report_path(), raw_json)?;
        Ok(())
    }

    /// Read the stored record, if any.
    pub fn load(&self) -> Result<Option<String>, ReportStoreError> {
        let path = self.report_path();
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }

    pub fn delete(&self) -> Result<(), ReportStoreError> {
        let path = self.report_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
