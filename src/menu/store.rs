use std::path::{Path, PathBuf};
use tokio::fs;

use super::RunOutput;
use crate::error::Result;

/// JSON snapshot of a run on the local disk.
#[derive(Debug)]
pub struct FileStore(PathBuf);

impl FileStore {
    pub fn open(p: impl AsRef<Path>) -> Self {
        Self(p.as_ref().to_owned())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub async fn save(&self, value: &RunOutput) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        fs::write(&self.0, bytes).await?;
        Ok(())
    }
}
