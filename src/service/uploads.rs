use crate::error::ShopError;
use std::path::PathBuf;
use tracing::info;

/// Writes uploaded files into a fixed directory.
///
/// The directory must already exist. Filenames are used exactly as the
/// client sent them and an existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target of `filename`, joined textually as `<dir>/<filename>`.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        let mut joined = self.dir.clone().into_os_string();
        joined.push("/");
        joined.push(filename);
        PathBuf::from(joined)
    }

    pub async fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, ShopError> {
        let path = self.path_for(filename);
        tokio::fs::write(&path, contents).await?;
        info!(path = %path.display(), bytes = contents.len(), "stored upload");
        Ok(path)
    }
}
