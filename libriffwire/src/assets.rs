//! Optional asset loading
//!
//! The terminal equivalent of the app's custom display font: an ASCII-art
//! banner rendered above the home feed. The load is strictly optional;
//! any failure is logged and the app proceeds with the plain text title.
//! Callers only depend on the completion signal, never on success.

use std::path::PathBuf;

use crate::error::AssetError;

/// Loads the banner art from an optional path
#[derive(Debug, Clone)]
pub struct AssetLoader {
    banner_path: Option<PathBuf>,
}

impl AssetLoader {
    pub fn new(banner_path: Option<PathBuf>) -> Self {
        Self { banner_path }
    }

    /// `<data dir>/riffwire/banner.txt`, when a data directory exists
    pub fn default_banner_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("riffwire").join("banner.txt"))
    }

    /// Load the banner, degrading to `None` on any failure
    ///
    /// This always completes; the caller leaves its boot gate on
    /// completion regardless of the outcome.
    pub async fn load(&self) -> Option<String> {
        let path = self.banner_path.as_ref()?;

        match self.read_banner(path).await {
            Ok(banner) => Some(banner),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "banner load failed, using plain title");
                None
            }
        }
    }

    async fn read_banner(&self, path: &PathBuf) -> Result<String, AssetError> {
        let content = tokio::fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Err(AssetError::Empty(path.display().to_string()));
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_without_path_is_none() {
        let loader = AssetLoader::new(None);

        assert_eq!(loader.load().await, None);
    }

    #[tokio::test]
    async fn test_load_missing_file_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("nope.txt")));

        // Completes, does not error out
        assert_eq!(loader.load().await, None);
    }

    #[tokio::test]
    async fn test_load_empty_file_degrades_to_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n").unwrap();
        let loader = AssetLoader::new(Some(file.path().to_path_buf()));

        assert_eq!(loader.load().await, None);
    }

    #[tokio::test]
    async fn test_load_reads_banner() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "M E T A L  N E W S").unwrap();
        let loader = AssetLoader::new(Some(file.path().to_path_buf()));

        assert_eq!(loader.load().await.as_deref(), Some("M E T A L  N E W S"));
    }
}
