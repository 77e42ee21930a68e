//! Share facility
//!
//! Turns an article into a text payload and hands it to a share surface.
//! Sharing is strictly best-effort: a failing surface is logged and the
//! user never sees an error state.

use std::path::PathBuf;

use crate::error::ShareError;
use crate::types::Article;

/// The canonical share payload: title, blank line, summary
pub fn share_payload(article: &Article) -> String {
    format!("{}\n\n{}", article.title, article.summary)
}

/// A platform surface that can take a share payload off our hands
///
/// Resolution (clipboard, share sheet, file drop) is the surface's
/// business; the core only produces the payload.
pub trait ShareSurface {
    fn share(&self, title: &str, payload: &str) -> Result<(), ShareError>;
}

/// Default surface: drops the payload as a text file under a share
/// directory, one file per article title.
#[derive(Debug, Clone)]
pub struct FileShareSurface {
    dir: PathBuf,
}

impl FileShareSurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data dir>/riffwire/shared`, when a data directory exists
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("riffwire").join("shared"))
    }

    fn file_name(title: &str) -> String {
        let slug: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug.trim_matches('-').to_string();
        format!("{}.txt", if slug.is_empty() { "article".to_string() } else { slug })
    }

    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(Self::file_name(title))
    }
}

impl ShareSurface for FileShareSurface {
    fn share(&self, title: &str, payload: &str) -> Result<(), ShareError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(title);
        std::fs::write(&path, payload)?;
        tracing::info!(path = %path.display(), "shared article");
        Ok(())
    }
}

/// Share an article through a surface, swallowing failure
///
/// Returns whether the hand-off succeeded, for callers that want to log
/// or test it; nothing user-visible hangs off the result.
pub fn share_article(surface: &dyn ShareSurface, article: &Article) -> bool {
    let payload = share_payload(article);
    match surface.share(&article.title, &payload) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, article = %article.id, "share failed");
            false
        }
    }
}

/// Surface for environments with no share target at all; always fails,
/// which `share_article` duly swallows.
pub struct NullShareSurface;

impl ShareSurface for NullShareSurface {
    fn share(&self, _title: &str, _payload: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("no share surface configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_share_payload_format() {
        let mut article = Catalog::builtin().unwrap().featured().clone();
        article.title = "X".to_string();
        article.summary = "Y".to_string();

        assert_eq!(share_payload(&article), "X\n\nY");
    }

    #[test]
    fn test_share_payload_uses_title_and_summary_only() {
        let catalog = Catalog::builtin().unwrap();
        let article = catalog.featured();
        let payload = share_payload(article);

        assert!(payload.starts_with(&article.title));
        assert!(payload.ends_with(&article.summary));
        assert!(!payload.contains(&article.content));
    }

    #[test]
    fn test_file_surface_writes_payload() {
        let dir = tempfile::tempdir().unwrap();
        let surface = FileShareSurface::new(dir.path());
        let catalog = Catalog::builtin().unwrap();
        let article = catalog.featured();

        assert!(share_article(&surface, article));

        let written = std::fs::read_to_string(surface.path_for(&article.title)).unwrap();
        assert_eq!(written, share_payload(article));
    }

    #[test]
    fn test_file_surface_slugs_titles() {
        let surface = FileShareSurface::new("/tmp/shares");
        let path = surface.path_for("Tool's New Album Gets Perfect Score");

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "tool-s-new-album-gets-perfect-score.txt"
        );
    }

    #[test]
    fn test_file_surface_slug_never_empty() {
        let surface = FileShareSurface::new("/tmp/shares");
        let path = surface.path_for("!!!");

        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "article.txt");
    }

    #[test]
    fn test_share_failure_is_swallowed() {
        let catalog = Catalog::builtin().unwrap();

        // Must not panic or propagate; just reports the failure
        assert!(!share_article(&NullShareSurface, catalog.featured()));
    }
}
