//! Where a document lives: its path and the workspace folders around it.

use crate::placeholders::normalize_path;
use std::path::{Path, PathBuf};

/// The location of the document being formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatContext {
    /// Path of the document (passed to `$absoluteFilePath`).
    pub file_path: PathBuf,
    /// Open workspace folders, in order. The first one is the fallback working directory.
    pub workspace_folders: Vec<PathBuf>,
}

impl FormatContext {
    /// A context with no workspace folders.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            workspace_folders: Vec::new(),
        }
    }

    /// Set the open workspace folders.
    pub fn with_workspace_folders(mut self, folders: impl IntoIterator<Item = PathBuf>) -> Self {
        self.workspace_folders = folders.into_iter().collect();
        self
    }

    /// The innermost workspace folder containing the document.
    pub fn workspace_folder(&self) -> Option<&Path> {
        self.workspace_folders
            .iter()
            .filter(|folder| self.file_path.starts_with(folder))
            .max_by_key(|folder| folder.components().count())
            .map(PathBuf::as_path)
    }

    /// Resolve the formatter's working directory.
    ///
    /// The base is the folder containing the document, else the first workspace folder. A
    /// configured `cwd` is resolved against the base (an absolute `cwd` replaces it) or used
    /// as-is when there is no base.
    pub fn resolve_cwd(&self, configured: Option<&str>) -> Option<PathBuf> {
        let base = self
            .workspace_folder()
            .or_else(|| self.workspace_folders.first().map(PathBuf::as_path));

        match (base, configured) {
            (Some(base), Some(cwd)) => Some(normalize_path(&base.join(cwd))),
            (None, Some(cwd)) => Some(PathBuf::from(cwd)),
            (base, None) => base.map(Path::to_path_buf),
        }
    }
}
