//! Folder selection for the counting pipeline.
//!
//! A run starts with the user picking a folder. That choice is abstracted
//! behind the [`FolderSource`] trait so the counting logic
//! never depends on where the path came from: the CLI supplies it through
//! [`ArgFolderSource`], and tests can supply a fixed path.

use std::path::PathBuf;

/// A collaborator that yields the folder to analyze, or reports that the
/// user declined to pick one.
pub trait FolderSource {
    /// Return the selected folder.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Cancelled`] when no folder was chosen.
    fn select_folder(&self) -> Result<PathBuf, PickerError>;
}

/// Errors from folder selection.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The user did not choose a folder.
    #[error("No folder selected.")]
    Cancelled,
}

/// Folder source backed by the optional positional CLI argument.
#[derive(Debug, Clone)]
pub struct ArgFolderSource {
    path: Option<PathBuf>,
}

impl ArgFolderSource {
    /// Create a source from the parsed CLI path argument.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl FolderSource for ArgFolderSource {
    fn select_folder(&self) -> Result<PathBuf, PickerError> {
        self.path.clone().ok_or(PickerError::Cancelled)
    }
}
