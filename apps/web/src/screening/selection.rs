use thiserror::Error;
use tracing::debug;

use crate::models::upload::{file_extension, ResumeFile, RESUME_EXTENSIONS};

/// Where a batch of files came from on the upload page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionSource {
    #[default]
    FolderPicker,
    DropZone,
}

impl SelectionSource {
    /// Maps the hidden `source` form field set by the page script.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "drop" => SelectionSource::DropZone,
            _ => SelectionSource::FolderPicker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionSource::FolderPicker => "folder",
            SelectionSource::DropZone => "drop",
        }
    }
}

// Folder picker and drop zone share one message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No valid resume files found. Please select a folder or drop files containing PDF, DOC, or DOCX files.")]
    NoResumeFiles,
}

pub fn is_resume_file(name: &str) -> bool {
    file_extension(name)
        .map(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Keeps the resume documents out of a picked or dropped batch, in their original order.
pub fn select_resumes(
    source: SelectionSource,
    entries: Vec<ResumeFile>,
) -> Result<Vec<ResumeFile>, SelectionError> {
    let offered = entries.len();
    let kept: Vec<ResumeFile> = entries
        .into_iter()
        .filter(|f| is_resume_file(&f.file_name))
        .collect();

    debug!(
        "{} selection: kept {} of {} entries",
        source.as_str(),
        kept.len(),
        offered
    );

    if kept.is_empty() {
        return Err(SelectionError::NoResumeFiles);
    }
    Ok(kept)
}
