use bytes::Bytes;

/// Extensions the matching service can read.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Lower-cased text after the last `.`, if any.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// One candidate document as picked or dropped in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// MIME type sent to the matching service, derived from the extension.
    pub fn content_type(&self) -> &'static str {
        match file_extension(&self.file_name).as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

/// A validated submission, built fresh for every request to the matching service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub files: Vec<ResumeFile>,
    pub job_description: String,
    pub roles_responsibilities: String,
    pub skills_requirement: String,
    pub cutoff_percentage: u8,
    pub required_candidates: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("jane.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("README"), None);
    }

    #[test]
    fn test_content_type_follows_extension() {
        assert_eq!(ResumeFile::new("a.PDF", "x").content_type(), "application/pdf");
        assert_eq!(ResumeFile::new("a.doc", "x").content_type(), "application/msword");
        assert!(ResumeFile::new("a.docx", "x")
            .content_type()
            .ends_with("wordprocessingml.document"));
        assert_eq!(
            ResumeFile::new("notes", "x").content_type(),
            "application/octet-stream"
        );
    }
}
