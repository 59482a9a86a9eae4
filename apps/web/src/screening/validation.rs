use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::upload::{ResumeFile, UploadRequest};

pub const DEFAULT_CUTOFF_PERCENTAGE: &str = "50";
pub const DEFAULT_REQUIRED_CANDIDATES: &str = "5";

/// Raw field values of the upload form, kept as typed so they can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisForm {
    pub job_description: String,
    pub roles_responsibilities: String,
    pub skills_requirement: String,
    pub cutoff_percentage: String,
    pub required_candidates: String,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            job_description: String::new(),
            roles_responsibilities: String::new(),
            skills_requirement: String::new(),
            cutoff_percentage: DEFAULT_CUTOFF_PERCENTAGE.to_string(),
            required_candidates: DEFAULT_REQUIRED_CANDIDATES.to_string(),
        }
    }
}

impl AnalysisForm {
    /// Stores a text field by its form name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "job_description" => self.job_description = value,
            "roles_responsibilities" => self.roles_responsibilities = value,
            "skills_requirement" => self.skills_requirement = value,
            "cutoff_percentage" => self.cutoff_percentage = value,
            "required_candidates" => self.required_candidates = value,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please select a folder with resumes and enter a job description.")]
    MissingInput,

    #[error("Cut-Off Percentage must be between 0 and 100.")]
    CutoffOutOfRange,

    #[error("Required Candidates must be at least 1.")]
    RequiredCandidatesOutOfRange,
}

/// Runs the submission checks in order and builds the request on success.
///
/// Order matters: missing input is reported before any range problem.
pub fn build_upload_request(
    form: &AnalysisForm,
    files: &[ResumeFile],
) -> Result<UploadRequest, SubmissionError> {
    if files.is_empty() || form.job_description.trim().is_empty() {
        return Err(SubmissionError::MissingInput);
    }

    let cutoff = parse_whole_number(&form.cutoff_percentage)
        .filter(|v| (0..=100).contains(v))
        .ok_or(SubmissionError::CutoffOutOfRange)?;

    let required = parse_whole_number(&form.required_candidates)
        .filter(|v| *v >= 1)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(SubmissionError::RequiredCandidatesOutOfRange)?;

    Ok(UploadRequest {
        files: files.to_vec(),
        job_description: form.job_description.clone(),
        roles_responsibilities: form.roles_responsibilities.clone(),
        skills_requirement: form.skills_requirement.clone(),
        cutoff_percentage: cutoff as u8,
        required_candidates: required,
    })
}

fn parse_whole_number(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
