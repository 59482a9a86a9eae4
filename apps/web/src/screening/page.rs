use tracing::{info, warn};

use crate::match_client::MatchService;
use crate::models::analysis::AnalysisResult;
use crate::models::upload::ResumeFile;
use crate::screening::selection::{select_resumes, SelectionError, SelectionSource};
use crate::screening::validation::{build_upload_request, AnalysisForm, SubmissionError};
use crate::screening::view::ResultView;

/// What happened to a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; the service was not called.
    Invalid(SubmissionError),
    /// The service call failed; `error` holds the banner text.
    Failed,
    Completed,
}

/// State of the upload/analysis page for one form post.
///
/// Holds at most one result. Each submission clears it before calling the
/// matching service, so results never accumulate. Duplicate posts are held
/// back in the browser, where the submit button is disabled until the answer
/// arrives.
#[derive(Debug, Default)]
pub struct UploadPage {
    pub form: AnalysisForm,
    pub files: Vec<ResumeFile>,
    pub error: Option<String>,
    pub results: Option<AnalysisResult>,
}

impl UploadPage {
    pub fn new(form: AnalysisForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Replaces the held files with the resumes found in `entries`.
    /// When none qualify the held list is left empty and the error is shown.
    pub fn select_files(
        &mut self,
        source: SelectionSource,
        entries: Vec<ResumeFile>,
    ) -> Result<usize, SelectionError> {
        match select_resumes(source, entries) {
            Ok(files) => {
                let count = files.len();
                self.files = files;
                self.error = None;
                Ok(count)
            }
            Err(e) => {
                self.files.clear();
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, service: &dyn MatchService) -> SubmitOutcome {
        let request = match build_upload_request(&self.form, &self.files) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        self.error = None;
        self.results = None;

        info!(
            "submitting {} resume(s) for analysis (cutoff {}%, {} required)",
            request.files.len(),
            request.cutoff_percentage,
            request.required_candidates
        );

        match service.analyze(request).await {
            Ok(result) => {
                info!(
                    "analysis complete: {} processed, {} candidate(s) returned",
                    result.total_processed,
                    result.candidates.len()
                );
                self.results = Some(result);
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!("analysis failed: {e}");
                self.error = Some(e.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    pub fn result_view(&self, service_base_url: &str) -> Option<ResultView> {
        self.results
            .as_ref()
            .map(|r| ResultView::from_result(r, service_base_url))
    }
}
