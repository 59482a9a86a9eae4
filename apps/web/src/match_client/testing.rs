//! In-memory `MatchService` for page and router tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{MatchError, MatchService};
use crate::models::analysis::{AnalysisResult, Candidate};
use crate::models::upload::UploadRequest;

pub enum StubReply {
    Result(AnalysisResult),
    Api { status: u16, message: Option<String> },
}

/// Answers with queued replies, in order, and records every request it sees.
#[derive(Default)]
pub struct StubMatchService {
    replies: Mutex<VecDeque<StubReply>>,
    requests: Mutex<Vec<UploadRequest>>,
}

impl StubMatchService {
    pub fn replying(replies: Vec<StubReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<UploadRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MatchService for StubMatchService {
    async fn analyze(&self, request: UploadRequest) -> Result<AnalysisResult, MatchError> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(StubReply::Result(result)) => Ok(result),
            Some(StubReply::Api { status, message }) => Err(MatchError::Api { status, message }),
            None => Err(MatchError::Api {
                status: 503,
                message: None,
            }),
        }
    }
}

pub fn candidate(name: &str, score: f64) -> Candidate {
    let file = name.to_lowercase().replace(' ', "_");
    Candidate {
        candidate_name: name.to_string(),
        match_percentage: score,
        file_link: format!("/view_resume/{file}.pdf"),
    }
}

pub fn result_with(candidates: Vec<Candidate>, required: u32) -> AnalysisResult {
    AnalysisResult {
        total_processed: candidates.len() as u32,
        cutoff_percentage: 50.0,
        required_candidates: required,
        candidates,
        message: None,
        suggestion_message: None,
    }
}

pub fn no_match_result(cutoff: f64) -> AnalysisResult {
    AnalysisResult {
        total_processed: 4,
        cutoff_percentage: cutoff,
        required_candidates: 5,
        candidates: vec![],
        message: Some("No Candidate meets the Cut-Off Percentage".to_string()),
        suggestion_message: Some("Try lowering the cut-off percentage.".to_string()),
    }
}
