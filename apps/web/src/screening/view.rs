use serde::Serialize;

use crate::models::analysis::{AnalysisResult, Candidate};

/// Display model for one analysis result, consumed by the find-matches template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub total_processed: u32,
    pub cutoff_percentage: String,
    pub required_candidates: u32,
    pub suggestion_message: Option<String>,
    pub body: ResultBody,
}

/// The two disjoint ways a result is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultBody {
    /// Nobody cleared the cutoff. Informational, not an error.
    NoMatches { message: String },
    Candidates {
        cards: Vec<CandidateCard>,
        fewer_than_required: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateCard {
    pub name: String,
    /// Whole percent.
    pub match_percentage: i64,
    /// Absolute URL of the original document on the matching service.
    pub document_url: String,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult, service_base_url: &str) -> Self {
        // A top-level message always wins, even if candidates came along with it.
        let body = match &result.message {
            Some(message) => ResultBody::NoMatches {
                message: message.clone(),
            },
            None => ResultBody::Candidates {
                cards: result
                    .candidates
                    .iter()
                    .map(|c| CandidateCard::new(c, service_base_url))
                    .collect(),
                fewer_than_required: (result.candidates.len() as u64)
                    < u64::from(result.required_candidates),
            },
        };

        ResultView {
            total_processed: result.total_processed,
            cutoff_percentage: format_percentage(result.cutoff_percentage),
            required_candidates: result.required_candidates,
            suggestion_message: result
                .suggestion_message
                .clone()
                .filter(|s| !s.trim().is_empty()),
            body,
        }
    }

    #[cfg(test)]
    pub fn card_count(&self) -> usize {
        match &self.body {
            ResultBody::NoMatches { .. } => 0,
            ResultBody::Candidates { cards, .. } => cards.len(),
        }
    }
}

impl CandidateCard {
    fn new(candidate: &Candidate, service_base_url: &str) -> Self {
        CandidateCard {
            name: candidate.candidate_name.clone(),
            match_percentage: candidate.match_percentage.round() as i64,
            document_url: document_url(service_base_url, &candidate.file_link),
        }
    }
}

fn document_url(base: &str, file_link: &str) -> String {
    let base = base.trim_end_matches('/');
    if file_link.starts_with('/') {
        format!("{base}{file_link}")
    } else {
        format!("{base}/{file_link}")
    }
}

/// `50.0` -> `50`, `62.5` -> `62.5`.
fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
