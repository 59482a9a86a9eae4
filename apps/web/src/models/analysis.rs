use serde::{Deserialize, Serialize};

/// Match results returned by the matching service for one submission.
///
/// `message` is only present when no candidate cleared the cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub total_processed: u32,
    // The service echoes the cutoff back as a float (`50.0`).
    #[serde(default)]
    pub cutoff_percentage: f64,
    #[serde(default)]
    pub required_candidates: u32,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub suggestion_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_name: String,
    pub match_percentage: f64,
    /// Path of the original document on the matching service, e.g. `/view_resume/a.pdf`.
    pub file_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_service_payload() {
        let body = r#"{
            "candidates": [
                {"candidate_name": "Jane Doe", "filename": "jane.pdf",
                 "match_percentage": 87.46, "file_link": "/view_resume/jane.pdf"}
            ],
            "total_processed": 4,
            "cutoff_percentage": 50.0,
            "required_candidates": 5
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.total_processed, 4);
        assert_eq!(result.cutoff_percentage, 50.0);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].file_link, "/view_resume/jane.pdf");
        assert!(result.message.is_none());
        assert!(result.suggestion_message.is_none());
    }

    #[test]
    fn test_missing_candidates_defaults_to_empty() {
        let body = r#"{
            "total_processed": 3,
            "cutoff_percentage": 90,
            "required_candidates": 2,
            "message": "No Candidate meets the Cut-Off Percentage"
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(result.candidates.is_empty());
        assert_eq!(
            result.message.as_deref(),
            Some("No Candidate meets the Cut-Off Percentage")
        );
    }
}
