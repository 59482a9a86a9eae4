use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::upload::ResumeFile;
use crate::render::Page;
use crate::screening::page::UploadPage;
use crate::screening::selection::SelectionSource;
use crate::screening::validation::AnalysisForm;
use crate::screening::view::ResultView;
use crate::state::AppState;

#[derive(Serialize)]
struct FindMatchesContext<'a> {
    form: &'a AnalysisForm,
    source: &'static str,
    /// Resumes carried by the post being answered. File inputs come back empty.
    last_post_file_count: usize,
    error: Option<&'a str>,
    results: Option<ResultView>,
}

/// A decoded upload form post.
#[derive(Default)]
struct UploadSubmission {
    form: AnalysisForm,
    source: SelectionSource,
    entries: Vec<ResumeFile>,
}

/// GET /find-matches
pub async fn handle_find_matches(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, &UploadPage::default(), SelectionSource::default())
}

/// POST /find-matches
pub async fn handle_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut submission = UploadSubmission::default();
    if let Err(e) = read_submission(multipart, &mut submission).await {
        if e.status() != StatusCode::PAYLOAD_TOO_LARGE {
            return Err(e.into());
        }
        warn!("upload rejected: body over {} bytes", state.config.max_upload_bytes);
        let mut page = UploadPage::new(submission.form);
        page.error = Some(upload_too_large_message(state.config.max_upload_bytes));
        let html = render(&state, &page, submission.source)?;
        return Ok((StatusCode::PAYLOAD_TOO_LARGE, html).into_response());
    }

    let mut page = UploadPage::new(submission.form);

    // A rejected selection is reported without running the submission checks.
    if !submission.entries.is_empty()
        && page
            .select_files(submission.source, submission.entries)
            .is_err()
    {
        return Ok(render(&state, &page, submission.source)?.into_response());
    }

    let outcome = page.submit(state.matcher.as_ref()).await;
    debug!("submission outcome: {outcome:?}");

    Ok(render(&state, &page, submission.source)?.into_response())
}

/// Fills `submission` field by field, so values read before a failure are kept.
async fn read_submission(
    mut multipart: Multipart,
    submission: &mut UploadSubmission,
) -> Result<(), MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "files" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await?;
                // An untouched file input still posts one nameless part.
                if file_name.is_empty() {
                    continue;
                }
                submission.entries.push(ResumeFile::new(file_name, bytes));
            }
            "source" => {
                submission.source = SelectionSource::from_form_value(&field.text().await?);
            }
            _ => {
                let value = field.text().await?;
                submission.form.set_field(&name, value);
            }
        }
    }
    Ok(())
}

fn upload_too_large_message(limit_bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    let limit = if limit_bytes >= MB {
        format!("{} MB", limit_bytes / MB)
    } else {
        format!("{} KB", limit_bytes.div_ceil(1024))
    };
    format!("The total upload exceeds {limit}. Please select a smaller folder of resumes.")
}

fn render(
    state: &AppState,
    page: &UploadPage,
    source: SelectionSource,
) -> Result<Html<String>, AppError> {
    let context = FindMatchesContext {
        form: &page.form,
        source: source.as_str(),
        last_post_file_count: page.files.len(),
        error: page.error.as_deref(),
        results: page.result_view(&state.config.match_service_url),
    };
    Ok(Html(
        state.templates.render_page(Page::FindMatches, context)?,
    ))
}
