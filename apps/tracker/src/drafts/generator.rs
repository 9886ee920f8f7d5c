//! Draft generation: one synchronous round trip per request.
//!
//! Flow: load job → extract resume text → check credential → build prompt →
//!       model call → persist to the job row → return text.
//!
//! Nothing is written unless the model call succeeds, and the write is a
//! single UPDATE, so a failed generation leaves the previous draft in place.

use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::drafts::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_TEMPERATURE, RESUME_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::jobs::store;
use crate::llm_client::{ChatModel, ChatRequest, Role};
use crate::models::job::{DraftKind, JobPosting};
use crate::resume_text;

/// Generates a draft of `kind` for `job_id`, stores it on the job and returns it.
pub async fn generate(
    pool: &SqlitePool,
    llm: &dyn ChatModel,
    config: &Config,
    job_id: i64,
    kind: DraftKind,
) -> Result<String, AppError> {
    let job = store::get_by_id(pool, job_id).await?;

    let resume_path = config.resume_path.as_deref().ok_or_else(|| {
        AppError::ResumeUnavailable("resume_path is not configured".to_string())
    })?;
    let resume = resume_text::extract(resume_path).await?;

    if config.api_key().is_none() {
        return Err(AppError::MissingCredential);
    }

    let request = build_request(kind, &job, &resume);
    info!(
        "Generating {:?} for job {} ({} at {})",
        kind, job.id, job.title, job.company
    );

    let text = llm.complete(&request).await?;

    match kind {
        DraftKind::Resume => store::save_resume(pool, job_id, &text).await?,
        DraftKind::CoverLetter => store::save_cover_letter(pool, job_id, &text).await?,
    }
    info!("Stored {:?} for job {} ({} bytes)", kind, job.id, text.len());

    Ok(text)
}

/// Builds the kind-specific chat request for a job.
pub fn build_request(kind: DraftKind, job: &JobPosting, resume: &str) -> ChatRequest {
    let values = [
        ("title", job.title.as_str()),
        ("company", job.company.as_str()),
        ("job_description", job.job_description.as_str()),
        ("resume", resume),
    ];

    match kind {
        DraftKind::Resume => ChatRequest {
            role: Role::User,
            prompt: fill_template(RESUME_PROMPT_TEMPLATE, &values),
            temperature: None,
        },
        DraftKind::CoverLetter => ChatRequest {
            role: Role::System,
            prompt: fill_template(COVER_LETTER_PROMPT_TEMPLATE, &values),
            temperature: Some(COVER_LETTER_TEMPERATURE),
        },
    }
}

/// Substitutes `{key}` placeholders in a single pass, so braces inside the
/// substituted values are never expanded again.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let hit = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
