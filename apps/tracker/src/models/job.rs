use serde::Serialize;
use sqlx::FromRow;

/// One discovered job posting. Rows are written by the ingestion process;
/// this service only flips status flags and stores generated drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    /// Discovery timestamp as written by ingestion (ISO-8601 text, so it
    /// sorts chronologically as a string).
    pub date: String,
    pub job_description: String,
    pub hidden: bool,
    pub applied: bool,
    pub interview: bool,
    pub rejected: bool,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
}

/// Column list shared by every query that materializes a `JobPosting`.
/// `date` is cast so rows whose column was declared TIMESTAMP still decode as text.
pub const JOB_COLUMNS: &str = "id, title, company, CAST(date AS TEXT) AS date, job_description, \
    hidden, applied, interview, rejected, cover_letter, resume";

/// The four independent status flags. Setting one never clears another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Hidden,
    Applied,
    Interview,
    Rejected,
}

impl StatusFlag {
    /// Column backing this flag. Only these fixed names are ever spliced into SQL.
    pub fn column(self) -> &'static str {
        match self {
            StatusFlag::Hidden => "hidden",
            StatusFlag::Applied => "applied",
            StatusFlag::Interview => "interview",
            StatusFlag::Rejected => "rejected",
        }
    }
}

/// Which artifact the draft generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Resume,
    CoverLetter,
}

impl DraftKind {
    /// Column the generated text is persisted to, also the JSON response key.
    pub fn column(self) -> &'static str {
        match self {
            DraftKind::Resume => "resume",
            DraftKind::CoverLetter => "cover_letter",
        }
    }
}
