//! HTML pages, rendered with askama from `templates/`.

use askama::Template;

use crate::models::job::JobPosting;

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobListPage {
    pub jobs: Vec<JobPosting>,
}

#[derive(Template)]
#[template(path = "job_description.html")]
pub struct JobDetailPage {
    pub job: JobPosting,
}
