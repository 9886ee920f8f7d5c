// Draft Generator: tailored resume and cover-letter drafts for one job.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
