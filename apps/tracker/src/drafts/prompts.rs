// Fixed prompt templates for the two draft kinds.
// Job fields and resume text are substituted verbatim; nothing is truncated.

/// Resume tailoring prompt, sent as a user message.
/// Replace: {title}, {company}, {job_description}, {resume}
pub const RESUME_PROMPT_TEMPLATE: &str = "You are a career coach with a client that is applying for a job as a \
{title} at {company}. They have a resume that you need to review and suggest how to tailor it for the job. \
Approach this task in the following steps: \n 1. Highlight three to five most important responsibilities for this role based on the job description. \
\n2. Based on these most important responsibilities from the job description, please tailor the resume for this role. Do not make information up. \
Respond with the final resume only. \n\n Here is the job description: {job_description}\n\n Here is the resume: {resume}";

/// Cover letter prompt, sent as a system message.
/// Replace: {title}, {company}, {job_description}, {resume}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "You are young but experienced career coach helping job seekers land their dream jobs in tech. \
I need your help crafting a cover letter for the {title} role at {company}. Here is a job description: {job_description}\
\nhere is my resume: {resume}\
\nI need you to help me improve it. Let's approach this in following steps. \
\nStep 1. Please set the formality scale as follows: 1 is conversational English, my initial Cover letter draft is 10. \
Step 2. Identify three to five ways this cover letter can be improved, and elaborate on each way with at least one thoughtful sentence. \
Step 3. Suggest an improved cover letter based on these suggestions with the Formality Score set to 7. \
Avoid subjective qualifiers such as drastic, transformational, etc. Keep the final cover letter within 250 words. \
Please respond with the final cover letter only.";

/// Sampling temperature for cover letters. Resumes use the service default.
pub const COVER_LETTER_TEMPERATURE: f32 = 0.7;
