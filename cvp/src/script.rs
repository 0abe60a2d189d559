//! The fixed question script
//!
//! Questions are asked in declaration order. Each one answers the template
//! field of the same name.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::answers::AnswerSet;
use crate::prompt::{PromptError, Prompter};

/// One entry of the question script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Answer set key, matching a `{field}` marker in the template
    pub field: &'static str,
    /// Text shown to the user
    pub prompt: &'static str,
    /// Used when the user enters nothing
    pub default: &'static str,
    /// Parse the answer as a comma-separated list
    pub split: bool,
}

impl Question {
    const fn text(field: &'static str, prompt: &'static str, default: &'static str) -> Self {
        Self {
            field,
            prompt,
            default,
            split: false,
        }
    }

    const fn list(field: &'static str, prompt: &'static str, default: &'static str) -> Self {
        Self {
            field,
            prompt,
            default,
            split: true,
        }
    }
}

/// All questions, in the order they are asked
pub static SCRIPT: [Question; 15] = [
    Question::text("job_type", "Job type", "industry"),
    Question::text("organization_type", "Organisation type", "private firm"),
    Question::text("language", "Language", "English"),
    Question::text("tone", "Tone", "professional"),
    Question::text("output_format", "Output format", "annotated LaTeX code block"),
    Question::text(
        "review_mode",
        "Review mode (annotated_suggestions|inline_comments|full_rewrite)",
        "annotated_suggestions",
    ),
    Question::text("cv_class", "LaTeX class", "moderncv"),
    Question::text(
        "position_level",
        "Position level (intern|junior|mid|senior|postdoc)",
        "junior",
    ),
    Question::list(
        "focus_sections",
        "Focus sections (comma‑separated)",
        "work experience,technical skills,projects",
    ),
    Question::list("exclude_sections", "Exclude sections (comma‑separated)", ""),
    Question::text(
        "integration_mode",
        "Integration mode (add_new_content_to_existing_structure|replace_sections|append_only)",
        "add_new_content_to_existing_structure",
    ),
    Question::text("job_description_filename", "Job‑description filename", "job_description.txt"),
    Question::text("job_description_structure", "Job‑description structure", "plain text"),
    Question::text("extra_experience_filename", "Extra‑experience filename", "other_info.json"),
    Question::text(
        "extra_experience_structure",
        "Extra‑experience structure",
        "nested JSON with sections like education, work experience, skills, etc.",
    ),
];

/// Look up a question by field name
pub fn question(field: &str) -> Option<&'static Question> {
    SCRIPT.iter().find(|q| q.field == field)
}

/// Ask every scripted question and gather the answers
///
/// `overrides` replaces the default of the question with the same field
/// name. Unknown override keys are ignored with a warning.
pub fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    overrides: &HashMap<String, String>,
) -> Result<AnswerSet, PromptError> {
    debug!(overrides = overrides.len(), "collect: called");
    for field in overrides.keys() {
        if question(field).is_none() {
            warn!(%field, "Ignoring default override for unknown field");
        }
    }

    let mut answers = AnswerSet::new();
    for q in &SCRIPT {
        let default = overrides.get(q.field).map(String::as_str).unwrap_or(q.default);
        let answer = prompter.ask(q.prompt, Some(default), q.split)?;
        debug!(field = q.field, %answer, "collect: answered");
        answers.insert(q.field, answer);
    }

    info!("Collected {} answers", answers.len());
    Ok(answers)
}
