//! The fixed CV tailoring prompt template
//!
//! Strings containing `{field}` markers are filled from the answer set. A
//! string that is exactly one marker is a slot and takes the answer's value
//! wholesale, which is how list answers become JSON arrays.

use std::sync::LazyLock;

use serde_json::{Value, json};

/// Process-wide template, built on first access and never mutated
pub static TEMPLATE: LazyLock<Value> = LazyLock::new(build);

/// Edits requested of the reviser, never touched by answers
pub const EDITS: [&str; 6] = [
    "emphasize experience aligned with the job description",
    "rewrite descriptions using relevant terminology",
    "summarize or remove low‑relevance content",
    "adjust section ordering for optimal emphasis",
    "incorporate additional content if beneficial",
    "request clarifications if job‑aligned achievements cannot be inferred",
];

/// Hard constraints on the revision, never touched by answers
pub const CONSTRAINTS: [&str; 3] = [
    "preserve bibliography/publications section",
    "do not alter macros or layout commands",
    "maintain language unless explicitly changed",
];

const TASK: &str = "Analyze the job description, identify key requirements, and revise the CV to maximise \
    alignment with the {job_type} position at the {organization_type}. Highlight relevant \
    skills, rephrase experience with appropriate terminology, and remove or condense \
    unrelated content. Maintain a professional tone and preserve original structure unless \
    clarity or impact would benefit from change.";

fn build() -> Value {
    json!({
        "instruction": "Revise a LaTeX CV to tailor it to a specific {job_type} job description.",
        "context": {
            "source_file": ".tex source file of the current CV",
            "job_description_file": {
                "filename": "{job_description_filename}",
                "structure": "{job_description_structure}"
            },
            "additional_experience_file": {
                "filename": "{extra_experience_filename}",
                "structure": "{extra_experience_structure}"
            },
            "task": TASK
        },
        "parameters": {
            "language": "{language}",
            "tone": "{tone}",
            "edits": EDITS,
            "output_format": "{output_format}",
            "preserve": "stylistic and structural consistency unless otherwise specified",
            "constraints": CONSTRAINTS,
            "review_mode": "{review_mode}",
            "cv_class": "{cv_class}",
            "target_position_level": "{position_level}",
            "focus_sections": "{focus_sections}",
            "exclude_sections": "{exclude_sections}",
            "integration_mode": "{integration_mode}"
        },
        "examples": []
    })
}
