//! Template filler
//!
//! Produces a populated copy of a template from an answer set. The template
//! itself is only ever read.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::answers::AnswerSet;

/// `{field}` marker syntax
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("marker pattern is valid"));

/// Errors raised while filling a template
#[derive(Debug, Error)]
pub enum FillError {
    #[error("No answer for field '{field}' referenced at '{path}'")]
    MissingAnswer { field: String, path: String },
}

/// Fill a deep copy of `template` with `answers`
///
/// A string that is exactly one marker is replaced by the answer's value
/// (a JSON array for list answers). Strings with markers embedded in text
/// have all of them replaced together, lists joined with `", "`. Every
/// marker must have an answer.
pub fn fill(template: &Value, answers: &AnswerSet) -> Result<Value, FillError> {
    debug!(answers = answers.len(), "fill: called");
    let mut doc = template.clone();
    let mut path = String::new();
    substitute(&mut doc, answers, &mut path)?;
    Ok(doc)
}

fn substitute(value: &mut Value, answers: &AnswerSet, path: &mut String) -> Result<(), FillError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                let len = path.len();
                path.push('/');
                path.push_str(&key.replace('~', "~0").replace('/', "~1"));
                substitute(child, answers, path)?;
                path.truncate(len);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter_mut().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&index.to_string());
                substitute(child, answers, path)?;
                path.truncate(len);
            }
        }
        Value::String(text) => {
            if let Some(filled) = fill_string(text, answers, path)? {
                *value = filled;
            }
        }
        _ => {}
    }
    Ok(())
}

fn fill_string(text: &str, answers: &AnswerSet, path: &str) -> Result<Option<Value>, FillError> {
    let markers: Vec<Captures> = MARKER.captures_iter(text).collect();
    if markers.is_empty() {
        return Ok(None);
    }

    for caps in &markers {
        let field = &caps[1];
        if !answers.contains(field) {
            return Err(FillError::MissingAnswer {
                field: field.to_string(),
                path: path.to_string(),
            });
        }
    }

    // Whole-string marker: assign the answer's value directly
    if let [caps] = markers.as_slice()
        && caps[0].len() == text.len()
        && let Some(answer) = answers.get(&caps[1])
    {
        debug!(%path, field = &caps[1], "fill_string: slot assignment");
        return Ok(Some(Value::from(answer)));
    }

    debug!(%path, markers = markers.len(), "fill_string: text substitution");
    let filled = MARKER.replace_all(text, |caps: &Captures| {
        answers.get(&caps[1]).map(|a| a.as_inline()).unwrap_or_default()
    });
    Ok(Some(Value::String(filled.into_owned())))
}

/// Names of every marker in `template`, in document order, without repeats
pub fn placeholders(template: &Value) -> Vec<String> {
    let mut names = Vec::new();
    collect_placeholders(template, &mut names);
    names
}

fn collect_placeholders(value: &Value, names: &mut Vec<String>) {
    match value {
        Value::Object(map) => map.values().for_each(|child| collect_placeholders(child, names)),
        Value::Array(items) => items.iter().for_each(|child| collect_placeholders(child, names)),
        Value::String(text) => {
            for caps in MARKER.captures_iter(text) {
                let name = &caps[1];
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;
    use crate::script::SCRIPT;
    use crate::template::{CONSTRAINTS, EDITS, TEMPLATE};
    use proptest::prelude::*;
    use serde_json::json;

    fn default_answers() -> AnswerSet {
        SCRIPT
            .iter()
            .map(|q| {
                let answer = if q.split {
                    Answer::List(crate::prompt::split_list(q.default))
                } else {
                    Answer::from(q.default)
                };
                (q.field, answer)
            })
            .collect()
    }

    #[test]
    fn test_fill_instruction_and_task() {
        let mut answers = default_answers();
        answers.insert("job_type", "tech");
        answers.insert("organization_type", "startup");

        let doc = fill(&TEMPLATE, &answers).unwrap();
        assert_eq!(
            doc["instruction"],
            json!("Revise a LaTeX CV to tailor it to a specific tech job description.")
        );
        let task = doc["context"]["task"].as_str().unwrap();
        assert!(task.contains("tech position at the startup"));
    }

    #[test]
    fn test_fill_list_slot_becomes_array() {
        let mut answers = default_answers();
        answers.insert("focus_sections", vec!["skills".to_string(), "projects".to_string()]);

        let doc = fill(&TEMPLATE, &answers).unwrap();
        assert_eq!(doc["parameters"]["focus_sections"], json!(["skills", "projects"]));
        assert_eq!(doc["parameters"]["exclude_sections"], json!([]));
    }

    #[test]
    fn test_fill_nested_file_fields() {
        let mut answers = default_answers();
        answers.insert("job_description_filename", "jd.md");
        answers.insert("extra_experience_structure", "YAML");

        let doc = fill(&TEMPLATE, &answers).unwrap();
        assert_eq!(doc["context"]["job_description_file"]["filename"], json!("jd.md"));
        assert_eq!(doc["context"]["job_description_file"]["structure"], json!("plain text"));
        assert_eq!(doc["context"]["additional_experience_file"]["structure"], json!("YAML"));
        assert_eq!(doc["parameters"]["target_position_level"], json!("junior"));
    }

    #[test]
    fn test_fill_leaves_fixed_fields() {
        let doc = fill(&TEMPLATE, &default_answers()).unwrap();
        assert_eq!(doc["parameters"]["edits"], json!(EDITS));
        assert_eq!(doc["parameters"]["constraints"], json!(CONSTRAINTS));
        assert_eq!(doc["parameters"]["preserve"], TEMPLATE["parameters"]["preserve"]);
        assert_eq!(doc["context"]["source_file"], TEMPLATE["context"]["source_file"]);
        assert_eq!(doc["examples"], json!([]));
    }

    #[test]
    fn test_fill_no_markers_left() {
        let doc = fill(&TEMPLATE, &default_answers()).unwrap();
        assert!(placeholders(&doc).is_empty());
    }

    #[test]
    fn test_fill_missing_answer() {
        let answers: AnswerSet = [("job_type", "tech")].into_iter().collect();
        let template = json!({"a": {"b": "at the {job_type} {organization_type}"}});
        let err = fill(&template, &answers).unwrap_err();
        match err {
            FillError::MissingAnswer { field, path } => {
                assert_eq!(field, "organization_type");
                assert_eq!(path, "/a/b");
            }
        }
    }

    #[test]
    fn test_fill_list_in_text_is_joined() {
        let answers: AnswerSet = [("s", Answer::List(vec!["a".to_string(), "b".to_string()]))]
            .into_iter()
            .collect();
        let doc = fill(&json!(["focus on {s}."]), &answers).unwrap();
        assert_eq!(doc, json!(["focus on a, b."]));
    }

    #[test]
    fn test_fill_ignores_non_marker_braces() {
        let answers: AnswerSet = [("x", "1")].into_iter().collect();
        let doc = fill(&json!({"k": "{} { x } {x}", "n": 3}), &answers).unwrap();
        assert_eq!(doc, json!({"k": "{} { x } 1", "n": 3}));
    }

    #[test]
    fn test_fill_answer_text_not_rescanned() {
        let answers: AnswerSet = [("a", "{b}")].into_iter().collect();
        let doc = fill(&json!("x {a}"), &answers).unwrap();
        assert_eq!(doc, json!("x {b}"));
    }

    #[test]
    fn test_fill_template_reusable() {
        let before = TEMPLATE.clone();
        let first = fill(&TEMPLATE, &default_answers()).unwrap();
        let second = fill(&TEMPLATE, &default_answers()).unwrap();
        assert_eq!(first, second);
        assert_eq!(*TEMPLATE, before);
    }

    #[test]
    fn test_placeholders_document_order() {
        let names = placeholders(&TEMPLATE);
        assert_eq!(names.first().map(String::as_str), Some("job_type"));
        assert_eq!(names.iter().filter(|n| *n == "job_type").count(), 1);
        assert!(names.contains(&"organization_type".to_string()));
        assert_eq!(names.len(), SCRIPT.len());
    }

    proptest! {
        #[test]
        fn fill_never_mutates_template(
            texts in proptest::collection::vec(".*", SCRIPT.len()),
            lists in proptest::collection::vec(proptest::collection::vec("[a-z ]*", 0..4), SCRIPT.len()),
        ) {
            let before = TEMPLATE.clone();
            let answers: AnswerSet = SCRIPT
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    let answer = if q.split {
                        Answer::List(lists[i].clone())
                    } else {
                        Answer::Text(texts[i].clone())
                    };
                    (q.field, answer)
                })
                .collect();

            let doc = fill(&TEMPLATE, &answers).unwrap();
            prop_assert_eq!(&*TEMPLATE, &before);
            prop_assert_eq!(&doc["parameters"]["edits"], &json!(EDITS));
            prop_assert_eq!(&doc["parameters"]["constraints"], &json!(CONSTRAINTS));
        }
    }
}
