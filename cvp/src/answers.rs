//! Collected answers keyed by field name

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// A single prompt response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Trimmed free-form text
    Text(String),
    /// Comma-separated input split into trimmed pieces
    List(Vec<String>),
}

impl Answer {
    /// Render the answer for embedding in running text
    ///
    /// Lists are joined with `", "`.
    pub fn as_inline(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

impl From<&Answer> for Value {
    fn from(answer: &Answer) -> Self {
        match answer {
            Answer::Text(text) => Value::String(text.clone()),
            Answer::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for Answer {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Mapping from field name to answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier one for the same field
    pub fn insert(&mut self, field: impl Into<String>, answer: impl Into<Answer>) -> Option<Answer> {
        self.entries.insert(field.into(), answer.into())
    }

    pub fn get(&self, field: &str) -> Option<&Answer> {
        self.entries.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<Answer>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (field, answer) in iter {
            set.insert(field, answer);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_to_value() {
        assert_eq!(Value::from(&Answer::from("tech")), json!("tech"));
        let list = Answer::List(vec!["skills".to_string(), "projects".to_string()]);
        assert_eq!(Value::from(&list), json!(["skills", "projects"]));
        assert_eq!(Value::from(&Answer::List(vec![])), json!([]));
    }

    #[test]
    fn test_answer_as_inline() {
        assert_eq!(Answer::from("startup").as_inline(), "startup");
        let list = Answer::List(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.as_inline(), "a, b");
    }

    #[test]
    fn test_answer_set_insert_replaces() {
        let mut set = AnswerSet::new();
        assert!(set.insert("tone", "formal").is_none());
        let previous = set.insert("tone", "casual");
        assert_eq!(previous, Some(Answer::from("formal")));
        assert_eq!(set.get("tone"), Some(&Answer::from("casual")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_answer_set_from_iter() {
        let set: AnswerSet = [("job_type", "tech"), ("language", "English")].into_iter().collect();
        assert!(set.contains("job_type"));
        assert!(!set.contains("tone"));
        assert_eq!(set.len(), 2);
    }
}
