use std::collections::HashMap;

use serde::Serialize;

use crate::QuestionId;

/// Collected answers, keyed by question id.
///
/// A key is present only once the user has made a selection for that
/// question; absence means "unanswered". There is no placeholder value that
/// could be confused with an answered question.
///
/// # Example
/// ```
/// use scale_survey_types::{Answers, QuestionId};
///
/// let mut answers = Answers::new();
/// answers.record("q1", 4);
///
/// assert_eq!(answers.get(&QuestionId::new("q1")), Some(4));
/// assert!(!answers.contains(&QuestionId::new("q2")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<QuestionId, i64>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Store the selection for a question. A later call for the same id
    /// replaces the earlier value.
    pub fn record(&mut self, id: impl Into<QuestionId>, value: i64) {
        self.values.insert(id.into(), value);
    }

    /// Get the recorded selection for a question.
    pub fn get(&self, id: &QuestionId) -> Option<i64> {
        self.values.get(id).copied()
    }

    /// Check whether a question has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, i64)> {
        self.values.iter().map(|(id, value)| (id, *value))
    }
}
