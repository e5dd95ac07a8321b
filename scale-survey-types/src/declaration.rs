use serde::Deserialize;

use crate::SurveyError;

/// Declarative survey input, as handed over by the embedding host.
///
/// Field names follow the attribute vocabulary of the markup the host
/// consumes (`questions-per-page`, `question-id`, logic `type` / `range` /
/// `target`). Parsing is permissive: branching semantics are validated when
/// the registry is built, not here, so a survey with defective rules still
/// loads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SurveyDeclaration {
    /// How many questions are shown per page. Zero is rejected (with a
    /// warning) when the engine is built.
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,

    /// The questions, in display order.
    #[serde(default)]
    pub questions: Vec<QuestionDeclaration>,
}

fn default_questions_per_page() -> usize {
    1
}

impl SurveyDeclaration {
    /// Create a declaration with the default pagination width of 1.
    pub fn new(questions: Vec<QuestionDeclaration>) -> Self {
        Self {
            questions_per_page: default_questions_per_page(),
            questions,
        }
    }

    /// Set the pagination width.
    pub fn with_questions_per_page(mut self, questions_per_page: usize) -> Self {
        self.questions_per_page = questions_per_page;
        self
    }

    /// Parse a declaration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, SurveyError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One question as declared by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuestionDeclaration {
    /// Optional identifier. Without one the question is shown and paginated
    /// but cannot be targeted by branch rules.
    #[serde(default)]
    pub question_id: Option<String>,

    /// The prompt text.
    #[serde(default)]
    pub question: String,

    /// Whether an answer is required before leaving the page.
    #[serde(default)]
    pub required: bool,

    /// Lowest selectable scale value (defaults to 1).
    #[serde(default)]
    pub min: Option<i64>,

    /// Highest selectable scale value (defaults to 5).
    #[serde(default)]
    pub max: Option<i64>,

    /// Caption under the low end of the scale.
    #[serde(default)]
    pub low_score_label: Option<String>,

    /// Caption under the high end of the scale.
    #[serde(default)]
    pub high_score_label: Option<String>,

    /// Nested branch rules, in declaration order.
    #[serde(default)]
    pub logic: Vec<BranchRuleDeclaration>,
}

impl QuestionDeclaration {
    /// Create a declaration for a question with the given id.
    pub fn new(question_id: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id.into()),
            ..Self::default()
        }
    }

    /// Create a declaration for a question without an id.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the prompt text.
    pub fn with_prompt(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Set whether an answer is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the selectable scale bounds.
    pub fn with_scale(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the captions under the scale ends.
    pub fn with_labels(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.low_score_label = Some(low.into());
        self.high_score_label = Some(high.into());
        self
    }

    /// Append a branch rule.
    pub fn with_logic(mut self, rule: BranchRuleDeclaration) -> Self {
        self.logic.push(rule);
        self
    }
}

/// One branch rule as declared by the host.
///
/// `type` is `"next"` (unconditional) or `"conditional"` (gated on a
/// `range` of the form `"min-max"`). Anything else is dropped with a
/// warning when the registry is built.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRuleDeclaration {
    /// The rule kind, verbatim from the declaration.
    #[serde(rename = "type")]
    pub kind: String,

    /// The id of the question to jump to.
    #[serde(default)]
    pub target: Option<String>,

    /// The answer range this rule applies to, formatted `"min-max"`.
    #[serde(default)]
    pub range: Option<String>,
}

impl BranchRuleDeclaration {
    /// Create an unconditional rule.
    pub fn next(target: impl Into<String>) -> Self {
        Self {
            kind: "next".to_string(),
            target: Some(target.into()),
            range: None,
        }
    }

    /// Create a range-gated rule.
    pub fn conditional(range: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: "conditional".to_string(),
            target: Some(target.into()),
            range: Some(range.into()),
        }
    }
}
