use crate::{BranchRule, QuestionId};

/// Lowest selectable scale value when the declaration does not say otherwise.
pub const DEFAULT_SCALE_MIN: i64 = 1;

/// Highest selectable scale value when the declaration does not say otherwise.
pub const DEFAULT_SCALE_MAX: i64 = 5;

/// A single scale question, in declaration order.
///
/// Descriptors are built once when the survey is initialized and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDescriptor {
    /// Identifier; questions without one are rendered and paginated but
    /// cannot be targeted by branch rules.
    id: Option<QuestionId>,

    /// The prompt text shown to the user.
    prompt: String,

    /// Whether this question must be answered before its page can be left.
    required: bool,

    /// Lowest selectable scale value.
    min: i64,

    /// Highest selectable scale value.
    max: i64,

    /// Caption under the low end of the scale.
    low_score_label: Option<String>,

    /// Caption under the high end of the scale.
    high_score_label: Option<String>,

    /// Branch rules, in declaration order.
    rules: Vec<BranchRule>,
}

impl QuestionDescriptor {
    /// Create a new descriptor with default scale bounds and no rules.
    pub fn new(id: Option<QuestionId>, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            required: false,
            min: DEFAULT_SCALE_MIN,
            max: DEFAULT_SCALE_MAX,
            low_score_label: None,
            high_score_label: None,
            rules: Vec::new(),
        }
    }

    /// Mark this question as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the selectable scale bounds.
    pub fn with_scale(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the caption under the low end of the scale.
    pub fn with_low_score_label(mut self, label: impl Into<String>) -> Self {
        self.low_score_label = Some(label.into());
        self
    }

    /// Set the caption under the high end of the scale.
    pub fn with_high_score_label(mut self, label: impl Into<String>) -> Self {
        self.high_score_label = Some(label.into());
        self
    }

    /// Set the branch rules.
    pub fn with_rules(mut self, rules: Vec<BranchRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Get the id, if this question has one.
    pub fn id(&self) -> Option<&QuestionId> {
        self.id.as_ref()
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Check whether an answer is required.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Get the lowest selectable value.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Get the highest selectable value.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Get the caption under the low end of the scale.
    pub fn low_score_label(&self) -> Option<&str> {
        self.low_score_label.as_deref()
    }

    /// Get the caption under the high end of the scale.
    pub fn high_score_label(&self) -> Option<&str> {
        self.high_score_label.as_deref()
    }

    /// Get the branch rules.
    pub fn rules(&self) -> &[BranchRule] {
        &self.rules
    }

    /// Check whether any branch rules are attached.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Resolve the branch target for a recorded answer.
    ///
    /// Rules are tried in declaration order; the first one matching the
    /// value decides. `None` when no rule matches (or none are attached).
    pub fn branch_target(&self, value: i64) -> Option<&QuestionId> {
        self.rules
            .iter()
            .find(|rule| rule.matches(value))
            .map(BranchRule::target)
    }
}
