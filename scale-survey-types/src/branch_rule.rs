use crate::QuestionId;

/// A declarative jump attached to a question.
///
/// Rules are evaluated in declaration order; the first matching rule wins.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchRule {
    /// Jump to `target` when the answer lies within `min..=max`.
    Conditional {
        min: i64,
        max: i64,
        target: QuestionId,
    },

    /// Jump to `target` regardless of the answer.
    Unconditional { target: QuestionId },
}

impl BranchRule {
    /// The question this rule jumps to.
    pub fn target(&self) -> &QuestionId {
        match self {
            Self::Conditional { target, .. } | Self::Unconditional { target } => target,
        }
    }

    /// Check whether this rule applies to the given answer value.
    pub fn matches(&self, value: i64) -> bool {
        match self {
            Self::Conditional { min, max, .. } => (*min..=*max).contains(&value),
            Self::Unconditional { .. } => true,
        }
    }
}
