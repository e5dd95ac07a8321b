use crate::QuestionId;

/// An anomaly the engine recovered from.
///
/// None of these abort the survey. The worst outcome is a degraded but
/// still-forward-progressing questionnaire, so every variant is reported
/// through [`Diagnostics`] and then worked around.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    /// A question was declared without an id; it is shown and paginated but
    /// branch rules cannot reach it.
    #[error("question at position {index} has no id and cannot be a branch target")]
    MissingQuestionId { index: usize },

    /// A question reused an id already taken by an earlier declaration; the
    /// earlier question keeps the id for lookup purposes.
    #[error("duplicate question id `{id}`, keeping the first declaration")]
    DuplicateQuestionId { id: QuestionId },

    /// A branch rule was declared without a target; the rule is dropped.
    #[error("question `{question}`: branch rule without a target, rule dropped")]
    MissingRuleTarget { question: String },

    /// A branch rule used an unknown `type`; the rule is dropped.
    #[error("question `{question}`: unknown rule type `{kind}`, rule dropped")]
    UnknownRuleKind { question: String, kind: String },

    /// A conditional rule carried an unparseable `range`; the rule is
    /// dropped, the question is kept.
    #[error("question `{question}`: invalid range `{range}`, rule dropped")]
    MalformedRange { question: String, range: String },

    /// A matching rule pointed at a question that does not exist; the
    /// candidate is discarded and navigation falls back to pagination.
    #[error("question `{question}`: branch target `{target}` does not exist")]
    UnknownBranchTarget {
        question: QuestionId,
        target: QuestionId,
    },

    /// The current page lies past the end of the question sequence; nothing
    /// is shown.
    #[error("page {page} is out of range ({pages} pages), showing nothing")]
    PageOutOfRange { page: usize, pages: usize },

    /// The branched-to question vanished from the registry.
    #[error("active question `{question}` is not in the registry")]
    UnknownActiveQuestion { question: QuestionId },

    /// A non-positive pagination width was requested and ignored.
    #[error("questions-per-page must be a positive integer, keeping {keeping}")]
    InvalidQuestionsPerPage { keeping: usize },
}

/// Observability hook for recovered error paths.
///
/// The engine calls this once per recovered anomaly. Inject a custom
/// implementation to capture warnings in tests or route them to a host
/// reporting channel.
pub trait Diagnostics {
    /// Called once for every recovered anomaly.
    fn warning(&self, warning: Warning);
}

/// Default [`Diagnostics`] that emits `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warning(&self, warning: Warning) {
        tracing::warn!(%warning, "recovered survey anomaly");
    }
}
