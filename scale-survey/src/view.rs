use crate::QuestionId;

/// Pagination indicator data, for "page X of Y" displays. 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// The page currently shown.
    pub current: usize,

    /// Total number of pages.
    pub total: usize,
}

/// Snapshot of everything the UI needs to render.
///
/// The UI layer re-renders purely from this reported state after each
/// mutating call; it must not infer navigation state from its own side
/// effects.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyView {
    /// Ids of the questions to show, in order. Empty once completed.
    pub visible: Vec<QuestionId>,

    /// Whether the "next" control should be enabled.
    pub can_advance: bool,

    /// Progress fraction in `[0, 1]`.
    pub progress: f64,

    /// Whether the terminal thanks-state should be shown.
    pub completed: bool,

    /// Pagination indicator; `None` while branched or completed.
    pub page: Option<PageInfo>,
}
